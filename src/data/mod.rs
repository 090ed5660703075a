//! Data module - CSV loading, cleaning and the cleaned sales table

mod cleaner;
mod loader;
mod table;

pub use cleaner::{CleanError, DataCleaner};
pub use loader::{DataLoader, LoaderError};
pub use table::{SalesRecord, SalesTable};

/// Column names of the sales dataset.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const PLATFORM: &str = "Platform";
    pub const YEAR: &str = "Year";
    pub const GENRE: &str = "Genre";
    pub const PUBLISHER: &str = "Publisher";
    pub const NA_SALES: &str = "NA_Sales";
    pub const EU_SALES: &str = "EU_Sales";
    pub const JP_SALES: &str = "JP_Sales";
    pub const OTHER_SALES: &str = "Other_Sales";
    pub const GLOBAL_SALES: &str = "Global_Sales";

    /// Columns every dataset must provide.
    pub const REQUIRED: [&str; 7] = [
        NAME,
        PLATFORM,
        YEAR,
        GENRE,
        PUBLISHER,
        NA_SALES,
        GLOBAL_SALES,
    ];

    /// Text columns; cast to strings even when every value looks numeric.
    pub const TEXT: [&str; 4] = [NAME, PLATFORM, GENRE, PUBLISHER];

    /// Numeric sales measures, in millions. Only NA and global are required.
    pub const SALES: [&str; 5] = [NA_SALES, EU_SALES, JP_SALES, OTHER_SALES, GLOBAL_SALES];
}
