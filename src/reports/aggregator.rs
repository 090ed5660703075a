//! Sales Aggregator Module
//! Groups the cleaned table by one dimension and sums a sales measure.

use crate::data::{columns, SalesRecord, SalesTable};
use polars::prelude::*;
use std::fmt;

/// Categorical column a report groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Genre,
    Year,
    Publisher,
    Platform,
}

impl Dimension {
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Genre => columns::GENRE,
            Dimension::Year => columns::YEAR,
            Dimension::Publisher => columns::PUBLISHER,
            Dimension::Platform => columns::PLATFORM,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Numeric sales column a report sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    #[default]
    GlobalSales,
    NaSales,
}

impl Measure {
    pub fn column(self) -> &'static str {
        match self {
            Measure::GlobalSales => columns::GLOBAL_SALES,
            Measure::NaSales => columns::NA_SALES,
        }
    }
}

/// Ordering applied to grouped totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Largest total first.
    Descending,
    /// Largest total first, keeping at most `n` groups.
    Top(usize),
    /// Group key ascending.
    Chronological,
}

/// Summed measure for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

/// Aggregated totals for one dimension, in ranked order.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSeries {
    pub dimension: Dimension,
    pub measure: Measure,
    pub points: Vec<GroupTotal>,
}

impl SalesSeries {
    pub fn keys(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.key.as_str()).collect()
    }

    pub fn totals(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total).collect()
    }

    pub fn max_total(&self) -> f64 {
        self.points.iter().map(|p| p.total).fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Group-and-sum operations over a [`SalesTable`].
pub struct SalesAggregator;

impl SalesAggregator {
    /// Sum `measure` per `dimension` group, ordered by `ranking`.
    ///
    /// Equal totals are ordered by group key so the output is deterministic.
    pub fn total_by(
        table: &SalesTable,
        dimension: Dimension,
        measure: Measure,
        ranking: Ranking,
    ) -> PolarsResult<SalesSeries> {
        let key = dimension.column();
        let value = measure.column();

        let grouped = table
            .dataframe()
            .clone()
            .lazy()
            .group_by([col(key)])
            .agg([col(value).sum()]);

        let ranked = match ranking {
            Ranking::Chronological => {
                grouped.sort_by_exprs([col(key)], SortMultipleOptions::default())
            }
            Ranking::Descending | Ranking::Top(_) => grouped.sort_by_exprs(
                [col(value), col(key)],
                SortMultipleOptions::default().with_order_descending_multi([true, false]),
            ),
        };

        let ranked = match ranking {
            Ranking::Top(n) => ranked.limit(IdxSize::try_from(n).unwrap_or(IdxSize::MAX)),
            _ => ranked,
        };

        let df = ranked
            .select([col(key).cast(DataType::String), col(value)])
            .collect()?;

        let keys = df.column(key)?.str()?;
        let totals = df.column(value)?.f64()?;

        let points = keys
            .into_iter()
            .zip(totals.into_iter())
            .filter_map(|(k, v)| {
                Some(GroupTotal {
                    key: k?.to_string(),
                    total: v?,
                })
            })
            .collect();

        Ok(SalesSeries {
            dimension,
            measure,
            points,
        })
    }

    /// Records with positive global or North American sales.
    pub fn scatter_points(table: &SalesTable) -> PolarsResult<Vec<SalesRecord>> {
        let filtered = table
            .dataframe()
            .clone()
            .lazy()
            .filter(
                col(columns::GLOBAL_SALES)
                    .gt(lit(0.0))
                    .or(col(columns::NA_SALES).gt(lit(0.0))),
            )
            .collect()?;

        SalesTable::records_of(&filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataCleaner;

    fn table() -> SalesTable {
        let raw = df!(
            "Name" => ["Halo", "Gears", "FIFA", "Madden", "Zelda", "Pong"],
            "Platform" => ["X360", "X360", "PS2", "PS2", "Wii", "2600"],
            "Year" => [2010i64, 2006, 2005, 2010, 2006, 1980],
            "Genre" => ["Action", "Action", "Sports", "Sports", "Adventure", "Sports"],
            "Publisher" => ["Microsoft", "Microsoft", "EA", "EA", "Nintendo", "Atari"],
            "NA_Sales" => [0.5, 1.0, 0.0, 2.0, 0.0, 0.0],
            "Global_Sales" => [1.0, 2.0, 1.0, 2.0, 4.0, 0.0]
        )
        .expect("valid frame");
        DataCleaner::clean(&raw).expect("cleans")
    }

    fn as_pairs(series: &SalesSeries) -> Vec<(String, f64)> {
        series
            .points
            .iter()
            .map(|p| (p.key.clone(), p.total))
            .collect()
    }

    #[test]
    fn genre_totals_descend_with_ties_by_key() {
        let series = SalesAggregator::total_by(
            &table(),
            Dimension::Genre,
            Measure::GlobalSales,
            Ranking::Descending,
        )
        .expect("aggregates");

        assert_eq!(
            as_pairs(&series),
            vec![
                ("Adventure".to_string(), 4.0),
                ("Action".to_string(), 3.0),
                ("Sports".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn years_are_chronological() {
        let series = SalesAggregator::total_by(
            &table(),
            Dimension::Year,
            Measure::GlobalSales,
            Ranking::Chronological,
        )
        .expect("aggregates");

        assert_eq!(series.keys(), vec!["1980", "2005", "2006", "2010"]);
        assert_eq!(series.totals(), vec![0.0, 1.0, 6.0, 3.0]);
    }

    #[test]
    fn top_n_truncates() {
        let series = SalesAggregator::total_by(
            &table(),
            Dimension::Platform,
            Measure::GlobalSales,
            Ranking::Top(2),
        )
        .expect("aggregates");
        assert_eq!(series.keys(), vec!["Wii", "PS2"]);

        let all = SalesAggregator::total_by(
            &table(),
            Dimension::Publisher,
            Measure::GlobalSales,
            Ranking::Top(50),
        )
        .expect("aggregates");
        assert_eq!(all.len(), 4);
        assert_eq!(all.max_total(), 4.0);

        let unbounded = SalesAggregator::total_by(
            &table(),
            Dimension::Publisher,
            Measure::GlobalSales,
            Ranking::Top(usize::MAX),
        )
        .expect("aggregates");
        assert_eq!(unbounded, all);
    }

    #[test]
    fn north_american_measure_is_summed() {
        let series = SalesAggregator::total_by(
            &table(),
            Dimension::Publisher,
            Measure::NaSales,
            Ranking::Top(1),
        )
        .expect("aggregates");
        assert_eq!(as_pairs(&series), vec![("EA".to_string(), 2.0)]);
    }

    #[test]
    fn scatter_skips_rows_without_sales() {
        let names: Vec<String> = SalesAggregator::scatter_points(&table())
            .expect("filters")
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Halo", "Gears", "FIFA", "Madden", "Zelda"]);
    }
}
