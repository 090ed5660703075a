//! The five sales reports.
//!
//! Each report aggregates the cleaned table (pure, `*_series` / `*_chart`) and
//! then renders: static reports write a PNG, interactive reports hand their
//! chart to the viewer.

use super::aggregator::{Dimension, Measure, Ranking, SalesAggregator, SalesSeries};
use super::{
    ReportArtifact, ReportError, ReportKind, ReportSettings, GENRE_CHART_FILE,
    PUBLISHER_CHART_FILE, TIME_CHART_FILE,
};
use crate::charts::{
    BarData, ChartStyle, InteractiveChart, ScatterData, StaticChartRenderer, BAR_GREEN,
    LINE_BLUE, SKY_BLUE,
};
use crate::data::SalesTable;
use image::RgbImage;
use polars::prelude::PolarsResult;
use std::path::Path;
use tracing::{error, info};

const SALES_AXIS: &str = "Total Global Sales (in millions)";

pub struct SalesReports;

impl SalesReports {
    /// Run one report. An absent table is logged and skipped.
    pub fn run(
        kind: ReportKind,
        table: Option<&SalesTable>,
        settings: &ReportSettings,
    ) -> Result<Option<ReportArtifact>, ReportError> {
        let Some(table) = table else {
            error!(report = %kind, "Cannot plot, no sales data");
            return Ok(None);
        };

        let artifact = match kind {
            ReportKind::SalesByGenre => Self::plot_sales_by_genre(table, &settings.output_dir)?,
            ReportKind::SalesOverTime => Self::plot_sales_over_time(table, &settings.output_dir)?,
            ReportKind::TopPublishers => Self::plot_publisher_comparison(
                table,
                settings.top_publishers,
                &settings.output_dir,
            )?,
            ReportKind::GlobalVsNorthAmerica => Self::plot_scatter_sales_global(table)?,
            ReportKind::TopPlatforms => {
                Self::plot_platform_comparison(table, settings.top_platforms)?
            }
        };
        Ok(Some(artifact))
    }

    pub fn genre_series(table: &SalesTable) -> PolarsResult<SalesSeries> {
        SalesAggregator::total_by(
            table,
            Dimension::Genre,
            Measure::GlobalSales,
            Ranking::Descending,
        )
    }

    pub fn yearly_series(table: &SalesTable) -> PolarsResult<SalesSeries> {
        SalesAggregator::total_by(
            table,
            Dimension::Year,
            Measure::GlobalSales,
            Ranking::Chronological,
        )
    }

    pub fn publisher_series(table: &SalesTable, top_n: usize) -> PolarsResult<SalesSeries> {
        SalesAggregator::total_by(
            table,
            Dimension::Publisher,
            Measure::GlobalSales,
            Ranking::Top(top_n),
        )
    }

    pub fn platform_series(table: &SalesTable, top_n: usize) -> PolarsResult<SalesSeries> {
        SalesAggregator::total_by(
            table,
            Dimension::Platform,
            Measure::GlobalSales,
            Ranking::Top(top_n),
        )
    }

    pub fn scatter_chart(table: &SalesTable) -> PolarsResult<InteractiveChart> {
        let records = SalesAggregator::scatter_points(table)?;
        Ok(InteractiveChart::Scatter(ScatterData::new(
            "Global Sales vs. North American Sales by Genre",
            "North American Sales (in millions)",
            "Global Sales (in millions)",
            records,
        )))
    }

    pub fn platform_chart(table: &SalesTable, top_n: usize) -> PolarsResult<InteractiveChart> {
        Ok(InteractiveChart::Bars(BarData {
            title: format!("Top {top_n} Platforms by Global Sales (Interactive)"),
            x_label: "Gaming Platform".to_string(),
            y_label: SALES_AXIS.to_string(),
            series: Self::platform_series(table, top_n)?,
        }))
    }

    fn plot_sales_by_genre(
        table: &SalesTable,
        output_dir: &Path,
    ) -> Result<ReportArtifact, ReportError> {
        let series = Self::genre_series(table)?;
        let style = ChartStyle {
            title: "Total Global Sales by Genre".to_string(),
            x_label: "Genre".to_string(),
            y_label: SALES_AXIS.to_string(),
            width: 1200,
            height: 600,
            color: SKY_BLUE,
        };
        let image = StaticChartRenderer::render_bar_chart(&series, &style)?;
        Self::save(&image, output_dir, GENRE_CHART_FILE)
    }

    fn plot_sales_over_time(
        table: &SalesTable,
        output_dir: &Path,
    ) -> Result<ReportArtifact, ReportError> {
        let series = Self::yearly_series(table)?;
        let points: Vec<(i32, f64)> = series
            .points
            .iter()
            .filter_map(|p| p.key.parse().ok().map(|year| (year, p.total)))
            .collect();
        let style = ChartStyle {
            title: "Global Sales By Time".to_string(),
            x_label: "Year".to_string(),
            y_label: SALES_AXIS.to_string(),
            width: 1200,
            height: 600,
            color: LINE_BLUE,
        };
        let image = StaticChartRenderer::render_line_chart(&points, &style)?;
        Self::save(&image, output_dir, TIME_CHART_FILE)
    }

    fn plot_publisher_comparison(
        table: &SalesTable,
        top_n: usize,
        output_dir: &Path,
    ) -> Result<ReportArtifact, ReportError> {
        let series = Self::publisher_series(table, top_n)?;
        let style = ChartStyle {
            title: format!("Top {top_n} Publishers by Global Sales"),
            x_label: "Publisher".to_string(),
            y_label: SALES_AXIS.to_string(),
            width: 1200,
            height: 800,
            color: BAR_GREEN,
        };
        let image = StaticChartRenderer::render_bar_chart(&series, &style)?;
        Self::save(&image, output_dir, PUBLISHER_CHART_FILE)
    }

    fn plot_scatter_sales_global(table: &SalesTable) -> Result<ReportArtifact, ReportError> {
        let chart = Self::scatter_chart(table)?;
        info!("Displaying interactive scatter plot...");
        Ok(ReportArtifact::Interactive(chart))
    }

    fn plot_platform_comparison(
        table: &SalesTable,
        top_n: usize,
    ) -> Result<ReportArtifact, ReportError> {
        let chart = Self::platform_chart(table, top_n)?;
        info!("Displaying interactive bar chart for top {top_n} platforms...");
        Ok(ReportArtifact::Interactive(chart))
    }

    fn save(
        image: &RgbImage,
        output_dir: &Path,
        file_name: &str,
    ) -> Result<ReportArtifact, ReportError> {
        let path = output_dir.join(file_name);
        StaticChartRenderer::save_png(image, &path)?;
        info!("Plot saved as '{}'", path.display());
        Ok(ReportArtifact::Saved(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataCleaner;
    use polars::prelude::*;

    fn table() -> SalesTable {
        let raw = df!(
            "Name" => ["Wii Sports", "Mario Kart Wii", "GTA V", "Halo 3", "Tetris"],
            "Platform" => ["Wii", "Wii", "PS3", "X360", "GB"],
            "Year" => [2006i64, 2008, 2013, 2007, 1989],
            "Genre" => ["Sports", "Racing", "Action", "Shooter", "Puzzle"],
            "Publisher" => ["Nintendo", "Nintendo", "Take-Two Interactive", "Microsoft", "Nintendo"],
            "NA_Sales" => [41.49, 15.85, 7.01, 7.97, 23.2],
            "Global_Sales" => [82.74, 35.82, 21.4, 12.14, 30.26]
        )
        .expect("valid frame");
        DataCleaner::clean(&raw).expect("cleans")
    }

    #[test]
    fn absent_table_is_skipped() {
        for kind in ReportKind::ALL {
            let outcome = SalesReports::run(kind, None, &ReportSettings::default())
                .expect("absent table is not an error");
            assert!(outcome.is_none());
        }
    }

    #[test]
    fn interactive_reports_write_nothing() {
        let settings = ReportSettings {
            output_dir: "does/not/exist".into(),
            ..ReportSettings::default()
        };
        let table = table();

        let scatter = SalesReports::run(ReportKind::GlobalVsNorthAmerica, Some(&table), &settings)
            .expect("scatter builds");
        assert!(matches!(
            scatter,
            Some(ReportArtifact::Interactive(InteractiveChart::Scatter(_)))
        ));

        let platforms = SalesReports::run(ReportKind::TopPlatforms, Some(&table), &settings)
            .expect("platform chart builds");
        match platforms {
            Some(ReportArtifact::Interactive(InteractiveChart::Bars(data))) => {
                assert_eq!(data.title, "Top 15 Platforms by Global Sales (Interactive)");
                assert_eq!(data.series.keys(), vec!["Wii", "GB", "PS3", "X360"]);
            }
            other => panic!("unexpected artifact: {other:?}"),
        }
    }

    #[test]
    fn publisher_series_ranks_nintendo_first() {
        let series = SalesReports::publisher_series(&table(), 2).expect("aggregates");
        assert_eq!(series.keys(), vec!["Nintendo", "Take-Two Interactive"]);
        assert!((series.points[0].total - 148.82).abs() < 1e-9);
    }

    #[test]
    fn yearly_series_is_ordered_by_year() {
        let series = SalesReports::yearly_series(&table()).expect("aggregates");
        assert_eq!(series.keys(), vec!["1989", "2006", "2007", "2008", "2013"]);
    }
}
