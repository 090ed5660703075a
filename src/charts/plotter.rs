//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::data::SalesRecord;
use crate::reports::SalesSeries;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Points};
use std::sync::Arc;

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(99, 110, 250),  // Blue
    Color32::from_rgb(239, 85, 59),   // Red
    Color32::from_rgb(0, 204, 150),   // Green
    Color32::from_rgb(171, 99, 250),  // Purple
    Color32::from_rgb(255, 161, 90),  // Orange
    Color32::from_rgb(25, 211, 243),  // Cyan
    Color32::from_rgb(255, 102, 146), // Pink
    Color32::from_rgb(182, 232, 128), // Lime
    Color32::from_rgb(255, 151, 255), // Magenta
    Color32::from_rgb(254, 203, 82),  // Yellow
];

/// Marker radius buckets; a point's bucket follows its global sales.
const SIZE_TIERS: [f32; 4] = [2.5, 4.5, 7.0, 10.0];

/// Scatter of global vs. North American sales, one color per genre.
#[derive(Debug, Clone)]
pub struct ScatterData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub records: Arc<Vec<SalesRecord>>,
    /// Sorted, deduplicated genres; index picks the palette color.
    pub genres: Vec<String>,
}

impl ScatterData {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        records: Vec<SalesRecord>,
    ) -> Self {
        let mut genres: Vec<String> = records.iter().map(|r| r.genre.clone()).collect();
        genres.sort();
        genres.dedup();

        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            records: Arc::new(records),
            genres,
        }
    }
}

/// Bar per group, each bar its own color, no legend.
#[derive(Debug, Clone)]
pub struct BarData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: SalesSeries,
}

/// A chart shown in the interactive viewer.
#[derive(Debug, Clone)]
pub enum InteractiveChart {
    Scatter(ScatterData),
    Bars(BarData),
}

impl InteractiveChart {
    pub fn title(&self) -> &str {
        match self {
            InteractiveChart::Scatter(data) => &data.title,
            InteractiveChart::Bars(data) => &data.title,
        }
    }

    pub fn draw(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new(self.title()).size(18.0).strong());
        ui.add_space(8.0);
        match self {
            InteractiveChart::Scatter(data) => ChartPlotter::draw_scatter_chart(ui, data),
            InteractiveChart::Bars(data) => ChartPlotter::draw_bar_chart(ui, data),
        }
    }
}

/// Draws interactive charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn get_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Bucket index into [`SIZE_TIERS`], by square root of the share of `max`.
    pub fn size_tier(value: f64, max: f64) -> usize {
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        let share = (value / max).sqrt();
        ((share * SIZE_TIERS.len() as f64) as usize).min(SIZE_TIERS.len() - 1)
    }

    /// Record of `genre` closest to the hovered position.
    pub fn nearest_record<'a>(
        records: &'a [SalesRecord],
        genre: &str,
        at: &PlotPoint,
    ) -> Option<&'a SalesRecord> {
        records
            .iter()
            .filter(|r| r.genre == genre)
            .min_by(|a, b| {
                let da = (a.na_sales - at.x).powi(2) + (a.global_sales - at.y).powi(2);
                let db = (b.na_sales - at.x).powi(2) + (b.global_sales - at.y).powi(2);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    pub fn draw_scatter_chart(ui: &mut egui::Ui, data: &ScatterData) {
        let records = Arc::clone(&data.records);
        let max_sales = records.iter().map(|r| r.global_sales).fold(0.0, f64::max);

        Plot::new("scatter_sales")
            .legend(Legend::default())
            .x_axis_label(data.x_label.as_str())
            .y_axis_label(data.y_label.as_str())
            .label_formatter(move |genre, value| {
                if genre.is_empty() {
                    return format!("NA: {:.2}\nGlobal: {:.2}", value.x, value.y);
                }
                match Self::nearest_record(&records, genre, value) {
                    Some(r) => format!(
                        "{}\n{}\nPlatform: {}\nYear: {}\nPublisher: {}\nNA: {:.2}  Global: {:.2}",
                        r.name, r.genre, r.platform, r.year, r.publisher, r.na_sales, r.global_sales
                    ),
                    None => genre.to_string(),
                }
            })
            .show(ui, |plot_ui| {
                for (genre_idx, genre) in data.genres.iter().enumerate() {
                    let color = Self::get_color(genre_idx);

                    let mut tiers: Vec<Vec<[f64; 2]>> = vec![Vec::new(); SIZE_TIERS.len()];
                    for record in data.records.iter().filter(|r| &r.genre == genre) {
                        tiers[Self::size_tier(record.global_sales, max_sales)]
                            .push([record.na_sales, record.global_sales]);
                    }

                    // Same name per genre so the legend shows one entry.
                    for (tier, points) in tiers.into_iter().enumerate() {
                        if points.is_empty() {
                            continue;
                        }
                        plot_ui.points(
                            Points::new(PlotPoints::from(points))
                                .radius(SIZE_TIERS[tier])
                                .color(color.gamma_multiply(0.8))
                                .name(genre),
                        );
                    }
                }
            });
    }

    pub fn draw_bar_chart(ui: &mut egui::Ui, data: &BarData) {
        let labels: Vec<String> = data.series.keys().iter().map(|k| k.to_string()).collect();

        let bars: Vec<Bar> = data
            .series
            .points
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                Bar::new(idx as f64, point.total)
                    .name(&point.key)
                    .fill(Self::get_color(idx))
                    .width(0.7)
            })
            .collect();

        Plot::new("bar_sales")
            .x_axis_label(data.x_label.as_str())
            .y_axis_label(data.y_label.as_str())
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(data.series.measure.column()));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, genre: &str, na: f64, global: f64) -> SalesRecord {
        SalesRecord {
            name: name.to_string(),
            platform: "Wii".to_string(),
            year: 2008,
            genre: genre.to_string(),
            publisher: "Nintendo".to_string(),
            na_sales: na,
            global_sales: global,
        }
    }

    #[test]
    fn size_tier_grows_with_sales() {
        assert_eq!(ChartPlotter::size_tier(0.0, 80.0), 0);
        assert_eq!(ChartPlotter::size_tier(1.0, 80.0), 0);
        assert_eq!(ChartPlotter::size_tier(20.0, 80.0), 2);
        assert_eq!(ChartPlotter::size_tier(80.0, 80.0), SIZE_TIERS.len() - 1);
        assert_eq!(ChartPlotter::size_tier(5.0, 0.0), 0);
    }

    #[test]
    fn nearest_record_matches_genre_and_position() {
        let records = vec![
            record("Wii Sports", "Sports", 41.5, 82.7),
            record("Mario Kart Wii", "Racing", 15.9, 35.8),
            record("Wii Fit", "Sports", 8.9, 22.7),
        ];

        let hit = ChartPlotter::nearest_record(&records, "Sports", &PlotPoint::new(9.0, 23.0))
            .expect("sports record");
        assert_eq!(hit.name, "Wii Fit");
        assert!(ChartPlotter::nearest_record(&records, "Puzzle", &PlotPoint::new(0.0, 0.0))
            .is_none());
    }

    #[test]
    fn scatter_data_collects_sorted_genres() {
        let data = ScatterData::new(
            "title",
            "x",
            "y",
            vec![
                record("a", "Sports", 1.0, 2.0),
                record("b", "Action", 1.0, 2.0),
                record("c", "Sports", 1.0, 2.0),
            ],
        );
        assert_eq!(data.genres, vec!["Action".to_string(), "Sports".to_string()]);
    }
}
