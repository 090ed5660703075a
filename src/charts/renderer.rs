//! Static Chart Renderer
//! Draws bar and line charts with plotters into an in-memory RGB buffer,
//! then encodes them as PNG.

use crate::reports::SalesSeries;
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;
use thiserror::Error;

// Colors
pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const LINE_BLUE: RGBColor = RGBColor(0, 0, 255);
pub const BAR_GREEN: RGBColor = RGBColor(0, 128, 0);
const GRID: RGBColor = RGBColor(176, 176, 176);

const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("chart has no data")]
    Empty,
    #[error("pixel buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Size, titles and color of a static chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub color: RGBColor,
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Vertical bar per group, in series order, with category labels rotated.
    pub fn render_bar_chart(
        series: &SalesSeries,
        style: &ChartStyle,
    ) -> Result<RgbImage, RenderError> {
        if series.is_empty() {
            return Err(RenderError::Empty);
        }
        Self::render_to_image(style.width, style.height, |root| {
            Self::draw_bar_chart(root, series, style)
        })
    }

    /// Line with circle markers through `(year, total)` points.
    pub fn render_line_chart(
        points: &[(i32, f64)],
        style: &ChartStyle,
    ) -> Result<RgbImage, RenderError> {
        if points.is_empty() {
            return Err(RenderError::Empty);
        }
        Self::render_to_image(style.width, style.height, |root| {
            Self::draw_line_chart(root, points, style)
        })
    }

    /// Encode an image as PNG at `path`.
    pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), RenderError> {
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    fn render_to_image<F>(width: u32, height: u32, draw: F) -> Result<RgbImage, RenderError>
    where
        F: for<'a> FnOnce(DrawingArea<BitMapBackend<'a>, Shift>) -> Result<(), Box<dyn Error>>,
    {
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            draw(root).map_err(|e| RenderError::Draw(e.to_string()))?;
        }
        RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer(width, height))
    }

    /// Upper y bound with 10% headroom.
    fn y_upper_bound(max: f64) -> f64 {
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    fn draw_bar_chart<DB: DrawingBackend>(
        root: DrawingArea<DB, Shift>,
        series: &SalesSeries,
        style: &ChartStyle,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let labels: Vec<String> = series.keys().iter().map(|k| k.to_string()).collect();
        let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
        let groups = labels.len() as u32;

        let mut chart = ChartBuilder::on(&root)
            .caption(&style.title, (FONT, 30))
            .margin(20)
            .x_label_area_size(40 + longest * 8)
            .y_label_area_size(80)
            .build_cartesian_2d(
                (0u32..groups).into_segmented(),
                0f64..Self::y_upper_bound(series.max_total()),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(GRID.mix(0.7))
            .light_line_style(WHITE)
            .x_labels(labels.len())
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(idx) => {
                    labels.get(*idx as usize).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .x_label_style(
                (FONT, 14)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .axis_desc_style((FONT, 18))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(style.color.filled())
                .margin(6)
                .data(
                    series
                        .points
                        .iter()
                        .enumerate()
                        .map(|(idx, point)| (idx as u32, point.total)),
                ),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_line_chart<DB: DrawingBackend>(
        root: DrawingArea<DB, Shift>,
        points: &[(i32, f64)],
        style: &ChartStyle,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let first = points.iter().map(|(x, _)| *x).min().unwrap_or(0);
        let last = points.iter().map(|(x, _)| *x).max().unwrap_or(0);
        let y_max = points.iter().map(|(_, y)| *y).fold(0.0, f64::max);

        let mut chart = ChartBuilder::on(&root)
            .caption(&style.title, (FONT, 30))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(first - 1..last + 1, 0f64..Self::y_upper_bound(y_max))?;

        chart
            .configure_mesh()
            .bold_line_style(GRID.mix(0.7))
            .light_line_style(WHITE)
            .x_label_formatter(&|year| year.to_string())
            .x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .axis_desc_style((FONT, 18))
            .draw()?;

        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            style.color.stroke_width(2),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, style.color.filled())),
        )?;

        root.present()?;
        Ok(())
    }
}
