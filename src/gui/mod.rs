//! GUI module - interactive chart window

mod app;

pub use app::SalesViewerApp;

use crate::charts::InteractiveChart;
use eframe::egui;

/// Show the interactive charts; returns when the window is closed.
pub fn show_charts(charts: Vec<InteractiveChart>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Video Game Sales"),
        ..Default::default()
    };

    eframe::run_native(
        "Video Game Sales",
        options,
        Box::new(|cc| Ok(Box::new(SalesViewerApp::new(cc, charts)))),
    )
}
