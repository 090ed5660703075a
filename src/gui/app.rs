//! Interactive chart viewer window.
//! One tab per chart; the plot supports zoom, drag and hover labels.

use crate::charts::InteractiveChart;
use egui::{Color32, RichText, TopBottomPanel};

pub struct SalesViewerApp {
    charts: Vec<InteractiveChart>,
    selected: usize,
}

impl SalesViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, charts: Vec<InteractiveChart>) -> Self {
        Self {
            charts,
            selected: 0,
        }
    }
}

impl eframe::App for SalesViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("chart_tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for (idx, chart) in self.charts.iter().enumerate() {
                    ui.selectable_value(&mut self.selected, idx, chart.title());
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.charts.get(self.selected) {
            Some(chart) => chart.draw(ui),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0).color(Color32::GRAY));
                });
            }
        });
    }
}
