// src/ui/chart.rs

use crate::config;
use crate::stocks::StockTable;
use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Legend, Plot};

/// Current price per rank. Redrawn from the table every frame, no history.
pub fn show(ui: &mut egui::Ui, table: &StockTable) {
    Plot::new("price_by_rank")
        .height(config::CHART_HEIGHT)
        .legend(Legend::default())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = table
                .records()
                .iter()
                .map(|r| {
                    Bar::new(r.rank as f64, r.price)
                        .name(&r.name)
                        .width(0.6)
                        .fill(Color32::from_rgba_unmultiplied(120, 180, 255, 90))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name("Price").color(Color32::LIGHT_BLUE));
        });
}
