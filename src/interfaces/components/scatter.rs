use crate::interfaces::components::card::Card;
use crate::interfaces::view_models::scatter_view_model::ScatterSeries;
use eframe::egui;
use egui_plot::{Legend, Plot, Points};

/// Renders one historical scatter plot inside a titled card
pub fn render_scatter_plot(ui: &mut egui::Ui, series: &ScatterSeries, height: f32) {
    Card::new().title(series.title).show(ui, |ui| {
        Plot::new(series.id)
            .height(height)
            .show_grid([true, true])
            .legend(Legend::default())
            .x_axis_label(series.x_label)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(series.legend, series.points.clone())
                        .color(series.color)
                        .radius(2.5),
                );
            });
    });
}
