use crate::application::agents::user_agent::UserAgent;
use crate::interfaces::components::prediction_form::render_prediction_form;
use crate::interfaces::components::scatter::render_scatter_plot;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::scatter_view_model::{ScatterSeries, ScatterViewModel};
use eframe::egui;

/// Desktop window: prediction form on top, the two historical scatter plots below
pub struct PredictorApp {
    agent: UserAgent,
    scatter: Vec<ScatterSeries>,
}

impl PredictorApp {
    pub fn new(agent: UserAgent) -> Self {
        let scatter = ScatterViewModel::build(&agent.dataset);
        Self { agent, scatter }
    }
}

/// Install the application theme on a fresh egui context
pub fn configure_style(ctx: &egui::Context) {
    ctx.set_visuals(DesignSystem::theme());
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("fit_summary")
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_WINDOW)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("Model fit: {}", self.agent.service.summary()))
                        .small()
                        .color(DesignSystem::TEXT_MUTED),
                );
            });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                render_prediction_form(ui, &mut self.agent);

                ui.add_space(DesignSystem::SPACING_LARGE);

                let plot_height = (ui.available_height() - 80.0).max(240.0);
                ui.columns(self.scatter.len(), |columns| {
                    for (column, series) in columns.iter_mut().zip(&self.scatter) {
                        render_scatter_plot(column, series, plot_height);
                    }
                });
            });
    }
}
