use crate::application::agents::user_agent::{PredictionOutcome, UserAgent};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Title, the Open/Close inputs, the "Predict Turnover" button and the last result
pub fn render_prediction_form(ui: &mut egui::Ui, agent: &mut UserAgent) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Stock Turnover Prediction")
                .size(22.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.label(
            egui::RichText::new("Enter Open and Close Rates:")
                .size(13.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        let mut submitted = false;

        // Fixed-width row so the inputs stay centered under the heading
        let row_width = 420.0;
        ui.allocate_ui_with_layout(
            egui::vec2(row_width, 28.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.label("Open");
                let open = ui.add(
                    egui::TextEdit::singleline(&mut agent.open_input)
                        .desired_width(140.0)
                        .hint_text("e.g. 2450.50"),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label("Close");
                let close = ui.add(
                    egui::TextEdit::singleline(&mut agent.close_input)
                        .desired_width(140.0)
                        .hint_text("e.g. 2461.05"),
                );

                if (open.lost_focus() || close.lost_focus())
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    submitted = true;
                }
            },
        );

        ui.add_space(DesignSystem::SPACING_SMALL);
        let button = egui::Button::new(
            egui::RichText::new("Predict Turnover")
                .size(13.0)
                .color(DesignSystem::TEXT_PRIMARY),
        )
        .fill(DesignSystem::ACCENT_PRIMARY);
        if ui.add(button).clicked() {
            submitted = true;
        }

        if submitted {
            agent.predict_turnover();
        }

        ui.add_space(DesignSystem::SPACING_SMALL);
        match &agent.outcome {
            Some(PredictionOutcome::Success(prediction)) => {
                egui::Frame::NONE
                    .fill(DesignSystem::ACCENT_PRIMARY)
                    .corner_radius(4)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(prediction.display())
                                .size(15.0)
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                    });
            }
            Some(PredictionOutcome::Error(message)) => {
                ui.label(
                    egui::RichText::new(message)
                        .size(13.0)
                        .strong()
                        .color(DesignSystem::DANGER),
                );
            }
            None => {}
        }
    });
}
