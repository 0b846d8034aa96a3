use eframe::egui;

/// Light "steel blue" theme of the prediction window
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(188, 210, 238); // lightsteelblue2
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(238, 243, 250);
    pub const BG_INPUT: egui::Color32 = egui::Color32::WHITE;

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 165, 0); // Orange
    pub const ACCENT_HOVER: egui::Color32 = egui::Color32::from_rgb(255, 185, 60);

    // Status
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(200, 30, 30);

    // Plot series
    pub const SERIES_OPEN: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
    pub const SERIES_CLOSE: egui::Color32 = egui::Color32::from_rgb(0, 128, 0);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::BLACK;
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(90);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(150, 170, 200);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.hovered.weak_bg_fill = Self::ACCENT_HOVER;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.4);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
