use crate::domain::market::observation::Dataset;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Everything a scatter plot needs, precomputed once from the dataset
pub struct ScatterSeries {
    pub id: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub legend: &'static str,
    pub color: egui::Color32,
    pub points: Vec<[f64; 2]>,
}

pub struct ScatterViewModel;

impl ScatterViewModel {
    pub fn open_vs_turnover(dataset: &Dataset) -> ScatterSeries {
        ScatterSeries {
            id: "open_vs_turnover",
            title: "Open Rate Vs. Turnover",
            x_label: "Open Rate",
            legend: "Turnover",
            color: DesignSystem::SERIES_OPEN,
            points: dataset.open_vs_turnover(),
        }
    }

    pub fn close_vs_turnover(dataset: &Dataset) -> ScatterSeries {
        ScatterSeries {
            id: "close_vs_turnover",
            title: "Close Rate Vs. Turnover",
            x_label: "Close Rate",
            legend: "Turnover",
            color: DesignSystem::SERIES_CLOSE,
            points: dataset.close_vs_turnover(),
        }
    }

    /// Both plots, left to right
    pub fn build(dataset: &Dataset) -> Vec<ScatterSeries> {
        vec![
            Self::open_vs_turnover(dataset),
            Self::close_vs_turnover(dataset),
        ]
    }
}
