use serde::Serialize;

/// Application-level strings shown by front ends
pub struct AppInfo;

impl AppInfo {
    pub const TITLE: &'static str = "Ids vs Vds Transistor Tool";
}

/// Presentation data handed to a renderer along with the curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            title: "Ids vs Vds for NMOS and PMOS (shifted and flipped PMOS)".to_string(),
            x_label: "Vds (V)".to_string(),
            y_label: "Ids (A)".to_string(),
            grid: true,
        }
    }
}
