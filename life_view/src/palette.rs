// palette.rs - Colors for each decay level

use egui::{Color32, Stroke};
use life_core::DecayLevel;

pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 30);

const WHITE: Color32 = Color32::from_rgb(235, 232, 249);
const FUCHSIA: Color32 = Color32::from_rgb(215, 53, 180);
const DARK_FUCHSIA: Color32 = Color32::from_rgb(148, 40, 84);
const NAVY: Color32 = Color32::from_rgb(25, 35, 65);
const GOLDENROD: Color32 = Color32::from_rgb(247, 199, 74);
const SLATE: Color32 = Color32::from_rgb(55, 49, 64);

/// How a cell at a given level is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub fill: Color32,
    pub outline: Stroke,
}

pub fn style_for(level: DecayLevel) -> CellStyle {
    let (fill, outline) = match level {
        DecayLevel::Dead => (SLATE, Stroke::NONE),
        DecayLevel::Low => (DARK_FUCHSIA, Stroke::new(1.0, NAVY)),
        DecayLevel::Medium => (FUCHSIA, Stroke::new(1.0, DARK_FUCHSIA)),
        DecayLevel::High => (GOLDENROD, Stroke::new(2.0, FUCHSIA)),
        DecayLevel::Alive => (WHITE, Stroke::new(2.0, GOLDENROD)),
    };
    CellStyle { fill, outline }
}
