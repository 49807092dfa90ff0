//! Chart styling configuration.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Color palettes available to the renderer.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    Deep,
    Blues,
    Viridis,
    Magma,
    Coolwarm,
}

const DEEP: [RGBColor; 6] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
];

const BLUES: [RGBColor; 6] = [
    RGBColor(8, 48, 107),
    RGBColor(8, 81, 156),
    RGBColor(33, 113, 181),
    RGBColor(66, 146, 198),
    RGBColor(107, 174, 214),
    RGBColor(158, 202, 225),
];

const VIRIDIS: [RGBColor; 6] = [
    RGBColor(68, 1, 84),
    RGBColor(65, 68, 135),
    RGBColor(42, 120, 142),
    RGBColor(34, 168, 132),
    RGBColor(122, 209, 81),
    RGBColor(253, 231, 37),
];

const MAGMA: [RGBColor; 6] = [
    RGBColor(0, 0, 4),
    RGBColor(59, 15, 112),
    RGBColor(140, 41, 129),
    RGBColor(222, 73, 104),
    RGBColor(254, 159, 109),
    RGBColor(252, 253, 191),
];

const COOLWARM: [RGBColor; 6] = [
    RGBColor(59, 76, 192),
    RGBColor(180, 4, 38),
    RGBColor(124, 159, 249),
    RGBColor(238, 132, 104),
    RGBColor(192, 212, 245),
    RGBColor(242, 203, 183),
];

impl Palette {
    fn colors(&self) -> &'static [RGBColor] {
        match self {
            Self::Deep => &DEEP,
            Self::Blues => &BLUES,
            Self::Viridis => &VIRIDIS,
            Self::Magma => &MAGMA,
            Self::Coolwarm => &COOLWARM,
        }
    }

    /// Color for the `index`-th series or bar, cycling through the palette.
    pub fn color(&self, index: usize) -> RGBColor {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}

/// Styling applied to every rendered chart.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartStyle {
    /// Image width in pixels (default: 1200)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Image height in pixels (default: 600)
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_caption_font_size")]
    pub caption_font_size: u32,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: u32,
    #[serde(default)]
    pub palette: Palette,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            caption_font_size: default_caption_font_size(),
            label_font_size: default_label_font_size(),
            palette: Palette::default(),
        }
    }
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    600
}

fn default_caption_font_size() -> u32 {
    28
}

fn default_label_font_size() -> u32 {
    18
}
