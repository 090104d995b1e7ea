use plotters::style::{RGBAColor, RGBColor};

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
pub const SALMON: RGBColor = RGBColor(250, 128, 114);
pub const PURPLE: RGBColor = RGBColor(128, 0, 128);
pub const TEAL: RGBColor = RGBColor(0, 128, 128);

/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(255, 255, 255, 1.0),
            text_color: RGBAColor(20, 20, 20, 0.9),
            grid_color: RGBAColor(0, 0, 0, 0.1),
            axis_color: RGBAColor(0, 0, 0, 0.8),
        }
    }
}

/// Chart style configuration
pub struct ChartStyle {
    pub caption_size: u32,
    pub font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
    /// Gap between neighbouring bars, in pixels
    pub bar_margin: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            caption_size: 22,
            font_size: 15,
            margin: 15,
            label_area_size: 60,
            bar_margin: 6,
        }
    }
}
