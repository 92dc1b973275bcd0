// src/draw/style.rs
// text label presets and measurement

use nannou::geom;
use nannou::text;

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: u32,
    /// Packed 0xRRGGBB.
    pub color: u32,
}

impl TextStyle {
    /// Laid-out width of `content` in pixels, with the same text
    /// machinery the renderer draws with.
    pub fn measure(&self, content: &str) -> f32 {
        let bounds = geom::Rect::from_w_h(4096.0, 512.0);
        let laid_out = text::text(content)
            .font_size(self.font_size)
            .left_justify()
            .build(bounds);
        laid_out.bounding_rect().w()
    }
}

/// The two label presets this layer consumes.
#[derive(Debug, Clone)]
pub struct Styles {
    pub icon_amount: TextStyle,
    pub dialog_label: TextStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            icon_amount: TextStyle {
                font_size: 13,
                color: 0xffffff,
            },
            dialog_label: TextStyle {
                font_size: 14,
                color: 0xfafafa,
            },
        }
    }
}
