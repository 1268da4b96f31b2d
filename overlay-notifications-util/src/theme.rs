use overlay_notifications_config::{Rgb, ThemeConfig};

/// RGBA color (values 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

/// Colors used to paint notifications
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub progress: Color,
    pub close_hover: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            background: config.background.into(),
            text: config.text.into(),
            highlight: config.highlight.into(),
            highlight_text: config.highlight_text.into(),
            progress: config.progress.into(),
            close_hover: config.close_hover.into(),
        }
    }

    /// Background and text color for a notification
    pub fn colors(&self, highlight: bool) -> (Color, Color) {
        if highlight {
            (self.highlight, self.highlight_text)
        } else {
            (self.background, self.text)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
