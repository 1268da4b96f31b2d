use std::{fmt, fs, path::Path};

pub const ID: &str = "io.github.OverlayNotifications";

/// Timeout used by temporary and warning notifications when the caller passes none.
pub const DEFAULT_TIMEOUT_MS: u32 = 3000;

/// An sRGB colour as stored in the config file (`[r, g, b]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn gray(v: u8) -> Self {
        Self(v, v, v)
    }
}

/// Logical-pixel metrics used by the geometry helper and the stacking engine.
///
/// Every value is DPI-scaled by the host before use.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical gap between stacked notifications.
    pub padding: i32,
    /// Distance of the stack from the top and the leading edge of the canvas.
    pub top_left_margin: i32,
    pub text_pad_x: i32,
    pub text_pad_y: i32,
    /// Side length of the close button.
    pub close_size: i32,
    /// Gap between the end of the text and the close button, padding included.
    pub close_left_margin: i32,
    /// Height of the progress bar row.
    pub progress_height: i32,
    /// Smallest shrink limit accepted from callers; lower values reset to 1.0.
    pub min_shrink_limit: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 6,
            top_left_margin: 8,
            text_pad_x: 12,
            text_pad_y: 8,
            close_size: 16,
            close_left_margin: 16,
            progress_height: 5,
            min_shrink_limit: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: Rgb,
    pub text: Rgb,
    /// Background of warning notifications.
    pub highlight: Rgb,
    pub highlight_text: Rgb,
    pub progress: Rgb,
    pub close_hover: Rgb,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: Rgb(0xff, 0xff, 0xe1),
            text: Rgb::gray(0x00),
            highlight: Rgb(0xff, 0xee, 0x70),
            highlight_text: Rgb(0x8d, 0x0c, 0x25),
            progress: Rgb(0x80, 0x80, 0x80),
            close_hover: Rgb(0xe8, 0x11, 0x23),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NotificationsConfig {
    /// Time in milliseconds before a temporary notification is removed.
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u32,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: default_timeout_ms(),
            layout: LayoutConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

// Default value helpers for serde
const fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

impl NotificationsConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config file, returning defaults if it does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(e.to_string())),
        }
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Errors raised while reading or writing the config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading the file
    Io(String),
    /// The file is not valid config JSON
    Parse(String),
    /// The config could not be serialized
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = NotificationsConfig::default();

        assert_eq!(config.default_timeout_ms, 3000);
        assert_eq!(config.layout.padding, 6);
        assert_eq!(config.layout.top_left_margin, 8);
        assert_eq!(config.layout.text_pad_x, 12);
        assert_eq!(config.layout.text_pad_y, 8);
        assert_eq!(config.layout.close_size, 16);
        assert_eq!(config.layout.close_left_margin, 16);
        assert_eq!(config.layout.progress_height, 5);
        assert_eq!(config.layout.min_shrink_limit, 0.2);
    }

    #[test]
    fn test_config_serialization() {
        let config = NotificationsConfig::default();
        let json = config.to_json_string().unwrap();

        assert!(json.contains("default_timeout_ms"));
        assert!(json.contains("top_left_margin"));
        assert!(json.contains("progress_height"));
        assert!(json.contains("highlight_text"));
    }

    #[test]
    fn test_config_deserialization_with_defaults() {
        // Older files may only carry the timeout
        let partial = r#"{ "default_timeout_ms": 5000 }"#;

        let config = NotificationsConfig::from_json_str(partial).unwrap();

        assert_eq!(config.default_timeout_ms, 5000);
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_config_deserialization_partial_layout() {
        let json = r#"{
            "layout": { "padding": 10, "progress_height": 7 },
            "theme": { "progress": [1, 2, 3] }
        }"#;

        let config = NotificationsConfig::from_json_str(json).unwrap();

        assert_eq!(config.default_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.layout.padding, 10);
        assert_eq!(config.layout.progress_height, 7);
        assert_eq!(config.layout.close_size, 16);
        assert_eq!(config.theme.progress, Rgb(1, 2, 3));
        assert_eq!(config.theme.text, ThemeConfig::default().text);
    }

    #[test]
    fn test_config_invalid_json() {
        let err = NotificationsConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("overlay-notifications-does-not-exist.json");
        let config = NotificationsConfig::load_from_path(&path).unwrap();
        assert_eq!(config, NotificationsConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "overlay-notifications-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "default_timeout_ms": 1234 }"#).unwrap();

        let config = NotificationsConfig::load_from_path(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.default_timeout_ms, 1234);
    }

    #[test]
    fn test_default_helpers() {
        assert_eq!(default_timeout_ms(), 3000);
        assert_eq!(Rgb::gray(0xdd), Rgb(0xdd, 0xdd, 0xdd));
    }
}
