use crate::canvas::model::{Rgba, StrokeStyle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the evaluation service; requests go to
    /// `<endpoint>/calculate`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Brush width in pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
    /// Current stroke color as RGBA bytes.
    #[serde(default = "default_stroke_color")]
    pub stroke_color: [u8; 4],
    /// Drawing-ready surface background as RGBA bytes.
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    /// On-page offset of the surface, used to normalize touch input.
    #[serde(default)]
    pub surface_offset: (i32, i32),
    /// Optional cap on undo snapshots. `None` keeps the stack unbounded.
    #[serde(default)]
    pub history_limit: Option<usize>,
    /// When enabled the logger is initialised at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8900".to_string()
}

fn default_stroke_width() -> u32 {
    3
}

fn default_stroke_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_background() -> [u8; 4] {
    [0, 0, 0, 255]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            stroke_width: default_stroke_width(),
            stroke_color: default_stroke_color(),
            background: default_background(),
            surface_offset: (0, 0),
            history_limit: None,
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn calculate_url(&self) -> String {
        format!("{}/calculate", self.endpoint.trim_end_matches('/'))
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        let [r, g, b, a] = self.stroke_color;
        StrokeStyle {
            width: self.stroke_width,
            color: Rgba::rgba(r, g, b, a),
        }
    }

    pub fn background_color(&self) -> Rgba {
        let [r, g, b, a] = self.background;
        Rgba::rgba(r, g, b, a)
    }
}
