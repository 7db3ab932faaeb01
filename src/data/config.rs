use serde::{Deserialize, Serialize};
use super::color::Rgb;

/// Tree configuration, loadable from YAML.
///
/// Every field is optional in the input:
///
/// ```yaml
/// height: 200
/// bending: 0.4
/// leaf_color: "#35586a"
/// trunk_color: { r: 0.155, g: 0.258, b: 0.311 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default)]
    pub bending: f32,
    #[serde(default = "default_leaf_color", deserialize_with = "color_input::deserialize")]
    pub leaf_color: Rgb,
    #[serde(default = "default_trunk_color", deserialize_with = "color_input::deserialize")]
    pub trunk_color: Rgb,
}

fn default_height() -> f32 {
    200.0
}

fn default_leaf_color() -> Rgb {
    Rgb::LEAF
}

fn default_trunk_color() -> Rgb {
    Rgb::TRUNK
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            bending: 0.0,
            leaf_color: Rgb::LEAF,
            trunk_color: Rgb::TRUNK,
        }
    }
}

impl TreeConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: TreeConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;

        if !config.height.is_finite() {
            return Err(format!("Height must be finite, got {}", config.height));
        }

        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("YAML write error: {}", e))
    }
}

/// Colors may be written as a hex string or as an `{r, g, b}` map
mod color_input {
    use serde::{Deserialize, Deserializer};
    use super::Rgb;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ColorInput {
        Hex(String),
        Channels(Rgb),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ColorInput::deserialize(deserializer)? {
            ColorInput::Hex(hex) => Rgb::from_hex(&hex).map_err(serde::de::Error::custom),
            ColorInput::Channels(rgb) => Ok(rgb),
        }
    }
}
