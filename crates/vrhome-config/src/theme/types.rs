//! Theme type definitions and constants.
//!
//! A [`Theme`] is the fully resolved look of the launcher. Theme files on
//! disk are [`ThemeOverrides`]: every field optional, merged onto a base
//! built-in theme.

use serde::{Deserialize, Serialize};

/// Theme used when none is configured or the configured one fails to load.
pub const DEFAULT_THEME: &str = "forest";

/// Built-in theme names.
pub const BUILT_IN_THEMES: &[&str] = &["forest", "midnight"];

/// Text rendering parameters for one class of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub text_color: String,
    /// Glyph height in meters.
    pub text_size: f32,
    /// Signed-distance threshold for the color edge.
    pub color_center: f32,
    /// Signed-distance threshold for the alpha edge.
    pub alpha_center: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text_color: "#ffffff".into(),
            text_size: 0.3,
            color_center: 0.5,
            alpha_center: 0.5,
        }
    }
}

impl TextStyle {
    pub fn new(text_color: &str, text_size: f32, center: f32) -> Self {
        Self {
            text_color: text_color.into(),
            text_size,
            color_center: center,
            alpha_center: center,
        }
    }
}

/// Background imagery for the two eyes.
///
/// Serialized as `{ left: { texture }, right: { texture } }` for a pair
/// of equirectangular images, or with `is_cube: true` and six `textures`
/// per eye for cube maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvironment", into = "RawEnvironment")]
pub enum EnvironmentDescriptor {
    Equirect {
        left: String,
        right: String,
    },
    Cube {
        left: [String; 6],
        right: [String; 6],
        /// Yaw in radians applied to both cube maps.
        initial_orientation: f32,
    },
}

impl EnvironmentDescriptor {
    pub fn is_cube(&self) -> bool {
        matches!(self, EnvironmentDescriptor::Cube { .. })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawEye {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    texture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    textures: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEnvironment {
    left: RawEye,
    right: RawEye,
    #[serde(default, alias = "isCube")]
    is_cube: bool,
    #[serde(default, alias = "initialOrientation")]
    initial_orientation: f32,
}

impl TryFrom<RawEnvironment> for EnvironmentDescriptor {
    type Error = String;

    fn try_from(raw: RawEnvironment) -> Result<Self, Self::Error> {
        if raw.is_cube {
            let faces = |eye: &str, textures: Vec<String>| -> Result<[String; 6], String> {
                let count = textures.len();
                textures
                    .try_into()
                    .map_err(|_| format!("cube map {eye} eye needs 6 textures, got {count}"))
            };
            Ok(EnvironmentDescriptor::Cube {
                left: faces("left", raw.left.textures)?,
                right: faces("right", raw.right.textures)?,
                initial_orientation: raw.initial_orientation,
            })
        } else {
            let texture = |eye: &str, texture: Option<String>| {
                texture.ok_or_else(|| format!("environment {eye} eye is missing `texture`"))
            };
            Ok(EnvironmentDescriptor::Equirect {
                left: texture("left", raw.left.texture)?,
                right: texture("right", raw.right.texture)?,
            })
        }
    }
}

impl From<EnvironmentDescriptor> for RawEnvironment {
    fn from(env: EnvironmentDescriptor) -> Self {
        match env {
            EnvironmentDescriptor::Equirect { left, right } => RawEnvironment {
                left: RawEye {
                    texture: Some(left),
                    textures: Vec::new(),
                },
                right: RawEye {
                    texture: Some(right),
                    textures: Vec::new(),
                },
                is_cube: false,
                initial_orientation: 0.0,
            },
            EnvironmentDescriptor::Cube {
                left,
                right,
                initial_orientation,
            } => RawEnvironment {
                left: RawEye {
                    texture: None,
                    textures: left.into(),
                },
                right: RawEye {
                    texture: None,
                    textures: right.into(),
                },
                is_cube: true,
                initial_orientation,
            },
        }
    }
}

/// A fully resolved theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub button_color: String,
    pub border_color: String,
    pub highlight_color: String,
    pub icon_color: String,
    pub clear_color: String,
    pub title_text: TextStyle,
    pub sample_text: TextStyle,
    pub url_text: TextStyle,
    /// Image used for sample buttons instead of generated rounded rects.
    pub button_image: Option<String>,
    /// Image used behind detail labels instead of generated rounded rects.
    pub url_image: Option<String>,
    pub environment: Option<EnvironmentDescriptor>,
}

impl Default for Theme {
    fn default() -> Self {
        super::builtin::forest()
    }
}

/// Theme override structure.
///
/// All fields are optional; only present fields override the base theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub name: Option<String>,
    /// Built-in theme to start from. Defaults to [`DEFAULT_THEME`].
    pub base: Option<String>,
    pub colors: Option<ThemeColorOverrides>,
    pub title_text: Option<TextStyleOverrides>,
    pub sample_text: Option<TextStyleOverrides>,
    pub url_text: Option<TextStyleOverrides>,
    pub button_image: Option<String>,
    pub url_image: Option<String>,
    pub environment: Option<EnvironmentDescriptor>,
}

/// Optional palette overrides in a theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColorOverrides {
    pub button: Option<String>,
    pub border: Option<String>,
    pub highlight: Option<String>,
    pub icon: Option<String>,
    pub clear: Option<String>,
}

/// Optional text style overrides in a theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyleOverrides {
    pub text_color: Option<String>,
    pub text_size: Option<f32>,
    pub color_center: Option<f32>,
    pub alpha_center: Option<f32>,
}
