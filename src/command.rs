use serde::Deserialize;

use crate::color::{Rgb, parse_hex};

/// A color as delivered on the wire
///
/// Normalized to [`Rgb`] by the scene controller; renderers never see this type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireColor {
    /// `#RRGGBB` or `RRGGBB`
    Hex(String),
    /// Pre-resolved `[r, g, b]` triple
    Rgb([u8; 3]),
}

impl WireColor {
    /// Normalize to a strip color. `None` for malformed hex strings.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Hex(value) => parse_hex(value),
            Self::Rgb([r, g, b]) => Some(Rgb::new(*r, *g, *b)),
        }
    }
}

impl From<Rgb> for WireColor {
    fn from(color: Rgb) -> Self {
        Self::Rgb([color.r, color.g, color.b])
    }
}

impl From<&str> for WireColor {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_string())
    }
}

/// Request to show a scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneCommand {
    /// Scene identity; a repeat of the last accepted id is ignored
    pub id: String,
    pub animated: bool,
    /// Renderer name, required when `animated` is set
    pub animation: Option<String>,
    pub colors: Vec<WireColor>,
    pub default_brightness: u8,
}

impl SceneCommand {
    /// Static scene painting `colors` across the strip
    pub fn painted(id: impl Into<String>, colors: impl IntoIterator<Item = impl Into<WireColor>>) -> Self {
        Self {
            id: id.into(),
            animated: false,
            animation: None,
            colors: colors.into_iter().map(Into::into).collect(),
            default_brightness: u8::MAX,
        }
    }

    /// Animated scene running `animation` over `colors`
    pub fn animated(
        id: impl Into<String>,
        animation: impl Into<String>,
        colors: impl IntoIterator<Item = impl Into<WireColor>>,
    ) -> Self {
        Self {
            animated: true,
            animation: Some(animation.into()),
            ..Self::painted(id, colors)
        }
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.default_brightness = brightness;
        self
    }
}

/// Administrative short-circuits that bypass scene transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    /// Stop any animation and turn every pixel off
    Off,
    /// Change the driver brightness without touching the running scene
    UpdateBrightness(u8),
}

/// One decoded element of the message stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scene(SceneCommand),
    Admin(AdminCommand),
}

impl From<SceneCommand> for Command {
    fn from(command: SceneCommand) -> Self {
        Self::Scene(command)
    }
}

impl From<AdminCommand> for Command {
    fn from(command: AdminCommand) -> Self {
        Self::Admin(command)
    }
}
