//! Message ingress
//!
//! Decodes wire messages (JSON objects, one per line) into [`Command`]s.
//! The scene/admin decision is made here, once; the controller only ever
//! sees the typed command.
//!
//! ```json
//! {"id": "sunset", "animated": true, "animation": "Fade", "colors": ["#ff5500", [0, 0, 64]], "defaultBrightness": 180}
//! {"functionCall": "update_brightness", "value": "96"}
//! {"functionCall": "off"}
//! ```

use serde::Deserialize;

use crate::command::{AdminCommand, Command, SceneCommand, WireColor};
use crate::error::IngressError;

const FUNCTION_OFF: &str = "off";
const FUNCTION_UPDATE_BRIGHTNESS: &str = "update_brightness";

/// Brightness used when a scene message carries none
pub const DEFAULT_SCENE_BRIGHTNESS: u8 = u8::MAX;

/// Numeric field that transports may send as a number or a string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Number(u64),
    Text(String),
}

impl WireNumber {
    fn to_u8(&self) -> Result<u8, IngressError> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text
                .trim()
                .parse::<u64>()
                .map_err(|_| IngressError::BadBrightness(text.clone()))?,
        };
        u8::try_from(value).map_err(|_| IngressError::BadBrightness(value.to_string()))
    }
}

/// Raw message as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMessage {
    #[serde(alias = "Id")]
    id: Option<String>,
    #[serde(default)]
    animated: bool,
    animation: Option<String>,
    #[serde(default)]
    colors: Vec<WireColor>,
    default_brightness: Option<WireNumber>,
    function_call: Option<String>,
    value: Option<WireNumber>,
}

impl WireMessage {
    fn into_command(self) -> Result<Command, IngressError> {
        if let Some(function) = self.function_call.as_deref() {
            let admin = match function.trim().to_ascii_lowercase().as_str() {
                FUNCTION_OFF => AdminCommand::Off,
                FUNCTION_UPDATE_BRIGHTNESS => {
                    let value = self.value.as_ref().ok_or_else(|| {
                        IngressError::Message("update_brightness without a value".to_string())
                    })?;
                    AdminCommand::UpdateBrightness(value.to_u8()?)
                }
                other => {
                    return Err(IngressError::Message(format!(
                        "unknown functionCall `{other}`"
                    )));
                }
            };
            return Ok(Command::Admin(admin));
        }

        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| IngressError::Message("message has neither id nor functionCall".to_string()))?;
        let default_brightness = match &self.default_brightness {
            Some(value) => value.to_u8()?,
            None => DEFAULT_SCENE_BRIGHTNESS,
        };

        Ok(Command::Scene(SceneCommand {
            id,
            animated: self.animated,
            animation: self.animation.filter(|name| !name.is_empty()),
            colors: self.colors,
            default_brightness,
        }))
    }
}

/// Decode one wire message
pub fn decode(line: &str) -> Result<Command, IngressError> {
    let message: WireMessage = serde_json::from_str(line)?;
    message.into_command()
}
