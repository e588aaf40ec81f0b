//! Error types shared across the scene pipeline.

use thiserror::Error;

use crate::animation::AnimationId;

/// Reasons a scene command is rejected by the controller.
///
/// Both variants are recoverable: the command is dropped and the
/// previous scene keeps running.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Malformed or empty command fields
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The requested animation is not registered
    #[error("unknown animation `{0}`")]
    UnknownAnimation(String),

    /// The worker thread for an animation could not be started
    #[error("failed to start animation worker: {0}")]
    Spawn(#[from] std::io::Error),
}

impl SceneError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCommand(reason.into())
    }
}

/// Hardware bring-up errors. Fatal at startup.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("strip initialization failed: {0}")]
    Init(String),
}

/// A renderer loop terminated abnormally.
///
/// Reported for observability only, never re-raised into the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("animation `{animation}` faulted: {message}")]
pub struct AnimationFault {
    pub animation: AnimationId,
    pub message: String,
}

impl AnimationFault {
    /// Build a fault from a worker thread panic payload
    pub(crate) fn from_panic(animation: AnimationId, payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "renderer panicked".to_string()
        };
        Self { animation, message }
    }
}

/// Errors raised while decoding wire messages into commands.
#[derive(Debug, Error)]
pub enum IngressError {
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),

    #[error("brightness out of range: {0}")]
    BadBrightness(String),
}
