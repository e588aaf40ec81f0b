//! Scene controller for addressable LED strips.
//!
//! Commands arrive in order from a transport, are decoded once by
//! [`ingress`], and are handled by a [`SceneController`] that owns the
//! single running [`AnimationTask`]. Renderers live in [`animation`] and
//! write through a [`StripDriver`].

pub mod animation;
pub mod channel;
pub mod color;
pub mod command;
pub mod controller;
pub mod error;
pub mod frame_scheduler;
pub mod ingress;
pub mod math8;
pub mod runner;
pub mod strip;
pub mod task;

pub use animation::{Animation, AnimationConfig, AnimationId, AnimationSlot};
pub use channel::CommandQueue;
pub use command::{AdminCommand, Command, SceneCommand, WireColor};
pub use controller::{SceneController, SceneControllerConfig, SceneOutcome, SceneState};
pub use error::{AnimationFault, IngressError, SceneError, StripError};
pub use frame_scheduler::FramePacer;
pub use runner::SceneRunner;
pub use strip::{MemoryStrip, StripDriver, StripHandle};
pub use task::{AnimationTask, CancellationToken};

pub use color::Rgb;
pub use embassy_time::Duration;
