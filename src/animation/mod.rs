//! Renderer library with compile-time known animation variants
//!
//! All renderers are stored in an enum so a task can own one without boxing.
//! Each renderer implements the [`Animation`] trait: a cooperative loop that
//! writes frames through a [`StripHandle`] until its token is cancelled.
//! New renderers are added here; the controller only resolves names through
//! [`AnimationId`].

mod breathe;
mod fade;
mod projectile;
mod rainbow;
pub mod static_paint;
mod theater_chase;
mod twinkle;

use core::fmt;

use embassy_time::Duration;

pub use breathe::BreatheAnimation;
pub use fade::{FadeAnimation, fade_sequence};
pub use projectile::ProjectileAnimation;
pub use rainbow::RainbowAnimation;
pub use theater_chase::TheaterChaseAnimation;
pub use twinkle::{TwinkleAnimation, TwinkleState, TwinkleStep};

use crate::color::Rgb;
use crate::strip::{StripDriver, StripHandle};
use crate::task::CancellationToken;

const ANIMATION_NAME_PROJECTILE: &str = "Projectile";
const ANIMATION_NAME_BREATHE: &str = "Breathe";
const ANIMATION_NAME_TWINKLE: &str = "Twinkle";
const ANIMATION_NAME_FADE: &str = "Fade";
const ANIMATION_NAME_RAINBOW: &str = "Rainbow";
const ANIMATION_NAME_THEATER_CHASE: &str = "TheaterChase";

/// Timing and shape parameters shared by all renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Delay between brightness steps of the breathe ramp
    pub breathe_step: Duration,
    /// How long each interpolated fade color is shown
    pub fade_frame: Duration,
    /// Interpolation steps between two consecutive fade colors
    pub fade_steps: u16,
    /// Delay between projectile head advances
    pub projectile_frame: Duration,
    /// Lit window width of a projectile
    pub projectile_width: usize,
    /// Delay between twinkle cycles
    pub twinkle_frame: Duration,
    /// Share of pixels lit by twinkle (0.0-1.0)
    pub twinkle_ratio: f32,
    /// Seed of the twinkle pseudo-random generator
    pub twinkle_seed: u64,
    /// Delay between theater chase phases
    pub chase_frame: Duration,
    /// Chase rounds per color
    pub chase_rounds: u8,
    /// Delay between rainbow frames
    pub rainbow_frame: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            breathe_step: Duration::from_millis(1),
            fade_frame: Duration::from_micros(1_000_000 / 15),
            fade_steps: 50,
            projectile_frame: Duration::from_millis(5),
            projectile_width: 8,
            twinkle_frame: Duration::from_millis(50),
            twinkle_ratio: 0.3,
            twinkle_seed: 14,
            chase_frame: Duration::from_millis(50),
            chase_rounds: 10,
            rainbow_frame: Duration::from_millis(20),
        }
    }
}

impl AnimationConfig {
    /// Use the same frame period for every renderer
    #[must_use]
    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.breathe_step = frame;
        self.fade_frame = frame;
        self.projectile_frame = frame;
        self.twinkle_frame = frame;
        self.chase_frame = frame;
        self.rainbow_frame = frame;
        self
    }

    #[must_use]
    pub fn with_fade_steps(mut self, steps: u16) -> Self {
        self.fade_steps = steps;
        self
    }

    #[must_use]
    pub fn with_twinkle_seed(mut self, seed: u64) -> Self {
        self.twinkle_seed = seed;
        self
    }
}

pub trait Animation {
    /// Render frames until `cancel` is observed
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken);
}

/// Renderer slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    Projectile(ProjectileAnimation),
    Breathe(BreatheAnimation),
    Twinkle(TwinkleAnimation),
    Fade(FadeAnimation),
    Rainbow(RainbowAnimation),
    TheaterChase(TheaterChaseAnimation),
}

/// Known animation names that can be requested by a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationId {
    Projectile,
    Breathe,
    Twinkle,
    Fade,
    Rainbow,
    TheaterChase,
}

impl AnimationId {
    pub const ALL: [Self; 6] = [
        Self::Projectile,
        Self::Breathe,
        Self::Twinkle,
        Self::Fade,
        Self::Rainbow,
        Self::TheaterChase,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Projectile => ANIMATION_NAME_PROJECTILE,
            Self::Breathe => ANIMATION_NAME_BREATHE,
            Self::Twinkle => ANIMATION_NAME_TWINKLE,
            Self::Fade => ANIMATION_NAME_FADE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::TheaterChase => ANIMATION_NAME_THEATER_CHASE,
        }
    }

    /// Resolve a wire name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
    }

    /// Build the renderer for this animation
    pub fn to_slot(self, colors: &[Rgb], config: &AnimationConfig) -> AnimationSlot {
        match self {
            Self::Projectile => AnimationSlot::Projectile(ProjectileAnimation::new(
                colors,
                config.projectile_width,
                config.projectile_frame,
            )),
            Self::Breathe => {
                AnimationSlot::Breathe(BreatheAnimation::new(colors, config.breathe_step))
            }
            Self::Twinkle => AnimationSlot::Twinkle(TwinkleAnimation::new(
                colors,
                config.twinkle_ratio,
                config.twinkle_seed,
                config.twinkle_frame,
            )),
            Self::Fade => AnimationSlot::Fade(FadeAnimation::new(
                colors,
                config.fade_steps,
                config.fade_frame,
            )),
            Self::Rainbow => AnimationSlot::Rainbow(RainbowAnimation::new(config.rainbow_frame)),
            Self::TheaterChase => AnimationSlot::TheaterChase(TheaterChaseAnimation::new(
                colors,
                config.chase_rounds,
                config.chase_frame,
            )),
        }
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Projectile(_) => AnimationId::Projectile,
            Self::Breathe(_) => AnimationId::Breathe,
            Self::Twinkle(_) => AnimationId::Twinkle,
            Self::Fade(_) => AnimationId::Fade,
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::TheaterChase(_) => AnimationId::TheaterChase,
        }
    }
}

impl Animation for AnimationSlot {
    fn run<D: StripDriver>(&mut self, strip: &StripHandle<D>, cancel: &CancellationToken) {
        match self {
            Self::Projectile(animation) => animation.run(strip, cancel),
            Self::Breathe(animation) => animation.run(strip, cancel),
            Self::Twinkle(animation) => animation.run(strip, cancel),
            Self::Fade(animation) => animation.run(strip, cancel),
            Self::Rainbow(animation) => animation.run(strip, cancel),
            Self::TheaterChase(animation) => animation.run(strip, cancel),
        }
    }
}
