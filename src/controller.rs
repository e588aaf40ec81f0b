//! Scene controller
//!
//! Single owner of [`SceneState`]. Every command goes through
//! [`SceneController::handle`], which decides whether the running animation
//! is kept, replaced or stopped. A running task is always cancelled and
//! joined before anything else writes to the strip.

use log::{debug, error, info, warn};

use crate::animation::{AnimationConfig, AnimationId, static_paint};
use crate::color::Rgb;
use crate::command::{AdminCommand, Command, SceneCommand};
use crate::error::{AnimationFault, SceneError, StripError};
use crate::strip::{StripDriver, StripHandle};
use crate::task::AnimationTask;

/// Configuration for the scene controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneControllerConfig {
    /// Brightness applied right after strip bring-up
    pub initial_brightness: u8,
    /// Renderer timings
    pub animation: AnimationConfig,
    /// Stack size of animation workers; platform default when `None`
    pub worker_stack_size: Option<usize>,
}

impl Default for SceneControllerConfig {
    fn default() -> Self {
        Self {
            initial_brightness: u8::MAX,
            animation: AnimationConfig::default(),
            worker_stack_size: None,
        }
    }
}

/// What a handled command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneOutcome {
    /// An animation task was started
    Started(AnimationId),
    /// A static scene was painted
    Painted,
    /// The scene id matched the last accepted scene
    Duplicate,
    /// The strip was wiped dark
    TurnedOff,
    /// Driver brightness was updated in place
    BrightnessChanged(u8),
}

/// Controller-owned scene state
#[derive(Debug, Default)]
pub struct SceneState {
    last_command_id: Option<String>,
    last_was_animated: bool,
    active_task: Option<AnimationTask>,
    brightness: u8,
}

impl SceneState {
    pub fn last_command_id(&self) -> Option<&str> {
        self.last_command_id.as_deref()
    }

    pub const fn last_was_animated(&self) -> bool {
        self.last_was_animated
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Animation of the running task, if any
    pub fn active_animation(&self) -> Option<AnimationId> {
        self.active_task.as_ref().map(AnimationTask::animation)
    }

    pub const fn has_active_task(&self) -> bool {
        self.active_task.is_some()
    }
}

/// A scene command that passed validation
struct ScenePlan {
    colors: Vec<Rgb>,
    animation: Option<AnimationId>,
}

impl ScenePlan {
    fn from_command(scene: &SceneCommand) -> Result<Self, SceneError> {
        if scene.colors.is_empty() {
            return Err(SceneError::invalid(format!("scene `{}` has no colors", scene.id)));
        }
        let colors = scene
            .colors
            .iter()
            .map(|color| {
                color
                    .to_rgb()
                    .ok_or_else(|| SceneError::invalid(format!("unreadable color {color:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let animation = match (scene.animated, scene.animation.as_deref()) {
            (true, Some(name)) => Some(
                AnimationId::parse_from_str(name)
                    .ok_or_else(|| SceneError::UnknownAnimation(name.to_string()))?,
            ),
            (true, None) => {
                return Err(SceneError::invalid(format!(
                    "animated scene `{}` names no animation",
                    scene.id
                )));
            }
            (false, Some(name)) => {
                debug!("scene `{}` is static, ignoring animation `{name}`", scene.id);
                None
            }
            (false, None) => None,
        };

        Ok(Self { colors, animation })
    }
}

/// Scene controller - decides start/stop/ignore for each incoming command
pub struct SceneController<D: StripDriver> {
    strip: StripHandle<D>,
    state: SceneState,
    config: SceneControllerConfig,
}

impl<D: StripDriver> SceneController<D> {
    /// Bring up the strip and create a controller around it
    ///
    /// Fails if the driver cannot be initialized; there is nothing to
    /// control without a strip.
    pub fn new(mut driver: D, config: SceneControllerConfig) -> Result<Self, StripError> {
        driver.init()?;
        driver.set_brightness(config.initial_brightness);
        info!(
            "strip ready: {} pixels, brightness {}",
            driver.num_pixels(),
            config.initial_brightness
        );

        Ok(Self {
            strip: StripHandle::new(driver),
            state: SceneState {
                brightness: config.initial_brightness,
                ..SceneState::default()
            },
            config,
        })
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn strip(&self) -> &StripHandle<D> {
        &self.strip
    }

    pub fn config(&self) -> &SceneControllerConfig {
        &self.config
    }

    /// Process one command, logging and dropping rejected ones
    pub fn handle(&mut self, command: Command) {
        match self.apply(command) {
            Ok(outcome) => debug!("command handled: {outcome:?}"),
            Err(err) => warn!("dropping command: {err}"),
        }
    }

    /// Process one command
    ///
    /// A command rejected by validation changes nothing: the previous scene
    /// keeps running. If the worker for an accepted animation cannot be
    /// started, the previous scene is already stopped; the strip is then
    /// left without a scene and the last id is forgotten so any scene,
    /// including the previous one, is accepted again.
    pub fn apply(&mut self, command: Command) -> Result<SceneOutcome, SceneError> {
        self.reap_finished();

        match command {
            Command::Admin(AdminCommand::Off) => Ok(self.turn_off()),
            Command::Admin(AdminCommand::UpdateBrightness(brightness)) => {
                Ok(self.update_brightness(brightness))
            }
            Command::Scene(scene) => self.apply_scene(scene),
        }
    }

    /// Join a task whose renderer returned on its own
    ///
    /// Returns the fault if the renderer panicked.
    pub fn reap_finished(&mut self) -> Option<AnimationFault> {
        if !self
            .state
            .active_task
            .as_ref()
            .is_some_and(AnimationTask::is_finished)
        {
            return None;
        }
        let task = self.state.active_task.take()?;
        let fault = task.join();
        report(fault.as_ref());
        fault
    }

    /// Stop the running animation, optionally wiping the strip
    pub fn shutdown(mut self, clear: bool) {
        self.stop_active_task();
        if clear {
            self.strip.wipe();
            info!("strip cleared on shutdown");
        }
    }

    fn turn_off(&mut self) -> SceneOutcome {
        self.stop_active_task();
        self.strip.wipe();
        info!("lights off");
        SceneOutcome::TurnedOff
    }

    fn update_brightness(&mut self, brightness: u8) -> SceneOutcome {
        self.strip.with(|driver| {
            driver.set_brightness(brightness);
            driver.show();
        });
        self.state.brightness = brightness;
        info!("brightness set to {brightness}");
        SceneOutcome::BrightnessChanged(brightness)
    }

    fn apply_scene(&mut self, scene: SceneCommand) -> Result<SceneOutcome, SceneError> {
        if self.state.last_command_id.as_deref() == Some(scene.id.as_str()) {
            debug!("scene `{}` is already applied", scene.id);
            return Ok(SceneOutcome::Duplicate);
        }

        let plan = ScenePlan::from_command(&scene)?;

        self.stop_active_task();

        let brightness = scene.default_brightness;
        self.strip.with(|driver| driver.set_brightness(brightness));
        self.state.brightness = brightness;

        let outcome = match plan.animation {
            Some(animation) => {
                let slot = animation.to_slot(&plan.colors, &self.config.animation);
                let task = match AnimationTask::spawn_with_stack(
                    animation,
                    slot,
                    self.strip.clone(),
                    self.config.worker_stack_size,
                ) {
                    Ok(task) => task,
                    Err(err) => {
                        self.state.last_command_id = None;
                        self.state.last_was_animated = false;
                        return Err(err.into());
                    }
                };
                self.state.active_task = Some(task);
                SceneOutcome::Started(animation)
            }
            None => {
                self.strip
                    .with(|driver| static_paint::paint(driver, &plan.colors));
                SceneOutcome::Painted
            }
        };

        info!(
            "scene `{}` applied: {:?}, {} colors, brightness {brightness}",
            scene.id,
            outcome,
            plan.colors.len()
        );
        self.state.last_command_id = Some(scene.id);
        self.state.last_was_animated = plan.animation.is_some();

        Ok(outcome)
    }

    fn stop_active_task(&mut self) {
        if let Some(task) = self.state.active_task.take() {
            let animation = task.animation();
            report(task.stop().as_ref());
            debug!("{animation} stopped");
        }
    }
}

impl<D: StripDriver> Drop for SceneController<D> {
    fn drop(&mut self) {
        self.stop_active_task();
    }
}

fn report(fault: Option<&AnimationFault>) {
    if let Some(fault) = fault {
        error!("{fault}");
    }
}
