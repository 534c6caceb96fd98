//! Animated offset value
//!
//! A mutable handle around a [`Spring`] with a target-based API:
//! `animate_to` starts (or redirects) a spring animation, the host's frame
//! driver calls `tick` until it reports settled. The widget owns the handle
//! exclusively; render code samples it through a shared reference.
//!
//! # Example
//!
//! ```
//! use swipekit_animation::{AnimatedOffset, SpringConfig};
//!
//! let mut offset = AnimatedOffset::new(0.0, SpringConfig::page_turn());
//! offset.animate_to(-320.0);
//! while offset.tick(1.0 / 60.0) {}
//! assert_eq!(offset.get(), -320.0);
//! ```

use std::sync::{Arc, Mutex};

use crate::spring::{Spring, SpringConfig};

/// Callback invoked once when an animation reaches its target.
pub type CompletionFn = Box<dyn FnOnce() + Send>;

/// Shared animated offset, clonable across rebuilds of the owning widget.
pub type SharedAnimatedOffset = Arc<Mutex<AnimatedOffset>>;

/// A spring-animated scalar offset.
///
/// The model value (`target`) updates synchronously; the visual value
/// (`get`) approaches it as the host ticks frames. Retargeting mid-flight
/// supersedes the previous animation, dropping its pending completion, and
/// inherits the current velocity.
pub struct AnimatedOffset {
    spring: Spring,
    animating: bool,
    completion: Option<CompletionFn>,
}

impl AnimatedOffset {
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(config, initial),
            animating: false,
            completion: None,
        }
    }

    /// Current interpolated value.
    pub fn get(&self) -> f32 {
        self.spring.value()
    }

    /// The value the offset is headed toward (equals `get()` at rest).
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Animate toward `target` with spring interpolation.
    pub fn animate_to(&mut self, target: f32) {
        self.retarget(target, None);
    }

    /// Animate toward `target`, invoking `completion` once settled.
    pub fn animate_to_then(&mut self, target: f32, completion: CompletionFn) {
        self.retarget(target, Some(completion));
    }

    fn retarget(&mut self, target: f32, completion: Option<CompletionFn>) {
        tracing::trace!(
            from = self.spring.value(),
            to = target,
            "offset animation retargeted"
        );
        self.spring.set_target(target);
        self.animating = true;
        self.completion = completion;
    }

    /// Swap the spring parameters, preserving position, target, and
    /// animation progress.
    pub fn set_spring_config(&mut self, config: SpringConfig) {
        let mut spring = Spring::new(config, self.spring.value());
        spring.set_target(self.spring.target());
        self.spring = spring;
    }

    /// Jump to `value` with no animation, cancelling any in-flight spring.
    pub fn set_immediate(&mut self, value: f32) {
        self.spring.reset_to(value);
        self.animating = false;
        self.completion = None;
    }

    /// Whether a spring animation is still in flight.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Returns `true` while still animating. On settle the value snaps
    /// exactly onto the target and the completion callback, if any, fires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.animating {
            return false;
        }

        self.spring.step(dt);

        if self.spring.is_settled() {
            self.spring.reset_to(self.spring.target());
            self.animating = false;
            tracing::trace!(value = self.spring.value(), "offset animation settled");
            if let Some(completion) = self.completion.take() {
                completion();
            }
            return false;
        }

        true
    }
}
