//! Swipekit Widgets
//!
//! A horizontally swipeable paged container for touch-driven UIs.
//!
//! The [`Swiper`](swiper::Swiper) renders its children side-by-side and
//! shifts them with the finger; releasing past the flip threshold proposes
//! the neighboring page index to the caller. The host framework supplies
//! rendering, layout of the produced slots, the animation frame driver, and
//! touch-event dispatch.
//!
//! # Example
//!
//! ```rust
//! use swipekit_widgets::prelude::*;
//!
//! let pager = swiper(0, SwipeConfig::new(320.0))
//!     .unwrap()
//!     .pages(["home", "feed", "profile"])
//!     .on_idx_change(|new_idx| {
//!         // adopt new_idx as the idx prop on the next build
//!         let _ = new_idx;
//!     });
//!
//! // The host routes its native touch lifecycle into the widget and
//! // calls tick(dt) each frame while animations run.
//! pager.handle_touch_start(300.0);
//! pager.handle_touch_move(80.0);
//! pager.handle_touch_end(80.0);
//! while pager.tick(1.0 / 60.0) {}
//! ```

pub mod config;
pub mod events;
pub mod gesture;
pub mod swiper;

// Configuration
pub use config::{SwipeConfig, SwipeError, DEFAULT_FLIP_SENSITIVITY};

// Touch events
pub use events::{event_types, EventType, TouchCallback, TouchContext, TouchHandlers};

// Gesture state machine
pub use gesture::{clamp_index, resolve_target_index, GesturePhase, SwipeCommit, SwipeGesture};

// Widget
pub use swiper::{
    swiper, IdxChangeCallback, PageSlot, SharedSwipeGesture, Swiper, SwiperLayout,
    SwiperRenderInfo,
};

// Animation re-exports for spring tuning
pub use swipekit_animation::{AnimatedOffset, SharedAnimatedOffset, SpringConfig};

pub mod prelude {
    pub use crate::config::{SwipeConfig, SwipeError};
    // Touch event plumbing
    pub use crate::events::{event_types, TouchContext, TouchHandlers};
    // Gesture resolution
    pub use crate::gesture::{GesturePhase, SwipeCommit, SwipeGesture};
    // The widget
    pub use crate::swiper::{
        swiper, PageSlot, Swiper, SwiperLayout, SwiperRenderInfo,
    };
    // Spring tuning
    pub use swipekit_animation::SpringConfig;
}
