//! Touch event types and handler storage
//!
//! The host framework dispatches its native touch lifecycle into these
//! types: each event carries the screen-space `page_x`/`page_y` of the
//! touch. Handlers are stored per event type and invoked by the host's
//! event router (or directly through the widget's `handle_touch_*`
//! methods).
//!
//! # Example
//!
//! ```
//! use swipekit_widgets::events::{event_types, TouchContext, TouchHandlers};
//!
//! let mut handlers = TouchHandlers::new();
//! handlers.on_touch_start(|ctx| {
//!     println!("touch down at {}", ctx.page_x);
//! });
//! handlers.dispatch(&TouchContext::new(event_types::TOUCH_START).with_page_pos(42.0, 0.0));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

/// Event type discriminant, matching the host dispatch table.
pub type EventType = u32;

/// Touch lifecycle event types.
pub mod event_types {
    use super::EventType;

    /// Finger down - begins a gesture
    pub const TOUCH_START: EventType = 1;
    /// Finger moved while down
    pub const TOUCH_MOVE: EventType = 2;
    /// Finger lifted - ends the gesture
    pub const TOUCH_END: EventType = 3;
    /// Gesture taken over by the system (navigation gesture, scroll conflict)
    pub const TOUCH_CANCEL: EventType = 4;
}

/// Callback for handling touch events.
pub type TouchCallback = Arc<dyn Fn(&TouchContext) + Send + Sync>;

/// Payload passed to touch handlers.
#[derive(Clone, Debug)]
pub struct TouchContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// Touch X in screen coordinates (monotonic across a gesture)
    pub page_x: f32,
    /// Touch Y in screen coordinates (unused by horizontal swiping)
    pub page_y: f32,
}

impl TouchContext {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            page_x: 0.0,
            page_y: 0.0,
        }
    }

    /// Set the touch position
    pub fn with_page_pos(mut self, x: f32, y: f32) -> Self {
        self.page_x = x;
        self.page_y = y;
        self
    }
}

/// Storage for touch handlers, keyed by event type.
#[derive(Default, Clone)]
pub struct TouchHandlers {
    handlers: HashMap<EventType, Vec<TouchCallback>>,
}

impl TouchHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any handlers registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check if a handler is registered for a specific event type
    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&TouchContext) + Send + Sync + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Arc::new(handler));
    }

    /// Get handlers for an event type
    pub fn get(&self, event_type: EventType) -> Option<&[TouchCallback]> {
        self.handlers.get(&event_type).map(|v| v.as_slice())
    }

    /// Dispatch an event to all registered handlers for its type
    pub fn dispatch(&self, ctx: &TouchContext) {
        if let Some(handlers) = self.handlers.get(&ctx.event_type) {
            for handler in handlers {
                handler(ctx);
            }
        }
    }

    /// Merge another set of handlers into this one
    pub fn merge(&mut self, other: TouchHandlers) {
        for (event_type, handlers) in other.handlers {
            self.handlers
                .entry(event_type)
                .or_default()
                .extend(handlers);
        }
    }

    // =========================================================================
    // Convenience registration methods
    // =========================================================================

    /// Register a touch-start handler
    pub fn on_touch_start<F>(&mut self, handler: F)
    where
        F: Fn(&TouchContext) + Send + Sync + 'static,
    {
        self.on(event_types::TOUCH_START, handler);
    }

    /// Register a touch-move handler
    pub fn on_touch_move<F>(&mut self, handler: F)
    where
        F: Fn(&TouchContext) + Send + Sync + 'static,
    {
        self.on(event_types::TOUCH_MOVE, handler);
    }

    /// Register a touch-end handler
    pub fn on_touch_end<F>(&mut self, handler: F)
    where
        F: Fn(&TouchContext) + Send + Sync + 'static,
    {
        self.on(event_types::TOUCH_END, handler);
    }

    /// Register a touch-cancel handler
    pub fn on_touch_cancel<F>(&mut self, handler: F)
    where
        F: Fn(&TouchContext) + Send + Sync + 'static,
    {
        self.on(event_types::TOUCH_CANCEL, handler);
    }
}
