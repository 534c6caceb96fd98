//! Swipeable paged container widget
//!
//! Renders its children side-by-side in a horizontal strip and shifts the
//! strip in response to touch. The current page index is a controlled prop:
//! the widget never mutates it, it proposes changes through the
//! `on_idx_change` callback and the caller feeds the value back on the next
//! build. Internal gesture and animation state live behind shared handles so
//! they survive rebuilds.
//!
//! # Example
//!
//! ```
//! use swipekit_widgets::prelude::*;
//!
//! let pager = swiper(0, SwipeConfig::new(320.0))
//!     .unwrap()
//!     .page("home")
//!     .page("feed")
//!     .page("profile")
//!     .on_idx_change(|new_idx| {
//!         // caller adopts new_idx as the idx prop for the next build
//!         let _ = new_idx;
//!     });
//!
//! // Host dispatch: finger down at x=300, drag left, lift
//! pager.handle_touch_start(300.0);
//! pager.handle_touch_move(100.0);
//! pager.handle_touch_end(100.0);
//!
//! // Host frame driver settles the strip
//! while pager.tick(1.0 / 60.0) {}
//! assert_eq!(pager.offset(), -320.0);
//! ```

use std::sync::{Arc, Mutex};

use swipekit_animation::{AnimatedOffset, SharedAnimatedOffset, SpringConfig};

use crate::config::{SwipeConfig, SwipeError};
use crate::events::{event_types, TouchHandlers};
use crate::gesture::SwipeGesture;

/// Callback receiving the proposed page index after a completed gesture.
pub type IdxChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Shared gesture state, clonable for persistence across rebuilds.
pub type SharedSwipeGesture = Arc<Mutex<SwipeGesture>>;

/// Placement of one page inside the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlot {
    /// Index of the page this slot renders
    pub index: usize,
    /// Horizontal position relative to the viewport's left edge
    pub x: f32,
}

/// Strip placement for the host renderer: clip to `viewport_width`, draw
/// each page at its slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SwiperLayout {
    pub viewport_width: f32,
    pub slots: Vec<PageSlot>,
}

/// Snapshot of swiper state for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwiperRenderInfo {
    /// Current interpolated strip offset
    pub offset_x: f32,
    /// Committed (model) strip offset the animation is tracking
    pub committed_offset: f32,
    /// Width of one page / the viewport
    pub page_width: f32,
    pub page_count: usize,
    /// Whether the offset spring is still in flight
    pub is_animating: bool,
    /// Whether a finger is currently down
    pub is_dragging: bool,
}

/// A horizontally swipeable paged container.
///
/// Generic over the host framework's view type `V`; pages are opaque to the
/// widget, which only reads their count and hands back per-page placements.
pub struct Swiper<V> {
    pages: Vec<V>,
    idx: usize,
    gesture: SharedSwipeGesture,
    animated: SharedAnimatedOffset,
    on_idx_change: Option<IdxChangeCallback>,
}

impl<V> Swiper<V> {
    /// Create a swiper showing page `idx` with a validated configuration.
    ///
    /// `idx` is trusted (controlled-component contract); an out-of-range
    /// value produces an undefined visual offset and is logged when a
    /// gesture begins.
    pub fn new(idx: usize, config: SwipeConfig) -> Result<Self, SwipeError> {
        let mut gesture = SwipeGesture::new(config)?;
        gesture.snap_to_index(idx);
        let rest = gesture.offset();

        Ok(Self {
            pages: Vec::new(),
            idx,
            gesture: Arc::new(Mutex::new(gesture)),
            animated: Arc::new(Mutex::new(AnimatedOffset::new(rest, SpringConfig::default()))),
            on_idx_change: None,
        })
    }

    /// Create a swiper over existing shared state (persistence across
    /// rebuilds). The configuration was validated when the state was first
    /// created; the committed offset is left untouched.
    pub fn with_state(
        idx: usize,
        gesture: SharedSwipeGesture,
        animated: SharedAnimatedOffset,
    ) -> Self {
        Self {
            pages: Vec::new(),
            idx,
            gesture,
            animated,
            on_idx_change: None,
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Append a page to the strip.
    pub fn page(mut self, view: V) -> Self {
        self.pages.push(view);
        self.gesture.lock().unwrap().set_page_count(self.pages.len());
        self
    }

    /// Append several pages at once.
    pub fn pages(mut self, views: impl IntoIterator<Item = V>) -> Self {
        self.pages.extend(views);
        self.gesture.lock().unwrap().set_page_count(self.pages.len());
        self
    }

    /// Set the spring used for tracking and settling.
    pub fn spring(self, config: SpringConfig) -> Self {
        self.animated.lock().unwrap().set_spring_config(config);
        self
    }

    /// Register the index-change callback.
    ///
    /// Invoked exactly once per completed gesture with the resolved index,
    /// including when it equals the current one. The caller MUST feed the
    /// value back as the `idx` prop; otherwise the strip settles on a page
    /// the caller never adopted and stays visually desynced until the next
    /// gesture.
    pub fn on_idx_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_idx_change = Some(Arc::new(callback));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current page index prop.
    pub fn idx(&self) -> usize {
        self.idx
    }

    /// The pages in strip order.
    pub fn page_views(&self) -> &[V] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Shared gesture state handle (pass to [`Swiper::with_state`]).
    pub fn state(&self) -> SharedSwipeGesture {
        Arc::clone(&self.gesture)
    }

    /// Shared animated offset handle (pass to [`Swiper::with_state`]).
    pub fn animated_offset(&self) -> SharedAnimatedOffset {
        Arc::clone(&self.animated)
    }

    /// Current interpolated strip offset.
    pub fn offset(&self) -> f32 {
        self.animated.lock().unwrap().get()
    }

    /// Whether the settle/tracking animation is still in flight.
    pub fn is_animating(&self) -> bool {
        self.animated.lock().unwrap().is_animating()
    }

    // =========================================================================
    // Touch entry points (host event dispatch)
    // =========================================================================

    /// Finger down at screen position `x`.
    pub fn handle_touch_start(&self, x: f32) {
        process_touch_start(&self.gesture, self.idx, x);
    }

    /// Finger moved to screen position `x`.
    pub fn handle_touch_move(&self, x: f32) {
        process_touch_move(&self.gesture, &self.animated, self.idx, x);
    }

    /// Finger lifted at screen position `x`. Commits the flip decision and
    /// reports it through the callback.
    pub fn handle_touch_end(&self, x: f32) {
        process_touch_end(
            &self.gesture,
            &self.animated,
            self.idx,
            self.on_idx_change.clone(),
            x,
        );
    }

    /// Gesture taken over by the host; restore the current page.
    pub fn handle_touch_cancel(&self) {
        process_touch_cancel(&self.gesture, &self.animated, self.idx);
    }

    /// Touch handlers wired to this swiper, for hosts that route events
    /// through a dispatch table instead of calling the methods above.
    pub fn touch_handlers(&self) -> TouchHandlers {
        let mut handlers = TouchHandlers::new();

        handlers.on_touch_start({
            let gesture = Arc::clone(&self.gesture);
            let idx = self.idx;
            move |ctx| process_touch_start(&gesture, idx, ctx.page_x)
        });

        handlers.on_touch_move({
            let gesture = Arc::clone(&self.gesture);
            let animated = Arc::clone(&self.animated);
            let idx = self.idx;
            move |ctx| process_touch_move(&gesture, &animated, idx, ctx.page_x)
        });

        handlers.on_touch_end({
            let gesture = Arc::clone(&self.gesture);
            let animated = Arc::clone(&self.animated);
            let callback = self.on_idx_change.clone();
            let idx = self.idx;
            move |ctx| {
                process_touch_end(&gesture, &animated, idx, callback.clone(), ctx.page_x)
            }
        });

        handlers.on_touch_cancel({
            let gesture = Arc::clone(&self.gesture);
            let animated = Arc::clone(&self.animated);
            let idx = self.idx;
            move |_| process_touch_cancel(&gesture, &animated, idx)
        });

        handlers
    }

    // =========================================================================
    // Rendering glue
    // =========================================================================

    /// Advance the settle/tracking animation. Returns `true` while the host
    /// should keep scheduling frames.
    pub fn tick(&self, dt: f32) -> bool {
        self.animated.lock().unwrap().tick(dt)
    }

    /// Per-page placement at the current animated offset.
    ///
    /// Page `i` sits at `i * width + offset`; the host clips the strip to
    /// the viewport width.
    pub fn layout(&self) -> SwiperLayout {
        let width = self.gesture.lock().unwrap().config().width;
        let offset = self.offset();

        SwiperLayout {
            viewport_width: width,
            slots: (0..self.pages.len())
                .map(|index| PageSlot {
                    index,
                    x: index as f32 * width + offset,
                })
                .collect(),
        }
    }

    /// Snapshot of the swiper for the host renderer.
    pub fn render_info(&self) -> SwiperRenderInfo {
        let gesture = self.gesture.lock().unwrap();
        let animated = self.animated.lock().unwrap();

        SwiperRenderInfo {
            offset_x: animated.get(),
            committed_offset: gesture.offset(),
            page_width: gesture.config().width,
            page_count: gesture.page_count(),
            is_animating: animated.is_animating(),
            is_dragging: gesture.is_dragging(),
        }
    }
}

// ============================================================================
// Shared transition plumbing (used by both direct methods and handlers)
// ============================================================================

fn process_touch_start(gesture: &SharedSwipeGesture, idx: usize, x: f32) {
    let mut gesture = gesture.lock().unwrap();
    if let Some(max_idx) = gesture.max_idx() {
        if idx > max_idx {
            tracing::warn!(idx, max_idx, "current index out of range, visual offset undefined");
        }
    }
    gesture.touch_start(x);
}

fn process_touch_move(
    gesture: &SharedSwipeGesture,
    animated: &SharedAnimatedOffset,
    idx: usize,
    x: f32,
) {
    let target = gesture.lock().unwrap().touch_move(x, idx);
    if let Some(target) = target {
        animated.lock().unwrap().animate_to(target);
    }
}

fn process_touch_end(
    gesture: &SharedSwipeGesture,
    animated: &SharedAnimatedOffset,
    idx: usize,
    callback: Option<IdxChangeCallback>,
    x: f32,
) {
    let commit = gesture.lock().unwrap().touch_end(x, idx);
    let Some(commit) = commit else {
        return;
    };

    // Exactly one callback per completed gesture, flip or not
    if let Some(callback) = callback {
        callback(commit.final_idx);
    }

    let final_idx = commit.final_idx;
    animated.lock().unwrap().animate_to_then(
        commit.settle_offset,
        Box::new(move || {
            tracing::debug!(final_idx, "page settled");
        }),
    );
}

fn process_touch_cancel(gesture: &SharedSwipeGesture, animated: &SharedAnimatedOffset, idx: usize) {
    let target = gesture.lock().unwrap().touch_cancel(idx);
    if let Some(target) = target {
        animated.lock().unwrap().animate_to(target);
    }
}

// ============================================================================
// Convenience Constructor
// ============================================================================

/// Create a swiper showing page `idx` with the given configuration.
///
/// # Example
///
/// ```
/// use swipekit_widgets::prelude::*;
///
/// let pager = swiper(1, SwipeConfig::new(300.0).with_flip_sensitivity(35))
///     .unwrap()
///     .pages(["one", "two", "three"]);
/// assert_eq!(pager.page_count(), 3);
/// ```
pub fn swiper<V>(idx: usize, config: SwipeConfig) -> Result<Swiper<V>, SwipeError> {
    Swiper::new(idx, config)
}
