//! The gallery component: gesture engine and carousel wired together.
//!
//! [`Gallery`] is what an input callback talks to. It forwards normalized
//! pointer events to the [`GestureEngine`], applies the resolved [`Intent`]
//! to the [`Carousel`], and reports what happened.
//!
//! Pointer events reach a mounted gallery through a [`TrackingSurface`].
//! Mounting returns a [`Subscription`] guard; dropping the guard detaches
//! the listener, so nothing is delivered to a torn-down gallery.
//!
//! An empty gallery is never mounted and ignores every event, so the engine
//! cannot enter a drag or resolve a tap for it.

use crate::carousel::{Carousel, CarouselError, RenderState};
use crate::config::SiteConfig;
use crate::gesture::{GestureConfig, GestureEngine};
use crate::pointer::{self, PointerEvent, RawPointerEvent};
use crate::types::{ImageRef, Intent};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Gallery {
    carousel: Carousel,
    engine: GestureEngine,
}

impl Gallery {
    pub fn new(images: Vec<ImageRef>, gesture: GestureConfig) -> Self {
        Self {
            carousel: Carousel::new(images),
            engine: GestureEngine::new(gesture),
        }
    }

    /// Build a gallery from the site config: blank image entries are
    /// dropped and gesture thresholds come from `[gesture]`.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.gallery.image_refs(),
            config.gesture.to_gesture_config(),
        )
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn is_interactive(&self) -> bool {
        !self.carousel.is_empty()
    }

    /// Feed one normalized event and apply its intent.
    ///
    /// While the viewer is open, drags resolve nothing and a tap closes it.
    pub fn handle(&mut self, event: &PointerEvent) -> Intent {
        if !self.is_interactive() {
            return Intent::NoOp;
        }
        let intent = self.engine.handle(event, self.carousel.input_bounds());
        self.carousel.apply(intent);
        intent
    }

    /// Normalize and feed a device event. `None` if the event was dropped
    /// at normalization.
    pub fn handle_raw(&mut self, raw: &RawPointerEvent) -> Option<(PointerEvent, Intent)> {
        let event = pointer::normalize(raw)?;
        let intent = self.handle(&event);
        Some((event, intent))
    }

    /// Indicator dot or arrow button click.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.carousel.jump_to(index)
    }

    pub fn close_viewer(&mut self) {
        self.carousel.close_viewer();
    }

    pub fn render_state(&self) -> RenderState {
        self.carousel.render_state()
    }
}

// ---------------------------------------------------------------------------
// Listener registration
// ---------------------------------------------------------------------------

pub type PointerListener = Rc<dyn Fn(&PointerEvent)>;

/// The element that receives pointer input and fans it out to listeners.
#[derive(Clone, Default)]
pub struct TrackingSurface {
    listeners: Rc<RefCell<Vec<PointerListener>>>,
}

impl std::fmt::Debug for TrackingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingSurface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl TrackingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: PointerListener) -> Subscription {
        self.listeners.borrow_mut().push(listener.clone());
        Subscription {
            listener,
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Deliver `event` to every listener registered at the time of the call
    /// and still registered when its turn comes.
    pub fn dispatch(&self, event: &PointerEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<PointerListener> = self.listeners.borrow().clone();
        for listener in listeners {
            if !self.is_subscribed(&listener) {
                continue;
            }
            listener(event);
        }
    }

    fn is_subscribed(&self, listener: &PointerListener) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|item| Rc::ptr_eq(item, listener))
    }

    /// Normalize and dispatch a device event.
    pub fn dispatch_raw(&self, raw: &RawPointerEvent) {
        if let Some(event) = pointer::normalize(raw) {
            self.dispatch(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Live listener registration. Dropping it detaches the listener.
#[must_use = "dropping the subscription detaches the listener immediately"]
pub struct Subscription {
    listener: PointerListener,
    listeners: Rc<RefCell<Vec<PointerListener>>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|item| !Rc::ptr_eq(item, &self.listener));
    }
}

/// Attach `gallery` to `surface`.
///
/// Returns `None` for an empty gallery: it has nothing interactive to
/// offer, so no listener is registered. The listener holds only a weak
/// reference; a gallery dropped before its subscription stops receiving
/// events without keeping itself alive.
pub fn mount(gallery: &Rc<RefCell<Gallery>>, surface: &TrackingSurface) -> Option<Subscription> {
    if !gallery.borrow().is_interactive() {
        debug!("empty gallery, not mounting");
        return None;
    }
    let weak: Weak<RefCell<Gallery>> = Rc::downgrade(gallery);
    let listener: PointerListener = Rc::new(move |event: &PointerEvent| {
        let Some(gallery) = weak.upgrade() else {
            return;
        };
        let Ok(mut gallery) = gallery.try_borrow_mut() else {
            warn!(kind = ?event.kind, "gallery busy, pointer event dropped");
            return;
        };
        gallery.handle(event);
    });
    Some(surface.subscribe(listener))
}
