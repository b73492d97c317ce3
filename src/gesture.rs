//! Pointer gesture recognition for the photo carousel.
//!
//! [`GestureEngine`] turns one press-to-release cycle of pointer events into
//! a single [`Intent`]. Touch and mouse feed the same engine through
//! [`PointerEvent`](crate::pointer::PointerEvent); only the event source
//! differs.
//!
//! # State Machine
//!
//! ```text
//!            press                 |dx| > drag            |dx| > commit
//!   Idle ───────────▶ Pressed ─────────────────▶ Dragging ──────────────▶ Committed
//!    ▲                   │                          │                        │
//!    └── release/cancel ─┴──────────────────────────┴────────────────────────┘
//! ```
//!
//! - A slide change fires *during* the move that crosses the commit
//!   threshold, not at release. The session then sits in `Committed` and
//!   absorbs further motion until the pointer goes up.
//! - A release from `Pressed` inside the tap window is a [`Intent::Tap`].
//!   Anything else that reaches release resolves to [`Intent::NoOp`].
//! - Vertical-dominant samples (`|dx| <= |dy|`) never move the state
//!   machine, so page scrolling never moves the carousel. A vertical scroll
//!   past the drag threshold does rule out a tap on release.
//!
//! # Invariants
//!
//! 1. At most one of `Next`, `Prev`, `Tap` is produced per session.
//! 2. A session with `moved_enough` or `scrolled` set never resolves to `Tap`.
//! 3. Events without a live session (move, release, cancel) are `NoOp`.
//! 4. A press during a live session discards the old session and starts a
//!    fresh one; the discarded session produces nothing.

use crate::pointer::{PointerEvent, PointerEventKind};
use crate::types::{Intent, Point, SlideBounds, Timestamp};
use std::time::Duration;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds shared by touch and mouse input.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Horizontal displacement (px) past which the press is no longer a tap
    /// (default: 20).
    pub drag_threshold: f32,
    /// Horizontal displacement (px) past which a slide change fires
    /// immediately (default: 40).
    pub commit_threshold: f32,
    /// A release strictly inside this window after the press may be a tap
    /// (default: 200ms).
    pub tap_window: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 20.0,
            commit_threshold: 40.0,
            tap_window: Duration::from_millis(200),
        }
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Ephemeral record of one press-to-release cycle.
///
/// Created on press, mutated on move, dropped on release or cancel. Nothing
/// in here outlives the cycle that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub origin: Point,
    pub start_time: Timestamp,
    /// Horizontal travel passed the drag threshold.
    pub moved_enough: bool,
    /// Vertical travel passed the drag threshold; the page was scrolled.
    pub scrolled: bool,
}

impl GestureSession {
    fn start(origin: Point, start_time: Timestamp) -> Self {
        Self {
            origin,
            start_time,
            moved_enough: false,
            scrolled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pressed(GestureSession),
    Dragging(GestureSession),
    Committed(GestureSession),
}

/// Observable engine state, without the session payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Pressed,
    Dragging,
    /// A slide change already fired; waiting for release.
    Committed,
}

// ---------------------------------------------------------------------------
// GestureEngine
// ---------------------------------------------------------------------------

/// Single-pointer gesture state machine.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    config: GestureConfig,
    phase: Phase,
}

impl GestureEngine {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        match self.phase {
            Phase::Idle => GestureState::Idle,
            Phase::Pressed(_) => GestureState::Pressed,
            Phase::Dragging(_) => GestureState::Dragging,
            Phase::Committed(_) => GestureState::Committed,
        }
    }

    /// The live session, if a pointer is currently down.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pressed(s) | Phase::Dragging(s) | Phase::Committed(s) => Some(s),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session().is_some()
    }

    /// Dispatch a normalized pointer event.
    ///
    /// `bounds` is only consulted on move, where it decides whether a
    /// committed drag may step in its direction.
    pub fn handle(&mut self, event: &PointerEvent, bounds: SlideBounds) -> Intent {
        match event.kind {
            PointerEventKind::Start => {
                self.on_press_start(event.point, event.time);
                Intent::NoOp
            }
            PointerEventKind::Move => self.on_move(event.point, bounds),
            PointerEventKind::End => self.on_release(event.time),
            PointerEventKind::Cancel => self.on_cancel(),
        }
    }

    /// Begin a new session at `point`.
    pub fn on_press_start(&mut self, point: Point, time: Timestamp) {
        if self.is_active() {
            debug!(state = ?self.state(), "press during live session, restarting");
        }
        self.phase = Phase::Pressed(GestureSession::start(point, time));
        trace!(x = point.x, y = point.y, time = time.0, "gesture pressed");
    }

    /// Feed a pointer sample. May resolve `Next` or `Prev` immediately.
    pub fn on_move(&mut self, point: Point, bounds: SlideBounds) -> Intent {
        let (mut session, dragging) = match self.phase {
            Phase::Pressed(s) => (s, false),
            Phase::Dragging(s) => (s, true),
            Phase::Committed(_) => return Intent::NoOp,
            Phase::Idle => {
                trace!("move without press ignored");
                return Intent::NoOp;
            }
        };

        let dx = session.origin.x - point.x;
        let dy = session.origin.y - point.y;

        if dx.abs() <= dy.abs() {
            // Vertical-dominant: the page is scrolling, not the carousel.
            // The phase stays put, but a real scroll can no longer be a tap.
            if !session.scrolled && dy.abs() > self.config.drag_threshold {
                session.scrolled = true;
                self.phase = if dragging {
                    Phase::Dragging(session)
                } else {
                    Phase::Pressed(session)
                };
                trace!(dy, "vertical scroll, tap disqualified");
            }
            return Intent::NoOp;
        }

        if dx.abs() > self.config.drag_threshold {
            session.moved_enough = true;
            self.phase = Phase::Dragging(session);
        }

        if dx.abs() <= self.config.commit_threshold {
            return Intent::NoOp;
        }

        let intent = if dx > 0.0 && bounds.has_next() {
            Intent::Next
        } else if dx < 0.0 && bounds.has_prev() {
            Intent::Prev
        } else {
            trace!(dx, index = bounds.index, "drag past commit at boundary");
            return Intent::NoOp;
        };

        self.phase = Phase::Committed(session);
        debug!(%intent, dx, index = bounds.index, "drag committed");
        intent
    }

    /// Pointer went up. Resolves `Tap` or `NoOp` and ends the session.
    pub fn on_release(&mut self, time: Timestamp) -> Intent {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        let intent = match phase {
            Phase::Idle => {
                trace!("release without press ignored");
                Intent::NoOp
            }
            Phase::Pressed(session) if self.is_tap(&session, time) => Intent::Tap,
            Phase::Pressed(_) | Phase::Dragging(_) | Phase::Committed(_) => Intent::NoOp,
        };
        if intent == Intent::Tap {
            debug!(time = time.0, "tap resolved");
        }
        intent
    }

    /// Pointer left the tracking surface or the platform cancelled it.
    pub fn on_cancel(&mut self) -> Intent {
        if self.is_active() {
            trace!(state = ?self.state(), "gesture cancelled");
        }
        self.phase = Phase::Idle;
        Intent::NoOp
    }

    fn is_tap(&self, session: &GestureSession, release: Timestamp) -> bool {
        let elapsed = release.millis_since(session.start_time);
        !session.moved_enough
            && !session.scrolled
            && u128::from(elapsed) < self.config.tap_window.as_millis()
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
