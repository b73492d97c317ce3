//! # Simple Invite
//!
//! The photo carousel behind a single-page invitation site, plus a small
//! generator that renders the page (cover, greeting, gallery, venue, gift
//! accounts) to static HTML.
//!
//! # Architecture: Events In, Intents Out
//!
//! ```text
//! touch / mouse  →  pointer::normalize  →  GestureEngine  →  Intent  →  Carousel  →  RenderState
//! ```
//!
//! - **Input boundary** ([`pointer`]): touch and mouse events become one
//!   stream of start / move / end / cancel events. Extra fingers and
//!   non-primary mouse buttons are dropped here.
//! - **Gesture engine** ([`gesture`]): one state machine per press, shared by
//!   both input sources. It decides between a tap and a drag and fires at
//!   most one intent per press.
//! - **Controller** ([`carousel`]): owns the slide index and viewer state;
//!   every mutation is bounds-checked.
//! - **Component** ([`gallery`]): wires the two together and owns listener
//!   registration on the tracking surface.
//!
//! The core is synchronous and single-threaded. There are no timers: the
//! tap window is measured from event timestamps.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Points, timestamps, intents, slide bounds |
//! | [`pointer`] | Raw device events and normalization |
//! | [`gesture`] | Tap/drag state machine |
//! | [`carousel`] | Slide index and viewer state, render snapshot |
//! | [`gallery`] | Engine + controller, tracking surface subscriptions |
//! | [`config`] | `config.toml` loading, validation, theme CSS |
//! | [`generate`] | Maud rendering of the invitation page |
//! | [`replay`] | Replays recorded pointer traces |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Early Commit
//!
//! A drag changes the slide the moment it crosses the commit threshold,
//! not on release. The rest of that press is absorbed, so dragging further
//! never skips a second slide.
//!
//! ## Vertical Motion Belongs to the Page
//!
//! Samples where vertical displacement matches or exceeds horizontal are
//! ignored outright, so vertical motion never changes the slide. Once a
//! press has scrolled past the drag threshold it cannot become a tap
//! either; smaller vertical jitter still taps.
//!
//! ## The Viewer Is Modal
//!
//! While the full-screen viewer is open, drags behind it resolve nothing
//! and a tap closes it. Closing returns to the slide it was opened on.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and all interpolation is auto-escaped, which matters
//! because image references come straight from user config.

pub mod carousel;
pub mod config;
pub mod gallery;
pub mod generate;
pub mod gesture;
pub mod output;
pub mod pointer;
pub mod replay;
pub mod types;
