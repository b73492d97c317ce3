//! Replay recorded pointer traces through a gallery.
//!
//! A trace is a JSON array of [`RawPointerEvent`]s, exactly as a browser
//! recorder would capture them (see [`crate::pointer`] for the shape).
//! Replaying normalizes each event, runs it through the gallery, and
//! records the resolved intent and the state after it. This is how gesture
//! tuning changes are checked against real captured input.

use crate::carousel::RenderState;
use crate::gallery::Gallery;
use crate::pointer::{PointerEvent, PointerSource, RawPointerEvent};
use crate::types::{Intent, Timestamp};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Trace parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One raw event and what it did.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub source: PointerSource,
    pub time: Timestamp,
    /// The normalized event; `None` when the raw event was dropped.
    pub event: Option<PointerEvent>,
    pub intent: Intent,
    pub state: RenderState,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub final_state: RenderState,
}

impl ReplayReport {
    /// Intents other than `NoOp`, in the order they resolved.
    pub fn intents(&self) -> Vec<Intent> {
        self.steps
            .iter()
            .map(|step| step.intent)
            .filter(|intent| !intent.is_noop())
            .collect()
    }
}

/// Read a trace file.
pub fn load_trace(path: &Path) -> Result<Vec<RawPointerEvent>, ReplayError> {
    let content = fs::read_to_string(path)?;
    let events = serde_json::from_str(&content)?;
    Ok(events)
}

/// Feed every event in `events` to `gallery`, in order.
pub fn replay(gallery: &mut Gallery, events: &[RawPointerEvent]) -> ReplayReport {
    let steps = events
        .iter()
        .map(|raw| {
            let (event, intent) = match gallery.handle_raw(raw) {
                Some((event, intent)) => (Some(event), intent),
                None => (None, Intent::NoOp),
            };
            ReplayStep {
                source: raw.source(),
                time: raw.time(),
                event,
                intent,
                state: gallery.render_state(),
            }
        })
        .collect();

    ReplayReport {
        steps,
        final_state: gallery.render_state(),
    }
}
