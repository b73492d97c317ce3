//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Gallery "Our Moments" (3 photos)
//!     001 images/01.jpg
//!     002 images/02.jpg
//!     003 images/03.jpg
//! Gesture
//!     drag 20px, commit 40px, tap < 200ms
//! Sections
//!     hero, greeting, gallery, venue
//! ```
//!
//! ## Replay
//!
//! ```text
//! 001 touch start (200, 300) @0ms → -  [1/3]
//! 002 touch move (155, 303) @32ms → next  [2/3]
//! 003 touch end (0, 0) @60ms → -  [2/3]
//! 004 mouse dropped @90ms
//! Final: slide 2/3, viewer closed
//! ```

use crate::carousel::RenderState;
use crate::config::SiteConfig;
use crate::pointer::{PointerEventKind, PointerSource};
use crate::replay::{ReplayReport, ReplayStep};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn source_label(source: PointerSource) -> &'static str {
    match source {
        PointerSource::Touch => "touch",
        PointerSource::Mouse => "mouse",
    }
}

fn kind_label(kind: PointerEventKind) -> &'static str {
    match kind {
        PointerEventKind::Start => "start",
        PointerEventKind::Move => "move",
        PointerEventKind::End => "end",
        PointerEventKind::Cancel => "cancel",
    }
}

/// `[2/3]`, or `[2/3 viewer 2]` while the viewer is open.
fn slide_position(state: &RenderState) -> String {
    if state.len == 0 {
        return "[empty]".to_string();
    }
    if state.viewer_open {
        format!(
            "[{}/{} viewer {}]",
            state.current_index + 1,
            state.len,
            state.viewer_index + 1
        )
    } else {
        format!("[{}/{}]", state.current_index + 1, state.len)
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the `check` command summary.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let images = config.gallery.image_refs();
    let mut lines = Vec::new();

    lines.push(format!(
        "Gallery \"{}\" ({} photos)",
        config.gallery.title,
        images.len()
    ));
    for (i, image) in images.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), image.as_str()));
    }
    let skipped = config.gallery.images.len() - images.len();
    if skipped > 0 {
        lines.push(format!("{}({} blank entries skipped)", indent(1), skipped));
    }

    lines.push("Gesture".to_string());
    let g = &config.gesture;
    lines.push(format!(
        "{}drag {}px, commit {}px, tap < {}ms",
        indent(1),
        g.drag_threshold_px,
        g.commit_threshold_px,
        g.tap_max_ms
    ));

    lines.push("Sections".to_string());
    lines.push(format!("{}{}", indent(1), config.sections().join(", ")));
    lines
}

pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// replay
// ============================================================================

fn format_step(position: usize, step: &ReplayStep) -> String {
    let source = source_label(step.source);
    match &step.event {
        Some(event) => format!(
            "{} {} {} ({}, {}) @{}ms → {}  {}",
            format_index(position),
            source,
            kind_label(event.kind),
            event.point.x,
            event.point.y,
            event.time.0,
            step.intent,
            slide_position(&step.state)
        ),
        None => format!(
            "{} {} dropped @{}ms",
            format_index(position),
            source,
            step.time.0
        ),
    }
}

/// Format final carousel state as a one-line summary.
pub fn format_final_state(state: &RenderState) -> String {
    if state.len == 0 {
        return "Final: no images".to_string();
    }
    let viewer = if state.viewer_open {
        format!("viewer open on {}", state.viewer_index + 1)
    } else {
        "viewer closed".to_string()
    };
    format!(
        "Final: slide {}/{}, {}",
        state.current_index + 1,
        state.len,
        viewer
    )
}

/// Format a replay report: one line per raw event, then the final state.
pub fn format_replay_output(report: &ReplayReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format_step(i + 1, step))
        .collect();
    lines.push(format_final_state(&report.final_state));
    lines
}

pub fn print_replay_output(report: &ReplayReport) {
    for line in format_replay_output(report) {
        println!("{}", line);
    }
}
