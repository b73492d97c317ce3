//! Shared types passed between the input boundary, the gesture engine, and
//! the carousel controller.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A pointer position in surface coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Event time in milliseconds from an arbitrary, monotonic origin.
///
/// Browsers hand out `f64` millisecond timestamps; whole milliseconds are
/// enough resolution for the tap window. Deserialization accepts either
/// form and floors fractions; it serializes as a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Floor a browser timestamp to whole milliseconds. `None` for negative
    /// or non-finite input.
    pub fn from_millis_f64(ms: f64) -> Option<Self> {
        if !ms.is_finite() || ms < 0.0 || ms >= u64::MAX as f64 {
            return None;
        }
        Some(Self(ms.floor() as u64))
    }

    /// Milliseconds elapsed since `earlier`. Clock skew saturates to zero.
    pub fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ms = f64::deserialize(deserializer)?;
        Timestamp::from_millis_f64(ms).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid timestamp {ms}: expected non-negative milliseconds"
            ))
        })
    }
}

/// Reference to a gallery image, as listed in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Direction of a single-step slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

/// Resolved outcome of a gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Next,
    Prev,
    Tap,
    NoOp,
}

impl Intent {
    /// The slide direction for `Next`/`Prev`, `None` otherwise.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::Next => Some(Direction::Next),
            Intent::Prev => Some(Direction::Prev),
            Intent::Tap | Intent::NoOp => None,
        }
    }

    pub fn is_noop(self) -> bool {
        self == Intent::NoOp
    }
}

impl From<Direction> for Intent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Next => Intent::Next,
            Direction::Prev => Intent::Prev,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::Next => "next",
            Intent::Prev => "prev",
            Intent::Tap => "tap",
            Intent::NoOp => "-",
        };
        f.write_str(label)
    }
}

/// Where the carousel currently sits, as seen by the gesture engine.
///
/// The engine only needs to know whether a step in either direction is
/// possible; it never mutates the index itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideBounds {
    pub index: usize,
    pub len: usize,
}

impl SlideBounds {
    pub const fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }
}
