//! Carousel and full-screen viewer state.
//!
//! [`Carousel`] owns the current slide and the viewer flag. It is the only
//! thing that mutates them; the gesture engine just hands it [`Intent`]s.
//!
//! The index never wraps: `Next` on the last slide and `Prev` on the first
//! are no-ops. An empty carousel is inert and every navigation call on it
//! does nothing.
//!
//! The open viewer is a modal over the strip. While it is open a tap closes
//! it and slide steps are ignored, so the visitor returns to the slide they
//! opened.

use crate::types::{Direction, ImageRef, Intent, SlideBounds};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide index {index} out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderState {
    pub len: usize,
    pub current_index: usize,
    pub viewer_open: bool,
    pub viewer_index: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl RenderState {
    /// Horizontal translation of the slide strip, in percent of one slide.
    pub fn strip_offset_percent(&self) -> i64 {
        -(self.current_index as i64 * 100)
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<ImageRef>,
    current_index: usize,
    viewer_open: bool,
    viewer_index: usize,
}

impl Carousel {
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self {
            images,
            current_index: 0,
            viewer_open: false,
            viewer_index: 0,
        }
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.current_index)
    }

    pub fn viewer_open(&self) -> bool {
        self.viewer_open
    }

    pub fn viewer_index(&self) -> usize {
        self.viewer_index
    }

    /// The image shown in the viewer, only while it is open.
    pub fn viewer_image(&self) -> Option<&ImageRef> {
        if self.viewer_open {
            self.images.get(self.viewer_index)
        } else {
            None
        }
    }

    pub fn bounds(&self) -> SlideBounds {
        SlideBounds::new(self.current_index, self.images.len())
    }

    /// Bounds the gesture engine should see. Behind the open viewer the
    /// strip cannot move, so a drag there never commits.
    pub fn input_bounds(&self) -> SlideBounds {
        if self.viewer_open {
            SlideBounds::new(0, 1)
        } else {
            self.bounds()
        }
    }

    pub fn has_prev(&self) -> bool {
        self.bounds().has_prev()
    }

    pub fn has_next(&self) -> bool {
        self.bounds().has_next()
    }

    /// Step one slide. Returns whether the index changed.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Next if self.has_next() => self.current_index + 1,
            Direction::Prev if self.has_prev() => self.current_index - 1,
            _ => return false,
        };
        debug!(from = self.current_index, to = target, ?direction, "slide advanced");
        self.current_index = target;
        true
    }

    /// Jump straight to `index`, as the indicator dots and arrow buttons do.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.images.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Open the full-screen viewer on the current slide.
    pub fn open_viewer(&mut self) {
        if self.is_empty() {
            return;
        }
        self.viewer_open = true;
        self.viewer_index = self.current_index;
        debug!(index = self.viewer_index, "viewer opened");
    }

    /// Close the viewer. `viewer_index` is kept but means nothing while closed.
    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }

    /// Apply a resolved gesture intent.
    ///
    /// With the viewer open, `Tap` closes it and `Next`/`Prev` are ignored.
    pub fn apply(&mut self, intent: Intent) {
        if self.viewer_open {
            match intent {
                Intent::Tap => {
                    self.close_viewer();
                    debug!(index = self.current_index, "viewer closed by tap");
                }
                Intent::Next | Intent::Prev => {
                    debug!(%intent, "slide step ignored while viewer is open");
                }
                Intent::NoOp => {}
            }
            return;
        }
        match intent {
            Intent::Next => {
                self.advance(Direction::Next);
            }
            Intent::Prev => {
                self.advance(Direction::Prev);
            }
            Intent::Tap => self.open_viewer(),
            Intent::NoOp => {}
        }
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            len: self.images.len(),
            current_index: self.current_index,
            viewer_open: self.viewer_open,
            viewer_index: self.viewer_index,
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }
}
