//! Image index bookkeeping for the viewer sink

use crate::actions::dispatcher::{Action, ActionSink};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("No images to show")]
    EmptyGallery,
}

/// Cycles through a fixed number of images, wrapping at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGallery {
    len: usize,
    index: usize,
}

impl ImageGallery {
    pub fn new(len: usize) -> Result<Self, ViewerError> {
        if len == 0 {
            return Err(ViewerError::EmptyGallery);
        }
        Ok(Self { len, index: 0 })
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Apply an image navigation action; other actions are ignored.
    ///
    /// Returns whether the current image changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        let before = self.index;
        match action {
            Action::NextImage => {
                self.next();
            }
            Action::PrevImage => {
                self.previous();
            }
            _ => return false,
        }
        before != self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.len
    }
}

/// Follows image navigation from a running session
impl ActionSink for ImageGallery {
    fn execute(&mut self, action: &Action) {
        if self.apply(action) {
            tracing::debug!("Showing image {}/{}", self.index + 1, self.len);
        }
    }
}
