//! Carousel slide index.
//!
//! DESIGN
//! ======
//! The slide count is fixed when the carousel is created (slides added to the
//! track later are not picked up). A zero-slide track has no valid index, so
//! [`Carousel::new`] refuses it and the host leaves the feature disabled.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    /// Start at slide 0, or `None` for an empty track.
    #[must_use]
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.count - 1) % self.count;
        self.index
    }

    /// CSS `transform` for the track. Each slide is assumed to be exactly one
    /// track-width wide.
    #[must_use]
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}
