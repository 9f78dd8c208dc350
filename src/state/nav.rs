//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class on the link list while the mobile menu is open.
pub const OPEN_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any navigation link click, whichever link it was.
    pub fn close(&mut self) -> bool {
        self.open = false;
        self.open
    }
}
