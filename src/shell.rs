//! Shell
//!
//! Top-level layout state: only whether the sidebar is shown.

/// Layout state owned by the page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    sidebar_visible: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Shell {
    pub fn new(sidebar_visible: bool) -> Self {
        Self { sidebar_visible }
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn show_sidebar(&mut self) {
        self.sidebar_visible = true;
    }

    pub fn hide_sidebar(&mut self) {
        self.sidebar_visible = false;
    }

    /// Flip visibility and return the new value
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_visible = !self.sidebar_visible;
        self.sidebar_visible
    }
}
