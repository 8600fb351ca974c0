//! Sticky table configuration.

use std::time::Duration;

use serde::Deserialize;

/// Fixed viewport size for the scroll containers.
///
/// In a browser this comes from the stylesheet; hosts without one set it here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-instance configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Number of sticky header rows. 0 disables the header mirror.
    /// Any positive depth behaves as 1.
    pub sticky_header_count: usize,

    /// Number of sticky leading columns. 0 disables the column mirror.
    /// Any positive depth behaves as 1.
    pub sticky_column_count: usize,

    /// Extra class name appended to the root container.
    pub class_name: Option<String>,

    /// Viewport written on the scroll containers, if any.
    pub viewport: Option<Viewport>,

    /// Quiet window before scroll offsets propagate to the custom scrollbars.
    pub scroll_debounce_ms: u64,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            sticky_header_count: 1,
            sticky_column_count: 1,
            class_name: None,
            viewport: None,
            scroll_debounce_ms: 100,
        }
    }
}

impl StickyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sticky header depth.
    pub fn sticky_header(mut self, count: usize) -> Self {
        self.sticky_header_count = count;
        self
    }

    /// Set the sticky column depth.
    pub fn sticky_column(mut self, count: usize) -> Self {
        self.sticky_column_count = count;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Some(Viewport::new(width, height));
        self
    }

    pub fn scroll_debounce(mut self, quiet: Duration) -> Self {
        self.scroll_debounce_ms = u64::try_from(quiet.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn header_enabled(&self) -> bool {
        self.sticky_header_count > 0
    }

    pub fn column_enabled(&self) -> bool {
        self.sticky_column_count > 0
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}
