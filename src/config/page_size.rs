//! Responsive page-size policy.

/// Maps a viewport width in pixels to a page size.
///
/// ## Default Values
///
/// - `breakpoint`: 576px (inclusive: a 576px viewport is compact)
/// - `compact_size`: 6
/// - `wide_size`: 12
///
/// ## Example
///
/// ```rust
/// use shopadmin::PageSizePolicy;
///
/// let policy = PageSizePolicy::default();
/// assert_eq!(policy.page_size_for(400), 6);
/// assert_eq!(policy.page_size_for(576), 6);
/// assert_eq!(policy.page_size_for(577), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizePolicy {
    /// Widest viewport that still counts as compact.
    pub breakpoint: u32,

    /// Page size at or below the breakpoint.
    pub compact_size: u32,

    /// Page size above the breakpoint.
    pub wide_size: u32,
}

impl Default for PageSizePolicy {
    fn default() -> Self {
        Self {
            breakpoint: 576,
            compact_size: 6,
            wide_size: 12,
        }
    }
}

impl PageSizePolicy {
    /// Creates the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compact breakpoint.
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Sets both page sizes. Zero sizes are raised to 1.
    #[must_use]
    pub fn with_sizes(mut self, compact_size: u32, wide_size: u32) -> Self {
        self.compact_size = compact_size.max(1);
        self.wide_size = wide_size.max(1);
        self
    }

    /// Returns the page size for a viewport `width` in pixels.
    #[inline]
    pub fn page_size_for(&self, width: u32) -> u32 {
        if width <= self.breakpoint {
            self.compact_size
        } else {
            self.wide_size
        }
    }
}
