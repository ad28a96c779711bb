//! Pagination window arithmetic.

use std::ops::RangeInclusive;

/// Pages needed for `total` items at `page_size` per page.
///
/// A zero page size yields zero pages.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One navigation control: where it goes and whether it is clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// Page the control jumps to.
    pub target: u32,
    /// Whether the control is inert.
    pub disabled: bool,
}

/// The pagination bar for one page of results.
///
/// Only exists when there is more than one page.
///
/// ```rust
/// use shopadmin::listing::Pagination;
///
/// assert!(Pagination::new(1, 1).is_none());
///
/// let bar = Pagination::new(5, 10).unwrap();
/// assert_eq!(bar.pages().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
/// assert!(!bar.first().disabled && !bar.last().disabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total_pages: u32,
}

impl Pagination {
    /// Pages shown either side of the current one.
    pub const RADIUS: u32 = 2;

    /// Builds the bar, or `None` when `total_pages <= 1`.
    ///
    /// `current` is clamped into `1..=total_pages`.
    pub fn new(current: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            current: current.clamp(1, total_pages),
            total_pages,
        })
    }

    /// Builds the bar from a server total and page size.
    pub fn for_total(current: u32, total: u64, page_size: u32) -> Option<Self> {
        Self::new(current, total_pages(total, page_size))
    }

    /// Returns the current page.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Returns the page count.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Page-number buttons: up to two either side of the current page.
    pub fn pages(&self) -> RangeInclusive<u32> {
        let start = self.current.saturating_sub(Self::RADIUS).max(1);
        let end = self
            .current
            .saturating_add(Self::RADIUS)
            .min(self.total_pages);
        start..=end
    }

    /// Jump to page 1.
    pub fn first(&self) -> PageControl {
        PageControl {
            target: 1,
            disabled: self.current == 1,
        }
    }

    /// One page back.
    pub fn previous(&self) -> PageControl {
        PageControl {
            target: self.previous_target(),
            disabled: self.current == 1,
        }
    }

    /// One page forward.
    pub fn next(&self) -> PageControl {
        PageControl {
            target: self.next_target(),
            disabled: self.current == self.total_pages,
        }
    }

    /// Jump to the last page.
    pub fn last(&self) -> PageControl {
        PageControl {
            target: self.total_pages,
            disabled: self.current == self.total_pages,
        }
    }

    /// Target of "previous", never below 1.
    pub fn previous_target(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    /// Target of "next", never past the last page.
    pub fn next_target(&self) -> u32 {
        self.current.saturating_add(1).min(self.total_pages)
    }
}
