//! List coordinator configuration.

use std::time::Duration;

use super::PageSizePolicy;

/// Defaults applied when a list coordinator mounts.
///
/// ## Example
///
/// ```rust
/// use shopadmin::{ListConfig, PageSizePolicy};
/// use std::time::Duration;
///
/// let config = ListConfig::builder()
///     .page_size_policy(PageSizePolicy::new().with_breakpoint(640))
///     .notice_ttl(Duration::from_secs(5))
///     .initial_width(1280)
///     .build();
/// assert_eq!(config.initial_page_size(), 12);
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct ListConfig {
    /// Viewport width to page size mapping.
    #[builder(default)]
    pub page_size_policy: PageSizePolicy,

    /// How long a failure notice stays visible.
    #[builder(default = Duration::from_secs(3))]
    pub notice_ttl: Duration,

    /// Viewport width assumed at mount, before the first resize event.
    #[builder(default = 1024)]
    pub initial_width: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ListConfig {
    /// Returns the page size derived from `initial_width`.
    pub fn initial_page_size(&self) -> u32 {
        self.page_size_policy.page_size_for(self.initial_width)
    }
}
