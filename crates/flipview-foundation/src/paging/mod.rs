//! Continuous flip position and the three-slot page content cache.

mod content_provider;
mod page_cache;
mod position;

pub use content_provider::{content_provider_fn, ContentProvider, FnContentProvider};
pub use page_cache::{PageCache, PageSlot, SlotKind};
pub use position::{DistanceChange, FlipPosition, PageWindow, DEFAULT_PAGE_UNIT};
