//! Three-slot page cache with a pooled instance table.
//!
//! Instances move between the table and the previous/current/next slots;
//! they are never dropped on refill, only detached and reattached.

use super::content_provider::ContentProvider;
use super::position::PageWindow;
use std::mem;

enum Entry<C> {
    Empty,
    /// Left over from an earlier bind; handed back to the provider as a
    /// reuse hint on next access.
    Stale(C),
    Live(C),
    /// Currently owned by a slot.
    Attached,
}

impl<C> Entry<C> {
    fn is_materialized(&self) -> bool {
        !matches!(self, Entry::Empty)
    }
}

/// One of the three render slots.
pub struct PageSlot<C> {
    content: Option<(usize, C)>,
}

impl<C> PageSlot<C> {
    const fn empty() -> Self {
        Self { content: None }
    }

    pub fn page(&self) -> Option<usize> {
        self.content.as_ref().map(|(page, _)| *page)
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref().map(|(_, content)| content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

impl<C> Default for PageSlot<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for PageSlot<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSlot")
            .field("content", &self.content)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Previous,
    Current,
    Next,
}

pub struct PageCache<C> {
    provider: Option<Box<dyn ContentProvider<Content = C>>>,
    entries: Vec<Entry<C>>,
    previous: PageSlot<C>,
    current: PageSlot<C>,
    next: PageSlot<C>,
}

impl<C> PageCache<C> {
    pub fn new() -> Self {
        Self {
            provider: None,
            entries: Vec::new(),
            previous: PageSlot::empty(),
            current: PageSlot::empty(),
            next: PageSlot::empty(),
        }
    }

    /// Installs a new provider and returns its page count.
    ///
    /// A table larger than the new count is cleared outright; otherwise the
    /// surviving instances become stale reuse hints.
    pub fn bind(&mut self, provider: Box<dyn ContentProvider<Content = C>>) -> usize {
        self.recycle();
        let count = provider.count();

        if self.entries.len() > count {
            log::debug!(
                "page cache shrinks from {} to {count}, dropping cached pages",
                self.entries.len()
            );
            self.entries.clear();
        } else {
            for entry in &mut self.entries {
                *entry = match mem::replace(entry, Entry::Empty) {
                    Entry::Live(content) | Entry::Stale(content) => Entry::Stale(content),
                    Entry::Empty | Entry::Attached => Entry::Empty,
                };
            }
        }
        self.entries.resize_with(count, || Entry::Empty);
        self.provider = Some(provider);
        count
    }

    /// Detaches all three slots back into the table.
    pub fn recycle(&mut self) {
        for slot in [&mut self.previous, &mut self.current, &mut self.next] {
            if let Some((page, content)) = slot.content.take() {
                if let Some(entry) = self.entries.get_mut(page) {
                    *entry = Entry::Live(content);
                }
            }
        }
    }

    /// Recycles the slots, then fills them from `window`.
    pub fn refill(&mut self, window: &PageWindow) {
        self.recycle();
        self.previous = self.attach(window.previous);
        self.current = self.attach(window.current);
        self.next = self.attach(window.next);
    }

    fn attach(&mut self, page: Option<usize>) -> PageSlot<C> {
        let Some(page) = page else {
            return PageSlot::empty();
        };
        let Some(provider) = self.provider.as_mut() else {
            return PageSlot::empty();
        };
        let cached = self.entries.len();
        let Some(entry) = self.entries.get_mut(page) else {
            log::warn!("page {page} is outside the cached range {cached}");
            return PageSlot::empty();
        };

        let content = match mem::replace(entry, Entry::Attached) {
            Entry::Live(content) => content,
            Entry::Stale(previous) => provider.content_for(page, Some(previous)),
            Entry::Empty => provider.content_for(page, None),
            Entry::Attached => {
                log::warn!("page {page} is already attached to another slot");
                return PageSlot::empty();
            }
        };
        PageSlot {
            content: Some((page, content)),
        }
    }

    pub fn slot(&self, kind: SlotKind) -> &PageSlot<C> {
        match kind {
            SlotKind::Previous => &self.previous,
            SlotKind::Current => &self.current,
            SlotKind::Next => &self.next,
        }
    }

    /// Content for `page`, whether attached to a slot or pooled.
    pub fn content(&self, page: usize) -> Option<&C> {
        [&self.previous, &self.current, &self.next]
            .into_iter()
            .find(|slot| slot.page() == Some(page))
            .and_then(|slot| slot.content())
            .or_else(|| match self.entries.get(page) {
                Some(Entry::Live(content)) => Some(content),
                _ => None,
            })
    }

    /// Number of table entries holding an instance.
    pub fn materialized(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_materialized()).count()
    }

    pub fn page_count(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.previous = PageSlot::empty();
        self.current = PageSlot::empty();
        self.next = PageSlot::empty();
        self.entries.clear();
        self.provider = None;
    }
}

impl<C> Default for PageCache<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/page_cache_tests.rs"]
mod tests;
