//! List adapter that shows two items per row.
//!
//! A list of `n` items becomes `ceil(n / 2)` rows. Each row is bound to a
//! flip view whose pages come from a [`RowPageBinder`]: the merge page shows
//! both items side by side, pages before it show the first item and pages
//! after it the second. A row whose second item is missing drops one page.

use crate::close::CloseHandle;
use crate::pager::FlipViewPager;
use crate::settings::FlipSettings;
use crate::tap::TapPolicy;
use flipview_core::{shared_page_states, FlipError, PageStateStore, SharedPageStates};
use flipview_foundation::ContentProvider;
use std::cell::RefCell;
use std::rc::Rc;

/// What one page of a row shows, resolved once per page index.
#[derive(Debug, PartialEq, Eq)]
pub enum RowPage<'a, T> {
    Merged { first: &'a T, second: Option<&'a T> },
    Single { item: &'a T },
}

/// Builds page content for rows of two items.
pub trait RowPageBinder<T> {
    type Content;

    /// Pages of a row that holds two items.
    fn pages_per_row(&self) -> usize;

    /// Produces the content for `page` of a row. `reuse` is an instance
    /// built earlier for the same slot that may be updated in place; `close`
    /// sends the row back to its default page.
    fn bind_page(
        &mut self,
        page: usize,
        row_page: RowPage<'_, T>,
        close: &CloseHandle,
        reuse: Option<Self::Content>,
    ) -> Self::Content;
}

/// Content provider over the two items of one row.
pub struct MergeProvider<T, B> {
    first: T,
    second: Option<T>,
    merge_page: usize,
    count: usize,
    binder: Rc<RefCell<B>>,
    close: CloseHandle,
}

impl<T, B: RowPageBinder<T>> MergeProvider<T, B> {
    pub fn new(
        first: T,
        second: Option<T>,
        merge_page: usize,
        binder: Rc<RefCell<B>>,
        close: CloseHandle,
    ) -> Self {
        let pages = binder.borrow().pages_per_row();
        let count = if second.is_some() {
            pages
        } else {
            pages.saturating_sub(1)
        };
        Self {
            first,
            second,
            merge_page,
            count,
            binder,
            close,
        }
    }

    pub fn resolve(&self, page: usize) -> RowPage<'_, T> {
        if page == self.merge_page {
            RowPage::Merged {
                first: &self.first,
                second: self.second.as_ref(),
            }
        } else if page < self.merge_page {
            RowPage::Single { item: &self.first }
        } else {
            RowPage::Single {
                item: self.second.as_ref().unwrap_or(&self.first),
            }
        }
    }
}

impl<T, B: RowPageBinder<T>> ContentProvider for MergeProvider<T, B> {
    type Content = B::Content;

    fn count(&self) -> usize {
        self.count
    }

    fn content_for(&mut self, index: usize, reuse: Option<B::Content>) -> B::Content {
        let row_page = self.resolve(index);
        self.binder
            .borrow_mut()
            .bind_page(index, row_page, &self.close, reuse)
    }
}

pub struct FlipListAdapter<T, B> {
    items: Vec<T>,
    binder: Rc<RefCell<B>>,
    page_states: SharedPageStates,
    settings: FlipSettings,
    tap_policy: TapPolicy,
}

impl<T, B> FlipListAdapter<T, B>
where
    T: Clone + 'static,
    B: RowPageBinder<T> + 'static,
{
    pub fn new(items: Vec<T>, binder: B, settings: FlipSettings) -> Self {
        let page_states = shared_page_states(settings.default_page);
        Self::with_page_states(items, binder, settings, page_states)
    }

    /// Uses an existing store, e.g. one restored from JSON.
    pub fn with_page_states(
        items: Vec<T>,
        binder: B,
        settings: FlipSettings,
        page_states: SharedPageStates,
    ) -> Self {
        let tap_policy = TapPolicy::MergedHalves {
            merge_page: settings.merge_page,
        };
        Self {
            items,
            binder: Rc::new(RefCell::new(binder)),
            page_states,
            settings,
            tap_policy,
        }
    }

    pub fn row_count(&self) -> usize {
        self.items.len().div_ceil(2)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the items. Stored pages stay keyed by row.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn push_item(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn page_states(&self) -> SharedPageStates {
        self.page_states.clone()
    }

    pub fn binder(&self) -> &Rc<RefCell<B>> {
        &self.binder
    }

    pub fn set_tap_policy(&mut self, policy: TapPolicy) {
        self.tap_policy = policy;
    }

    /// The two items shown by `row`.
    pub fn row_items(&self, row: usize) -> Option<(&T, Option<&T>)> {
        let first = self.items.get(row * 2)?;
        Some((first, self.items.get(row * 2 + 1)))
    }

    /// Binds `row` to `pager`, restoring the row's stored page and saving it
    /// back whenever the pager settles.
    pub fn bind_row(
        &self,
        row: usize,
        pager: &mut FlipViewPager<B::Content>,
    ) -> Result<(), FlipError> {
        let Some((first, second)) = self.row_items(row) else {
            return Err(FlipError::RowOutOfRange {
                row,
                rows: self.row_count(),
            });
        };

        let provider = MergeProvider::new(
            first.clone(),
            second.cloned(),
            self.settings.merge_page,
            Rc::clone(&self.binder),
            pager.close_handle(),
        );

        let states = Rc::clone(&self.page_states);
        pager.set_on_change_page_listener(Box::new(move |page| {
            states.borrow_mut().save_page_state(row, page);
        }));
        pager.set_tap_policy(self.tap_policy);

        let active_page = self.page_states.borrow_mut().page_for_row(row);
        log::debug!("binding row {row} on page {active_page}");
        pager.set_adapter(Box::new(provider), active_page, row, self.items.len());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod tests;
