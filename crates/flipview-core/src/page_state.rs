//! Per-row page state.
//!
//! A scrolling list recycles flip views between rows, so the page a row was
//! left on has to live outside the view. The store maps a row index to the
//! last settled page and falls back to the configured default page.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::FlipError;

/// Settings-store contract consulted on every row bind and updated on every
/// settle.
pub trait PageStateStore {
    /// Records the page a row settled on.
    fn save_page_state(&mut self, row: usize, page: usize);

    /// Returns the stored page for `row`, creating a default entry on first
    /// query.
    fn page_for_row(&mut self, row: usize) -> usize;

    /// The page a row starts on before it has ever settled.
    fn default_page(&self) -> usize;

    /// Forgets every stored row.
    fn reset(&mut self);
}

/// In-memory page state store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPageStates {
    default_page: usize,
    pages: BTreeMap<usize, usize>,
}

/// Page states shared between a list adapter and the settle listeners it
/// installs on its flip views.
pub type SharedPageStates = Rc<RefCell<RowPageStates>>;

/// Creates an empty shared store.
pub fn shared_page_states(default_page: usize) -> SharedPageStates {
    Rc::new(RefCell::new(RowPageStates::new(default_page)))
}

impl RowPageStates {
    pub fn new(default_page: usize) -> Self {
        Self {
            default_page,
            pages: BTreeMap::new(),
        }
    }

    /// Stored page for `row` without creating an entry.
    pub fn peek(&self, row: usize) -> Option<usize> {
        self.pages.get(&row).copied()
    }

    /// Number of rows with an entry.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Forgets a single row; it reverts to the default page.
    pub fn reset_row(&mut self, row: usize) {
        self.pages.remove(&row);
    }

    pub fn to_json(&self) -> Result<String, FlipError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FlipError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PageStateStore for RowPageStates {
    fn save_page_state(&mut self, row: usize, page: usize) {
        let previous = self.pages.insert(row, page);
        if previous != Some(page) {
            log::debug!("row {row} page state {previous:?} -> {page}");
        }
    }

    fn page_for_row(&mut self, row: usize) -> usize {
        *self.pages.entry(row).or_insert(self.default_page)
    }

    fn default_page(&self) -> usize {
        self.default_page
    }

    fn reset(&mut self) {
        self.pages.clear();
    }
}
