//! Core types for the flip view engine.
//!
//! Holds the crate-wide error type and the per-row page state store that a
//! list-binding layer consults on every bind and updates on every settle.

mod error;
mod page_state;

pub use error::FlipError;
pub use page_state::{shared_page_states, PageStateStore, RowPageStates, SharedPageStates};
