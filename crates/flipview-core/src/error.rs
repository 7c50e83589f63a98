use thiserror::Error;

/// Errors surfaced by configuration, row binding and page-state persistence.
///
/// Touch handling and frame ticks never produce these; anomalies there are
/// absorbed and logged.
#[derive(Debug, Error)]
pub enum FlipError {
    #[error("page unit must be a positive finite number, got {0}")]
    InvalidPageUnit(f32),

    #[error("fling velocity bounds are invalid (min {min}, max {max})")]
    InvalidFlingVelocity { min: f32, max: f32 },

    #[error("touch slop must be a non-negative finite number, got {0}")]
    InvalidTouchSlop(f32),

    #[error("row {row} is out of range for {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("page state could not be (de)serialized")]
    PageState(#[from] serde_json::Error),
}
