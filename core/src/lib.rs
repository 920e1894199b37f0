use serde::{Deserialize, Serialize};

pub use answer::*;
pub use error::*;
pub use grid::*;
pub use session::*;
pub use symbol::*;
pub use types::*;

mod answer;
mod error;
mod grid;
mod session;
mod symbol;
mod types;

/// Facilitator-chosen game shape. Built through [`GameConfig::new`], which
/// enforces the allowed ranges; reconfiguring a session resets it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub columns: Col,
    pub max_rows: Row,
    pub mode: Mode,
    /// Reject a value already used elsewhere in the same row.
    pub distinct: bool,
}

impl GameConfig {
    pub const fn new_unchecked(columns: Col, max_rows: Row, mode: Mode, distinct: bool) -> Self {
        Self {
            columns,
            max_rows,
            mode,
            distinct,
        }
    }

    pub fn new(columns: Col, max_rows: Row, mode: Mode, distinct: bool) -> Result<Self> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns)
            || !(MIN_ROWS..=MAX_ROWS).contains(&max_rows)
        {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(columns, max_rows, mode, distinct))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(5, 6, Mode::Alphabetic, false)
    }
}
