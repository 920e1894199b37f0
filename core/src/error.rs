use thiserror::Error;

use crate::{Col, Symbol};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("The header row cannot be changed")]
    HeaderRow,
    #[error("The grid is at its row limit")]
    RowCapReached,
    #[error("Value not allowed in this mode")]
    SymbolNotAllowed,
    #[error("{0} is already used in this row")]
    DuplicateValue(Symbol),
    #[error("The answer must be exactly {0} characters")]
    AnswerLength(Col),
    #[error("The answer contains a value not allowed in this mode")]
    AnswerSymbol,
    #[error("No answer has been set")]
    NoAnswer,
    #[error("A reveal is still in progress")]
    RevealInProgress,
    #[error("Nothing to check yet")]
    NothingToCheck,
    #[error("Nothing left to reveal")]
    NothingToReveal,
    #[error("Columns must be 3-10 and rows 3-12")]
    InvalidConfig,
}

pub type Result<T> = core::result::Result<T, GameError>;
