use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::*;

/// Player-visible contents of one guess cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: Option<Symbol>,
    pub feedback: Option<Feedback>,
}

impl Cell {
    pub const fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        self.value.is_none() && self.feedback.is_none()
    }
}

pub type CellRow = SmallVec<[Cell; MAX_COLUMNS as usize]>;

/// Outcome of writing a value or feedback into a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlaceOutcome {
    NoChange,
    Placed,
}

impl PlaceOutcome {
    /// Whether this outcome could have caused an update to the grid
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Placed)
    }
}

/// Outcome of clearing a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClearOutcome {
    NoChange,
    Cleared,
}

impl ClearOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Cleared)
    }
}

/// The guess grid: a header row of column labels plus up to `max_rows`
/// guess rows.
///
/// Public coordinates follow the on-screen layout: row 0 is the header and
/// is never writable, guess rows start at 1. Values are validated against
/// the mode's alphabet on every placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    columns: Col,
    max_rows: Row,
    mode: Mode,
    rows: Vec<CellRow>,
}

impl Grid {
    pub fn new(config: &GameConfig) -> Self {
        let mut grid = Self {
            columns: config.columns,
            max_rows: config.max_rows,
            mode: config.mode,
            rows: Vec::new(),
        };
        grid.push_row();
        grid
    }

    pub const fn columns(&self) -> Col {
        self.columns
    }

    pub const fn max_rows(&self) -> Row {
        self.max_rows
    }

    /// Number of guess rows currently in the grid.
    pub fn guess_rows(&self) -> Row {
        self.rows.len() as Row
    }

    pub fn at_row_cap(&self) -> bool {
        self.guess_rows() >= self.max_rows
    }

    /// Column label shown in the header row.
    pub fn label(&self, col: Col) -> &'static str {
        self.mode.header_labels()[col as usize]
    }

    pub fn cell(&self, row: Row, col: Col) -> Option<&Cell> {
        let row = (row as usize).checked_sub(1)?;
        self.rows.get(row)?.get(col as usize)
    }

    pub fn row_cells(&self, row: Row) -> Option<&[Cell]> {
        let row = (row as usize).checked_sub(1)?;
        self.rows.get(row).map(|cells| cells.as_slice())
    }

    pub fn is_row_filled(&self, row: Row) -> bool {
        self.row_cells(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_filled()))
    }

    /// Bottom-most guess row containing any value; the row a check targets.
    pub fn last_row_with_values(&self) -> Option<Row> {
        (1..=self.guess_rows()).rev().find(|&row| {
            self.row_cells(row)
                .is_some_and(|cells| cells.iter().any(|cell| cell.is_filled()))
        })
    }

    /// Whether `value` already sits in `row` at a column other than `skip`.
    pub fn row_contains(&self, row: Row, value: Symbol, skip: Col) -> bool {
        self.row_cells(row).is_some_and(|cells| {
            cells
                .iter()
                .enumerate()
                .any(|(col, cell)| col != skip as usize && cell.value == Some(value))
        })
    }

    pub fn place(&mut self, row: Row, col: Col, value: Symbol) -> Result<PlaceOutcome> {
        use PlaceOutcome::*;

        if !self.mode.accepts(value) {
            return Err(GameError::SymbolNotAllowed);
        }
        let (row, col) = self.validate(row, col)?;

        let cell = &mut self.rows[row][col];
        Ok(if cell.value == Some(value) {
            NoChange
        } else {
            cell.value = Some(value);
            Placed
        })
    }

    pub fn place_feedback(&mut self, row: Row, col: Col, feedback: Feedback) -> Result<PlaceOutcome> {
        use PlaceOutcome::*;

        let (row, col) = self.validate(row, col)?;

        let cell = &mut self.rows[row][col];
        Ok(if cell.feedback == Some(feedback) {
            NoChange
        } else {
            cell.feedback = Some(feedback);
            Placed
        })
    }

    pub fn clear_cell(&mut self, row: Row, col: Col) -> Result<ClearOutcome> {
        use ClearOutcome::*;

        let (row, col) = self.validate(row, col)?;

        let cell = &mut self.rows[row][col];
        Ok(if cell.is_empty() {
            NoChange
        } else {
            *cell = Cell::default();
            Cleared
        })
    }

    pub fn append_row(&mut self) -> Result<Row> {
        if self.at_row_cap() {
            return Err(GameError::RowCapReached);
        }
        self.push_row();
        Ok(self.guess_rows())
    }

    /// Removes all feedback badges, keeping placed values.
    pub fn clear_feedback(&mut self) {
        for row in &mut self.rows {
            for cell in row {
                cell.feedback = None;
            }
        }
    }

    /// Rebuilds the grid down to a single empty guess row.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.push_row();
    }

    fn validate(&self, row: Row, col: Col) -> Result<(usize, usize)> {
        if row == 0 {
            return Err(GameError::HeaderRow);
        }
        let (row, col) = (row as usize - 1, col as usize);
        if row < self.rows.len() && col < self.columns as usize {
            Ok((row, col))
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn push_row(&mut self) {
        self.rows.push(smallvec![Cell::default(); self.columns as usize]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: Col, max_rows: Row, mode: Mode) -> Grid {
        Grid::new(&GameConfig::new_unchecked(columns, max_rows, mode, false))
    }

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    #[test]
    fn new_grid_has_one_empty_guess_row() {
        let grid = grid(5, 6, Mode::Alphabetic);

        assert_eq!(grid.guess_rows(), 1);
        assert!(grid.row_cells(1).unwrap().iter().all(|cell| cell.is_empty()));
        assert_eq!(grid.last_row_with_values(), None);
    }

    #[test]
    fn header_row_is_never_writable() {
        let mut grid = grid(5, 6, Mode::Alphabetic);

        assert_eq!(grid.place(0, 0, sym('A')), Err(GameError::HeaderRow));
        assert_eq!(grid.clear_cell(0, 2), Err(GameError::HeaderRow));
        assert_eq!(grid.label(0), "1st");
    }

    #[test]
    fn numeric_mode_uses_place_value_labels() {
        let grid = grid(4, 6, Mode::Numeric);

        assert_eq!(grid.label(0), "M");
        assert_eq!(grid.label(3), "th");
    }

    #[test]
    fn place_enforces_the_active_alphabet() {
        let mut grid = grid(3, 3, Mode::Numeric);

        assert_eq!(grid.place(1, 0, sym('A')), Err(GameError::SymbolNotAllowed));
        assert_eq!(grid.place(1, 0, sym('7')), Ok(PlaceOutcome::Placed));
        assert_eq!(grid.place(1, 0, sym('7')), Ok(PlaceOutcome::NoChange));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut grid = grid(3, 3, Mode::Mixed);

        assert_eq!(grid.place(2, 0, sym('A')), Err(GameError::InvalidCoords));
        assert_eq!(grid.place(1, 3, sym('A')), Err(GameError::InvalidCoords));
    }

    #[test]
    fn append_row_stops_at_the_cap() {
        let mut grid = grid(3, 3, Mode::Alphabetic);

        assert_eq!(grid.append_row(), Ok(2));
        assert_eq!(grid.append_row(), Ok(3));
        assert_eq!(grid.append_row(), Err(GameError::RowCapReached));
        assert_eq!(grid.guess_rows(), 3);
    }

    #[test]
    fn row_queries_see_placed_values() {
        let mut grid = grid(3, 3, Mode::Alphabetic);
        grid.place(1, 0, sym('C')).unwrap();
        grid.append_row().unwrap();
        grid.place(2, 1, sym('A')).unwrap();

        assert_eq!(grid.last_row_with_values(), Some(2));
        assert!(!grid.is_row_filled(2));
        assert!(grid.row_contains(2, sym('A'), 0));
        assert!(!grid.row_contains(2, sym('A'), 1));
    }

    #[test]
    fn clear_feedback_keeps_values() {
        let mut grid = grid(3, 3, Mode::Alphabetic);
        grid.place(1, 0, sym('C')).unwrap();
        grid.place_feedback(1, 0, Feedback::Match).unwrap();

        grid.clear_feedback();

        let cell = grid.cell(1, 0).unwrap();
        assert_eq!(cell.value, Some(sym('C')));
        assert_eq!(cell.feedback, None);
    }

    #[test]
    fn reset_rebuilds_a_single_empty_row() {
        let mut grid = grid(3, 6, Mode::Alphabetic);
        grid.place(1, 0, sym('C')).unwrap();
        grid.append_row().unwrap();

        grid.reset();

        assert_eq!(grid.guess_rows(), 1);
        assert_eq!(grid.last_row_with_values(), None);
    }
}
