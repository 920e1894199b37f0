use serde::{Deserialize, Serialize};

use crate::*;

/// Progression phase. Checks are rejected while a reveal is in flight.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Revealing,
}

impl Phase {
    pub const fn is_revealing(self) -> bool {
        matches!(self, Self::Revealing)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

/// One queued feedback entry awaiting its reveal tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingFeedback {
    pub row: Row,
    pub col: Col,
    pub feedback: Feedback,
}

/// What completing a reveal did to the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RowResult {
    /// Full row, every column graded `Match`.
    Won,
    /// Full row; a new row was appended and seeded with the `Match` cells.
    Carried,
    /// Full row, but the grid is at its row cap.
    CapReached,
    /// The checked row was only partially filled, nothing to progress.
    Incomplete,
}

/// Outcome of a single reveal tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// One more cell revealed, more remain in the queue.
    Revealed { step: PendingFeedback, remaining: usize },
    /// The queue is exhausted and the session is idle again.
    Finished { row: Row, last: PendingFeedback, result: RowResult },
}

impl RevealOutcome {
    /// The cell this tick revealed.
    pub const fn revealed_cell(&self) -> PendingFeedback {
        match self {
            Self::Revealed { step, .. } => *step,
            Self::Finished { last, .. } => *last,
        }
    }
}

/// A complete facilitator-led game from configuration to win.
///
/// All gameplay mutation goes through this type; the view layer only reads
/// the grid back. The session is clock-free: reveal pacing is whoever calls
/// [`Session::reveal_next`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    answer: Option<Answer>,
    pending: Vec<PendingFeedback>,
    revealed: usize,
    winner_row: Option<Row>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::new(&config),
            answer: None,
            pending: Vec::new(),
            revealed: 0,
            winner_row: None,
        }
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn has_answer(&self) -> bool {
        self.answer.is_some()
    }

    pub const fn winner_row(&self) -> Option<Row> {
        self.winner_row
    }

    pub fn phase(&self) -> Phase {
        if self.revealed < self.pending.len() {
            Phase::Revealing
        } else {
            Phase::Idle
        }
    }

    /// Reveal progress as `(revealed, queued)` for the current check.
    pub fn reveal_progress(&self) -> (usize, usize) {
        (self.revealed, self.pending.len())
    }

    /// Replaces the configuration and rebuilds the session: grid, answer,
    /// queue and winner marker are all discarded.
    pub fn reconfigure(&mut self, config: GameConfig) {
        log::debug!("reconfigure: {:?}", config);
        self.config = config;
        self.grid = Grid::new(&config);
        self.answer = None;
        self.abort_reveal();
        self.winner_row = None;
    }

    /// Stores (or replaces) the facilitator's answer.
    pub fn set_answer(&mut self, input: &str) -> Result<()> {
        let answer = Answer::parse(input, &self.config)?;
        log::debug!("answer set ({} symbols)", answer.len());
        self.answer = Some(answer);
        Ok(())
    }

    pub fn place_value(&mut self, row: Row, col: Col, value: Symbol) -> Result<PlaceOutcome> {
        if self.config.distinct && self.grid.row_contains(row, value, col) {
            return Err(GameError::DuplicateValue(value));
        }
        self.grid.place(row, col, value)
    }

    /// Writes a feedback badge directly, for facilitator-dragged glyphs.
    pub fn place_feedback(&mut self, row: Row, col: Col, feedback: Feedback) -> Result<PlaceOutcome> {
        self.grid.place_feedback(row, col, feedback)
    }

    pub fn clear_cell(&mut self, row: Row, col: Col) -> Result<ClearOutcome> {
        self.grid.clear_cell(row, col)
    }

    /// Clears all placed values and feedback, keeping the answer. Aborts an
    /// in-flight reveal.
    pub fn clear_values(&mut self) {
        self.grid.reset();
        self.abort_reveal();
        self.winner_row = None;
    }

    /// Clears feedback badges only, keeping placed values. Aborts an
    /// in-flight reveal.
    pub fn clear_feedback(&mut self) {
        self.grid.clear_feedback();
        self.abort_reveal();
        self.winner_row = None;
    }

    /// Grades the most recent row containing any value and queues its
    /// feedback for sequential reveal. Returns the row being checked.
    pub fn check(&mut self) -> Result<Row> {
        let Some(answer) = &self.answer else {
            return Err(GameError::NoAnswer);
        };
        if self.revealed < self.pending.len() {
            return Err(GameError::RevealInProgress);
        }
        let row = self.grid.last_row_with_values().ok_or(GameError::NothingToCheck)?;
        let cells = self.grid.row_cells(row).ok_or(GameError::InvalidCoords)?;

        let pending: Vec<PendingFeedback> = cells
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| {
                let col = col as Col;
                let value = cell.value?;
                Some(PendingFeedback {
                    row,
                    col,
                    feedback: answer.grade(col, value),
                })
            })
            .collect();

        log::debug!("check row {}: {} cells queued", row, pending.len());
        self.pending = pending;
        self.revealed = 0;
        self.winner_row = None;
        Ok(row)
    }

    /// Reveals the next queued feedback. On the final entry the row is
    /// resolved: win detection, then carry-forward of `Match` cells into a
    /// freshly appended row.
    pub fn reveal_next(&mut self) -> Result<RevealOutcome> {
        let step = *self
            .pending
            .get(self.revealed)
            .ok_or(GameError::NothingToReveal)?;
        self.grid.place_feedback(step.row, step.col, step.feedback)?;
        self.revealed += 1;
        log::trace!("revealed ({}, {}): {:?}", step.row, step.col, step.feedback);

        let remaining = self.pending.len() - self.revealed;
        if remaining > 0 {
            return Ok(RevealOutcome::Revealed { step, remaining });
        }

        let result = self.resolve_row(step.row);
        self.abort_reveal();
        Ok(RevealOutcome::Finished {
            row: step.row,
            last: step,
            result,
        })
    }

    fn resolve_row(&mut self, row: Row) -> RowResult {
        use RowResult::*;

        if !self.grid.is_row_filled(row) {
            return Incomplete;
        }

        let all_match = self
            .grid
            .row_cells(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.feedback == Some(Feedback::Match)));
        if all_match {
            log::debug!("row {} wins", row);
            self.winner_row = Some(row);
            return Won;
        }

        match self.grid.append_row() {
            Ok(new_row) => {
                self.carry_forward(row, new_row);
                Carried
            }
            Err(err) => {
                log::debug!("no row appended after row {}: {}", row, err);
                CapReached
            }
        }
    }

    /// Seeds `to` with the `Match` values of `from`, in their columns.
    fn carry_forward(&mut self, from: Row, to: Row) {
        for col in 0..self.grid.columns() {
            let carried = self
                .grid
                .cell(from, col)
                .filter(|cell| cell.feedback == Some(Feedback::Match))
                .and_then(|cell| cell.value);
            if let Some(value) = carried {
                if let Err(err) = self.grid.place(to, col, value) {
                    log::warn!("carry-forward failed at column {}: {}", col, err);
                }
            }
        }
        log::debug!("carried matches from row {} into row {}", from, to);
    }

    fn abort_reveal(&mut self) {
        self.pending.clear();
        self.revealed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::*;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    fn session(columns: Col, max_rows: Row, mode: Mode, answer: &str) -> Session {
        let mut session = Session::new(GameConfig::new_unchecked(columns, max_rows, mode, false));
        session.set_answer(answer).unwrap();
        session
    }

    fn fill_row(session: &mut Session, row: Row, values: &str) {
        for (col, c) in values.chars().enumerate() {
            session.place_value(row, col as Col, sym(c)).unwrap();
        }
    }

    fn reveal_all(session: &mut Session) -> RevealOutcome {
        loop {
            match session.reveal_next().unwrap() {
                RevealOutcome::Revealed { .. } => continue,
                finished @ RevealOutcome::Finished { .. } => return finished,
            }
        }
    }

    #[test]
    fn check_requires_an_answer() {
        let mut session = Session::new(GameConfig::default());
        assert_eq!(session.check(), Err(GameError::NoAnswer));
    }

    #[test]
    fn check_requires_some_content() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        assert_eq!(session.check(), Err(GameError::NothingToCheck));
    }

    #[test]
    fn check_is_rejected_while_revealing() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        fill_row(&mut session, 1, "321");
        session.check().unwrap();
        session.reveal_next().unwrap();

        assert_eq!(session.phase(), Phase::Revealing);
        assert_eq!(session.check(), Err(GameError::RevealInProgress));
    }

    #[test]
    fn reveal_steps_through_the_row_in_order() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        fill_row(&mut session, 1, "321");
        assert_eq!(session.check(), Ok(1));

        let first = session.reveal_next().unwrap();
        assert_eq!(
            first,
            RevealOutcome::Revealed {
                step: PendingFeedback { row: 1, col: 0, feedback: Present },
                remaining: 2,
            }
        );
        assert_eq!(session.reveal_progress(), (1, 3));
        assert_eq!(session.grid().cell(1, 0).unwrap().feedback, Some(Present));
        assert_eq!(session.grid().cell(1, 1).unwrap().feedback, None);

        session.reveal_next().unwrap();
        let last = session.reveal_next().unwrap();
        assert_eq!(
            last,
            RevealOutcome::Finished {
                row: 1,
                last: PendingFeedback { row: 1, col: 2, feedback: Present },
                result: RowResult::Carried,
            }
        );
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.reveal_next(), Err(GameError::NothingToReveal));
    }

    #[test]
    fn carried_row_holds_exactly_the_match_cells() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        fill_row(&mut session, 1, "153");
        session.check().unwrap();
        let finished = reveal_all(&mut session);

        assert!(matches!(
            finished,
            RevealOutcome::Finished { result: RowResult::Carried, .. }
        ));
        assert_eq!(session.grid().guess_rows(), 2);
        assert_eq!(session.grid().cell(2, 0).unwrap().value, Some(sym('1')));
        assert_eq!(session.grid().cell(2, 1).unwrap().value, None);
        assert_eq!(session.grid().cell(2, 2).unwrap().value, Some(sym('3')));
        assert_eq!(session.grid().cell(2, 0).unwrap().feedback, None);
    }

    #[test]
    fn win_is_signaled_when_every_column_matches() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        fill_row(&mut session, 1, "123");
        session.check().unwrap();
        let finished = reveal_all(&mut session);

        assert!(matches!(
            finished,
            RevealOutcome::Finished { row: 1, result: RowResult::Won, .. }
        ));
        assert_eq!(session.winner_row(), Some(1));
        // a winning row appends nothing
        assert_eq!(session.grid().guess_rows(), 1);
    }

    #[test]
    fn partial_rows_are_graded_but_never_progress() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        session.place_value(1, 0, sym('1')).unwrap();
        session.place_value(1, 2, sym('2')).unwrap();
        session.check().unwrap();

        assert_eq!(session.reveal_progress(), (0, 2));
        let finished = reveal_all(&mut session);

        assert!(matches!(
            finished,
            RevealOutcome::Finished { result: RowResult::Incomplete, .. }
        ));
        assert_eq!(session.grid().guess_rows(), 1);
        assert_eq!(session.grid().cell(1, 2).unwrap().feedback, Some(Present));
    }

    #[test]
    fn no_row_is_appended_at_the_cap() {
        let mut session = session(3, 3, Mode::Numeric, "123");
        for round in 0..2 {
            let row = 1 + round;
            fill_row(&mut session, row, "321");
            session.check().unwrap();
            let finished = reveal_all(&mut session);
            assert!(matches!(
                finished,
                RevealOutcome::Finished { result: RowResult::Carried, .. }
            ));
        }

        fill_row(&mut session, 3, "321");
        session.check().unwrap();
        let finished = reveal_all(&mut session);

        assert!(matches!(
            finished,
            RevealOutcome::Finished { row: 3, result: RowResult::CapReached, .. }
        ));
        assert_eq!(session.grid().guess_rows(), 3);
    }

    #[test]
    fn duplicates_are_rejected_only_when_distinct() {
        let mut relaxed = session(3, 6, Mode::Numeric, "123");
        relaxed.place_value(1, 0, sym('5')).unwrap();
        assert!(relaxed.place_value(1, 1, sym('5')).is_ok());

        let mut strict = Session::new(GameConfig::new_unchecked(3, 6, Mode::Numeric, true));
        strict.place_value(1, 0, sym('5')).unwrap();
        assert_eq!(
            strict.place_value(1, 1, sym('5')),
            Err(GameError::DuplicateValue(sym('5')))
        );
        // re-dropping onto the same cell is not a duplicate
        assert_eq!(strict.place_value(1, 0, sym('5')), Ok(PlaceOutcome::NoChange));
    }

    #[test]
    fn reconfigure_discards_the_whole_session() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        fill_row(&mut session, 1, "321");
        session.check().unwrap();
        session.reveal_next().unwrap();

        session.reconfigure(GameConfig::new_unchecked(4, 5, Mode::Alphabetic, false));

        assert!(!session.has_answer());
        assert_eq!(session.grid().guess_rows(), 1);
        assert_eq!(session.grid().columns(), 4);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.winner_row(), None);
    }

    #[test]
    fn clears_abort_an_in_flight_reveal() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        fill_row(&mut session, 1, "321");
        session.check().unwrap();
        session.reveal_next().unwrap();

        session.clear_feedback();

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.grid().cell(1, 0).unwrap().feedback, None);
        assert_eq!(session.grid().cell(1, 0).unwrap().value, Some(sym('3')));

        session.clear_values();
        assert_eq!(session.grid().last_row_with_values(), None);
        assert!(session.has_answer());
    }

    #[test]
    fn feedback_glyphs_can_be_placed_directly() {
        let mut session = session(3, 6, Mode::Numeric, "123");

        assert_eq!(session.place_feedback(1, 1, Match), Ok(PlaceOutcome::Placed));
        assert_eq!(session.place_feedback(0, 1, Match), Err(GameError::HeaderRow));
        assert_eq!(session.grid().cell(1, 1).unwrap().feedback, Some(Match));
    }

    #[test]
    fn session_snapshot_round_trips() {
        let mut session = session(3, 6, Mode::Numeric, "123");
        fill_row(&mut session, 1, "153");
        session.check().unwrap();
        session.reveal_next().unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
    }
}
