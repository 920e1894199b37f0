use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// The facilitator's hidden answer, read-only once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    symbols: SmallVec<[Symbol; MAX_COLUMNS as usize]>,
}

impl Answer {
    /// Parses facilitator input against the active configuration: exact
    /// column count, every character drawn from the mode's alphabet.
    /// Letters are accepted case-insensitively.
    pub fn parse(input: &str, config: &GameConfig) -> Result<Self> {
        let mut symbols = SmallVec::new();
        for c in input.trim().chars() {
            let symbol = Symbol::new(c).ok_or(GameError::AnswerSymbol)?;
            if !config.mode.accepts(symbol) {
                return Err(GameError::AnswerSymbol);
            }
            symbols.push(symbol);
        }
        if symbols.len() != config.columns as usize {
            return Err(GameError::AnswerLength(config.columns));
        }
        Ok(Self { symbols })
    }

    pub fn len(&self) -> Col {
        self.symbols.len() as Col
    }

    pub fn contains(&self, value: Symbol) -> bool {
        self.symbols.contains(&value)
    }

    /// Grades a single column.
    ///
    /// Repeated guess values are graded independently: every occurrence of
    /// an answer value reports `Present`, with no per-value budget.
    pub fn grade(&self, col: Col, guess: Symbol) -> Feedback {
        use Feedback::*;

        if self.symbols.get(col as usize) == Some(&guess) {
            Match
        } else if self.contains(guess) {
            Present
        } else {
            Absent
        }
    }

    /// Grades a fully-filled guess row, one feedback per column.
    pub fn grade_row(&self, guess: &[Symbol]) -> SmallVec<[Feedback; MAX_COLUMNS as usize]> {
        guess
            .iter()
            .enumerate()
            .map(|(col, &value)| self.grade(col as Col, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::*;

    fn config(columns: Col, mode: Mode) -> GameConfig {
        GameConfig::new_unchecked(columns, 6, mode, false)
    }

    fn answer(input: &str, columns: Col, mode: Mode) -> Answer {
        Answer::parse(input, &config(columns, mode)).unwrap()
    }

    fn syms(input: &str) -> Vec<Symbol> {
        input.chars().map(|c| Symbol::new(c).unwrap()).collect()
    }

    #[test]
    fn parse_normalizes_and_validates() {
        let answer = answer("happy", 5, Mode::Alphabetic);
        assert_eq!(answer.len(), 5);
        assert!(answer.contains(Symbol::new('H').unwrap()));

        let config = config(5, Mode::Alphabetic);
        assert_eq!(
            Answer::parse("HAPP", &config),
            Err(GameError::AnswerLength(5))
        );
        assert_eq!(Answer::parse("HAPP7", &config), Err(GameError::AnswerSymbol));
        assert_eq!(Answer::parse("HA PY", &config), Err(GameError::AnswerSymbol));
    }

    #[test]
    fn numeric_answers_reject_letters() {
        let config = config(3, Mode::Numeric);
        assert!(Answer::parse("123", &config).is_ok());
        assert_eq!(Answer::parse("12A", &config), Err(GameError::AnswerSymbol));
    }

    #[test]
    fn match_iff_equal_at_position() {
        let answer = answer("123", 3, Mode::Numeric);

        assert_eq!(answer.grade_row(&syms("321")).as_slice(), [Present, Match, Present]);
        assert_eq!(answer.grade_row(&syms("123")).as_slice(), [Match, Match, Match]);
        assert_eq!(answer.grade_row(&syms("456")).as_slice(), [Absent, Absent, Absent]);
    }

    #[test]
    fn grading_is_unbudgeted_for_repeats() {
        // H-A-P match; neither E occurs in the answer.
        let happy = answer("HAPPY", 5, Mode::Alphabetic);
        assert_eq!(
            happy.grade_row(&syms("HAPEE")).as_slice(),
            [Match, Match, Match, Absent, Absent]
        );

        // The single A in the answer is reported for every repeated A.
        let abcde = answer("ABCDE", 5, Mode::Alphabetic);
        assert_eq!(
            abcde.grade_row(&syms("AAAAA")).as_slice(),
            [Match, Present, Present, Present, Present]
        );
    }
}
