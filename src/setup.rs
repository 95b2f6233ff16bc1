//! Rules for choosing how many questions a game has.

/// Smallest game that can be started.
pub const MIN_QUESTIONS: usize = 5;
/// Question count suggested before the player picks one.
pub const DEFAULT_QUESTIONS: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("not enough countries available ({available}); at least {required} are required")]
    NotEnoughCountries { available: usize, required: usize },
    #[error("question count {requested} is outside the allowed range {min}..={max}")]
    OutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
}

pub fn can_play(available: usize) -> bool {
    available >= MIN_QUESTIONS
}

/// Question count to preselect when `available` countries exist.
pub fn initial_question_count(available: usize) -> usize {
    clamp_question_count(DEFAULT_QUESTIONS, available)
}

/// Brings `requested` into `MIN_QUESTIONS..=available`.
///
/// When the dataset is too small to play, the result falls back to the number
/// of available countries (but never below one) so it can still be displayed.
pub fn clamp_question_count(requested: usize, available: usize) -> usize {
    if !can_play(available) {
        return available.max(1);
    }

    requested.min(available).max(MIN_QUESTIONS)
}

pub fn validate_question_count(requested: usize, available: usize) -> Result<usize, SetupError> {
    if !can_play(available) {
        return Err(SetupError::NotEnoughCountries {
            available,
            required: MIN_QUESTIONS,
        });
    }

    if !(MIN_QUESTIONS..=available).contains(&requested) {
        return Err(SetupError::OutOfRange {
            requested,
            min: MIN_QUESTIONS,
            max: available,
        });
    }

    Ok(requested)
}
