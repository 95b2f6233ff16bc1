use rand::Rng;

use crate::country::Country;
use crate::shuffle::shuffle_array;

/// Number of answer options shown with each flag.
pub const OPTION_COUNT: usize = 4;
/// Number of wrong answers mixed in with the correct one.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// A single generated quiz question.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameQuestion {
    /// The country whose flag is shown and whose name is the correct answer.
    pub country_to_guess: Country,
    /// Spanish country names in display order. Always `OPTION_COUNT` entries.
    pub options: Vec<String>,
    pub flag_url: String,
}

impl GameQuestion {
    pub fn correct_answer(&self) -> &str {
        &self.country_to_guess.name_es
    }

    pub fn is_correct(&self, option: &str) -> bool {
        option == self.country_to_guess.name_es
    }

    /// Index in `options` holding the correct answer, or `None` when the
    /// options do not contain it (only possible for hand-built questions).
    pub fn correct_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| self.is_correct(option))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("requires at least {required} countries but only {available} provided")]
    NotEnoughCountries { required: usize, available: usize },
    #[error("question count must be at least 1")]
    InvalidQuestionCount,
}

/// Generates the questions for one game.
///
/// The dataset is shuffled and the first `num_questions` countries (or all of
/// them, when fewer are available) become the countries to guess, in shuffled
/// order. Each question mixes the correct name with three names drawn at
/// random from the other countries. Passing a seeded random number generator
/// makes the output reproducible.
///
/// Country codes and Spanish names are expected to be unique across
/// `countries`; [`CountryDataset`](crate::CountryDataset) enforces this.
///
/// # Errors
/// * Returns [`QuizError::InvalidQuestionCount`] if `num_questions` is zero.
/// * Returns [`QuizError::NotEnoughCountries`] if fewer than [`OPTION_COUNT`]
///   countries are provided, since no question could carry a full option set.
pub fn generate_game_questions<R: Rng + ?Sized>(
    rng: &mut R,
    countries: &[Country],
    num_questions: usize,
) -> Result<Vec<GameQuestion>, QuizError> {
    if num_questions == 0 {
        return Err(QuizError::InvalidQuestionCount);
    }

    if countries.len() < OPTION_COUNT {
        return Err(QuizError::NotEnoughCountries {
            required: OPTION_COUNT,
            available: countries.len(),
        });
    }

    let mut selected = shuffle_array(rng, countries);
    selected.truncate(num_questions);

    let questions: Vec<GameQuestion> = selected
        .into_iter()
        .map(|country| build_question(rng, countries, country))
        .collect();

    log::debug!(
        "generated {} questions ({} requested, {} countries available)",
        questions.len(),
        num_questions,
        countries.len()
    );

    Ok(questions)
}

fn build_question<R: Rng + ?Sized>(
    rng: &mut R,
    countries: &[Country],
    country_to_guess: Country,
) -> GameQuestion {
    let pool: Vec<&Country> = countries
        .iter()
        .filter(|candidate| candidate.code != country_to_guess.code)
        .collect();

    let mut options: Vec<String> = shuffle_array(rng, &pool)
        .into_iter()
        .take(DISTRACTOR_COUNT)
        .map(|candidate| candidate.name_es.clone())
        .collect();
    options.push(country_to_guess.name_es.clone());

    GameQuestion {
        options: shuffle_array(rng, &options),
        flag_url: country_to_guess.flag_url(),
        country_to_guess,
    }
}
