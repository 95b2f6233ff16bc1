use rand::Rng;

use crate::dataset::CountryDataset;
use crate::quiz::{GameQuestion, QuizError, generate_game_questions};
use crate::results::GameResults;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Score {
    pub correct: usize,
    pub incorrect: usize,
}

/// What happened when the player picked an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: String,
    pub is_correct: bool,
    pub correct_answer: String,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The session moved on to the given 1-based question number.
    Next(usize),
    Finished,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no questions could be generated")]
    NoQuestions,
    #[error("could not generate questions: {0}")]
    Generation(#[from] QuizError),
    #[error("the current question has already been answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("{option:?} is not one of the offered options")]
    UnknownOption { option: String },
    #[error("the game is already finished")]
    AlreadyFinished,
}

/// State of a single game: the questions, where the player is, and the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    questions: Vec<GameQuestion>,
    current: usize,
    score: Score,
    answer: Option<AnswerOutcome>,
    finished: bool,
}

impl GameSession {
    pub fn new(questions: Vec<GameQuestion>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        log::info!("starting game with {} questions", questions.len());

        Ok(Self {
            questions,
            current: 0,
            score: Score::default(),
            answer: None,
            finished: false,
        })
    }

    /// Generates fresh questions from `dataset` and starts a game with them.
    pub fn start<R: Rng + ?Sized>(
        rng: &mut R,
        dataset: &CountryDataset,
        num_questions: usize,
    ) -> Result<Self, SessionError> {
        let questions = generate_game_questions(rng, dataset.countries(), num_questions)?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[GameQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> &GameQuestion {
        &self.questions[self.current]
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn progress_percent(&self) -> f64 {
        self.question_number() as f64 / self.total_questions() as f64 * 100.0
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn last_answer(&self) -> Option<&AnswerOutcome> {
        self.answer.as_ref()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Records the player's choice for the current question.
    pub fn answer(&mut self, option: &str) -> Result<AnswerOutcome, SessionError> {
        if self.finished {
            return Err(SessionError::AlreadyFinished);
        }
        if self.answer.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }

        let question = &self.questions[self.current];
        if !question.options.iter().any(|candidate| candidate == option) {
            log::warn!("rejected answer {option:?} for question {}", self.question_number());
            return Err(SessionError::UnknownOption {
                option: option.to_string(),
            });
        }

        let outcome = AnswerOutcome {
            selected: option.to_string(),
            is_correct: question.is_correct(option),
            correct_answer: question.correct_answer().to_string(),
        };

        if outcome.is_correct {
            self.score.correct += 1;
        } else {
            self.score.incorrect += 1;
        }

        log::debug!(
            "question {} answered {}",
            self.question_number(),
            if outcome.is_correct { "correctly" } else { "incorrectly" }
        );

        self.answer = Some(outcome.clone());
        Ok(outcome)
    }

    /// Moves past the answered current question.
    pub fn advance(&mut self) -> Result<Progress, SessionError> {
        if self.finished {
            return Err(SessionError::AlreadyFinished);
        }
        if self.answer.is_none() {
            return Err(SessionError::NotAnswered);
        }

        if self.is_last_question() {
            self.finished = true;
            log::info!("game finished: {}", self.results());
            return Ok(Progress::Finished);
        }

        self.answer = None;
        self.current += 1;
        Ok(Progress::Next(self.question_number()))
    }

    pub fn results(&self) -> GameResults {
        GameResults {
            correct: self.score.correct,
            incorrect: self.score.incorrect,
            total_questions: self.questions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_dataset() -> CountryDataset {
        CountryDataset::new(vec![
            Country::new("ES", "España", "Spain"),
            Country::new("FR", "Francia", "France"),
            Country::new("DE", "Alemania", "Germany"),
            Country::new("IT", "Italia", "Italy"),
            Country::new("PT", "Portugal", "Portugal"),
        ])
        .expect("dataset should be valid")
    }

    fn started(num_questions: usize) -> GameSession {
        let mut rng = StdRng::seed_from_u64(17);
        GameSession::start(&mut rng, &sample_dataset(), num_questions)
            .expect("session should start")
    }

    fn wrong_option(question: &GameQuestion) -> String {
        question
            .options
            .iter()
            .find(|option| !question.is_correct(option))
            .cloned()
            .expect("question should have distractors")
    }

    #[test]
    fn rejects_empty_question_list() {
        assert_eq!(GameSession::new(Vec::new()), Err(SessionError::NoQuestions));
    }

    #[test]
    fn surfaces_generation_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        let error = GameSession::start(&mut rng, &sample_dataset(), 0)
            .expect_err("zero questions should fail");

        assert_eq!(error, SessionError::Generation(QuizError::InvalidQuestionCount));
    }

    #[test]
    fn correct_answer_increments_score() {
        let mut session = started(3);
        let correct = session.current_question().correct_answer().to_string();

        let outcome = session.answer(&correct).expect("answer should be accepted");

        assert!(outcome.is_correct);
        assert_eq!(outcome.correct_answer, correct);
        assert_eq!(session.score(), Score { correct: 1, incorrect: 0 });
    }

    #[test]
    fn wrong_answer_reports_correct_one() {
        let mut session = started(3);
        let wrong = wrong_option(session.current_question());

        let outcome = session.answer(&wrong).expect("answer should be accepted");

        assert!(!outcome.is_correct);
        assert_eq!(outcome.correct_answer, session.current_question().correct_answer());
        assert_eq!(session.score(), Score { correct: 0, incorrect: 1 });
    }

    #[test]
    fn only_one_answer_per_question() {
        let mut session = started(3);
        let correct = session.current_question().correct_answer().to_string();
        session.answer(&correct).expect("first answer should be accepted");

        assert_eq!(session.answer(&correct), Err(SessionError::AlreadyAnswered));
        assert_eq!(session.score().correct, 1);
    }

    #[test]
    fn unknown_options_are_rejected() {
        let mut session = started(3);

        assert_eq!(
            session.answer("Atlántida"),
            Err(SessionError::UnknownOption {
                option: "Atlántida".to_string()
            })
        );
        assert_eq!(session.score(), Score::default());
    }

    #[test]
    fn cannot_advance_without_answering() {
        let mut session = started(3);

        assert_eq!(session.advance(), Err(SessionError::NotAnswered));
    }

    #[test]
    fn plays_through_to_results() {
        let mut session = started(5);
        assert_eq!(session.total_questions(), 5);

        for number in 1..=5 {
            assert_eq!(session.question_number(), number);
            let option = if number % 2 == 0 {
                wrong_option(session.current_question())
            } else {
                session.current_question().correct_answer().to_string()
            };
            session.answer(&option).expect("answer should be accepted");

            let progress = session.advance().expect("advance should succeed");
            if number < 5 {
                assert_eq!(progress, Progress::Next(number + 1));
                assert!(session.last_answer().is_none());
            } else {
                assert_eq!(progress, Progress::Finished);
            }
        }

        assert!(session.is_finished());
        assert_eq!(session.advance(), Err(SessionError::AlreadyFinished));

        let results = session.results();
        assert_eq!(results.correct, 3);
        assert_eq!(results.incorrect, 2);
        assert_eq!(results.percentage(), 60);
    }

    #[test]
    fn progress_tracks_question_number() {
        let mut session = started(4);
        assert_eq!(session.progress_percent(), 25.0);

        let correct = session.current_question().correct_answer().to_string();
        session.answer(&correct).expect("answer should be accepted");
        session.advance().expect("advance should succeed");

        assert_eq!(session.progress_percent(), 50.0);
        assert!(!session.is_last_question());
    }
}
