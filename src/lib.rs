pub mod config;
pub mod console;
pub mod country;
pub mod dataset;
pub mod quiz;
pub mod results;
pub mod session;
pub mod setup;
pub mod shuffle;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{ConfigError, QuizConfig};
pub use country::{Country, FLAG_IMAGE_BASE_URL, flag_url};
pub use dataset::{CountryDataset, DatasetError, DatasetLoadError};
pub use quiz::{DISTRACTOR_COUNT, GameQuestion, OPTION_COUNT, QuizError, generate_game_questions};
pub use results::{GameResults, Grade};
pub use session::{AnswerOutcome, GameSession, Progress, Score, SessionError};
pub use setup::{
    DEFAULT_QUESTIONS, MIN_QUESTIONS, SetupError, can_play, clamp_question_count,
    initial_question_count, validate_question_count,
};
pub use shuffle::shuffle_array;
