use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser};
use flagquiz::{
    ConfigError, CountryDataset, DatasetLoadError, GameSession, Progress, QuizConfig,
    SessionError, generate_game_questions,
};

#[derive(Parser)]
#[command(version, about = "Guess the country from its flag", long_about = None)]
enum Command {
    /// Play a game in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Print freshly generated questions as JSON.
    Generate {
        #[command(flatten)]
        game: GameArgs,
    },
    /// List the countries in the dataset.
    Countries {
        /// Path to a JSON country dataset. By default, the bundled dataset is used.
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GameArgs {
    /// Number of questions. Defaults to 10, clamped to the dataset size.
    #[arg(long, short = 'n')]
    questions: Option<usize>,
    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
    /// Path to a JSON country dataset. By default, the bundled dataset is used.
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Path to a TOML config file. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dataset(#[from] DatasetLoadError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("could not encode questions: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GameArgs {
    fn resolve(self) -> Result<QuizConfig, ConfigError> {
        let file = match &self.config {
            Some(path) => QuizConfig::from_path(path)?,
            None => QuizConfig::default(),
        };

        Ok(file.merge(QuizConfig {
            questions: self.questions,
            seed: self.seed,
            dataset: self.dataset,
        }))
    }
}

pub fn entrypoint() -> Result<(), CliError> {
    match Command::parse() {
        Command::Play { game } => {
            let config = game.resolve()?;
            let dataset = config.load_dataset()?;
            let count = config.question_count(dataset.len());
            let session = GameSession::start(&mut config.rng(), &dataset, count)?;

            let stdin = io::stdin();
            play(session, stdin.lock(), io::stdout())
        }
        Command::Generate { game } => {
            let config = game.resolve()?;
            let dataset = config.load_dataset()?;
            let count = config.question_count(dataset.len());
            let questions = generate_game_questions(&mut config.rng(), dataset.countries(), count)
                .map_err(SessionError::from)?;

            println!("{}", serde_json::to_string_pretty(&questions)?);
            Ok(())
        }
        Command::Countries { dataset } => {
            let dataset = match dataset {
                Some(path) => CountryDataset::from_path(path)?,
                None => CountryDataset::builtin(),
            };

            for country in dataset.countries() {
                println!("{}\t{}\t{}", country.code, country.name_es, country.name_en);
            }
            Ok(())
        }
    }
}

/// Runs a game reading choices from `input`, one per line.
///
/// A choice is either the option number (1-based) or the option text.
/// Unrecognised input asks again. End of input abandons the game and still
/// prints the score so far.
fn play<R: BufRead, W: Write>(
    mut session: GameSession,
    mut input: R,
    mut output: W,
) -> Result<(), CliError> {
    loop {
        let question = session.current_question().clone();
        writeln!(
            output,
            "\nPregunta {}/{}: ¿A qué país pertenece esta bandera?",
            session.question_number(),
            session.total_questions()
        )?;
        writeln!(output, "{}", question.flag_url)?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", index + 1, option)?;
        }

        let outcome = loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return print_results(&session, &mut output);
            }

            let choice = line.trim();
            let selected = match choice.parse::<usize>() {
                Ok(number) if (1..=question.options.len()).contains(&number) => {
                    question.options[number - 1].clone()
                }
                _ => choice.to_string(),
            };

            match session.answer(&selected) {
                Ok(outcome) => break outcome,
                Err(SessionError::UnknownOption { .. }) => {
                    writeln!(output, "Elige un número entre 1 y {}.", question.options.len())?;
                }
                Err(error) => return Err(error.into()),
            }
        };

        if outcome.is_correct {
            writeln!(output, "¡Correcto!")?;
        } else {
            writeln!(
                output,
                "Incorrecto. La respuesta era: {}",
                outcome.correct_answer
            )?;
        }

        if session.advance()? == Progress::Finished {
            return print_results(&session, &mut output);
        }
    }
}

fn print_results<W: Write>(session: &GameSession, output: &mut W) -> Result<(), CliError> {
    let results = session.results();
    writeln!(output, "\n¡Juego Terminado!")?;
    writeln!(output, "{}", results.grade().message())?;
    writeln!(output, "Respuestas Correctas: {}", results.correct)?;
    writeln!(output, "Respuestas Incorrectas: {}", results.incorrect)?;
    writeln!(output, "Puntuación Final: {}%", results.percentage())?;
    Ok(())
}
