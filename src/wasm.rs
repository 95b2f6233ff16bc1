#![cfg(target_arch = "wasm32")]

use crate::{
    AnswerOutcome, CountryDataset, GameQuestion, GameResults, GameSession, MIN_QUESTIONS,
    Progress, Score, can_play, clamp_question_count, initial_question_count,
};
use leptos::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scene {
    Setup,
    Playing,
    Results,
}

fn set_body_theme(theme: &str) {
    if let Some(document) = leptos::window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme);
        }
    }
}

fn new_session(dataset: &CountryDataset, count: usize) -> Result<GameSession, String> {
    let mut rng = StdRng::from_entropy();
    GameSession::start(&mut rng, dataset, count).map_err(|error| error.to_string())
}

#[component]
fn SetupCard(available: usize, on_start: Callback<usize>) -> impl IntoView {
    let (count, set_count) = create_signal(initial_question_count(available));
    let playable = can_play(available);

    let hint = if playable {
        view! {
            <p class="hint">
                {format!("Desliza para elegir entre {} y {} países.", MIN_QUESTIONS, available)}
            </p>
        }
    } else {
        view! {
            <p class="error-body">
                {format!(
                    "No hay suficientes países disponibles ({}) para iniciar el juego. Se requieren al menos {}.",
                    available, MIN_QUESTIONS,
                )}
            </p>
        }
    };

    view! {
        <section class="setup-card">
            <h1 class="headline">"¡Bienvenid@ a GeoAventura!"</h1>
            <p class="lede">"Prepárate para un viaje divertido aprendiendo banderas y países."</p>
            <div class="count-row">
                <label for="question-count" class="label">"Número de países para la partida:"</label>
                <span class="value">{move || count.get().to_string()}</span>
            </div>
            <input
                id="question-count"
                type="range"
                min=MIN_QUESTIONS.to_string()
                max=available.to_string()
                step="1"
                disabled=!playable
                prop:value=move || count.get().to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<usize>() {
                        set_count.set(clamp_question_count(value, available));
                    }
                }
            />
            {hint}
            <button class="primary" disabled=!playable on:click=move |_| on_start.call(count.get())>
                "Empezar Juego"
            </button>
        </section>
    }
}

#[component]
fn QuestionCard(
    question: GameQuestion,
    number: usize,
    total: usize,
    score: Score,
    outcome: Option<AnswerOutcome>,
    is_last: bool,
    on_answer: Callback<String>,
    on_next: Callback<()>,
) -> impl IntoView {
    let answered = outcome.is_some();
    let progress = format!("width: {:.0}%", number as f64 / total as f64 * 100.0);
    let alt = format!("Bandera de {}", question.country_to_guess.name_en);

    let options = question
        .options
        .iter()
        .cloned()
        .map(|option| {
            let status = match &outcome {
                Some(_) if question.is_correct(&option) => "option correct",
                Some(answer) if answer.selected == option => "option wrong",
                _ => "option",
            };
            let pressed = outcome
                .as_ref()
                .map(|answer| answer.selected == option)
                .unwrap_or(false);
            let label = option.clone();

            view! {
                <button
                    class=status
                    disabled=answered
                    aria-pressed=pressed.to_string()
                    on:click=move |_| on_answer.call(option.clone())
                >
                    <span class="option-body">{label}</span>
                </button>
            }
        })
        .collect_view();

    let feedback = outcome.map(|answer| {
        let (class, message) = if answer.is_correct {
            ("feedback correct", "¡Correcto!".to_string())
        } else {
            (
                "feedback wrong",
                format!("Incorrecto. La respuesta era: {}", answer.correct_answer),
            )
        };

        view! {
            <div class=class>
                <p class="feedback-message">{message}</p>
                <button class="primary" on:click=move |_| on_next.call(())>
                    {if is_last { "Ver Resultados" } else { "Siguiente Pregunta" }}
                </button>
            </div>
        }
    });

    view! {
        <section class="quiz-card">
            <header class="quiz-header">
                <p class="eyebrow">{format!("Pregunta {}/{}", number, total)}</p>
                <div class="score">
                    <p class="score-correct">{format!("Correctas: {}", score.correct)}</p>
                    <p class="score-incorrect">{format!("Incorrectas: {}", score.incorrect)}</p>
                </div>
                <div class="progress"><div class="progress-bar" style=progress></div></div>
            </header>
            <p class="prompt">"¿A qué país pertenece esta bandera?"</p>
            <img class="flag" src=question.flag_url.clone() alt=alt />
            <div class="options-grid">{options}</div>
            {feedback}
        </section>
    }
}

#[component]
fn ResultsCard(results: GameResults, on_play_again: Callback<()>) -> impl IntoView {
    view! {
        <section class="results-card">
            <h1 class="headline">"¡Juego Terminado!"</h1>
            <p class="lede">{results.grade().message()}</p>
            <p>{format!("Respuestas Correctas: {}", results.correct)}</p>
            <p>{format!("Respuestas Incorrectas: {}", results.incorrect)}</p>
            <p>{format!("Puntuación Final: {}%", results.percentage())}</p>
            <button class="primary" on:click=move |_| on_play_again.call(())>
                "Jugar de Nuevo"
            </button>
        </section>
    }
}

#[component]
fn App() -> impl IntoView {
    let dataset = store_value(CountryDataset::builtin());
    let available = dataset.with_value(|dataset| dataset.len());
    let (scene, set_scene) = create_signal(Scene::Setup);
    let (error, set_error) = create_signal::<Option<String>>(None);
    let session = create_rw_signal::<Option<GameSession>>(None);

    set_body_theme("dark");

    let start_game = Callback::new(move |count: usize| {
        match dataset.with_value(|dataset| new_session(dataset, count)) {
            Ok(started) => {
                set_error.set(None);
                session.set(Some(started));
                set_scene.set(Scene::Playing);
            }
            Err(message) => {
                logging::error!("could not start game: {message}");
                session.set(None);
                set_error.set(Some(format!(
                    "No se pudieron generar preguntas. Intenta con más países. ({message})"
                )));
                set_scene.set(Scene::Setup);
            }
        }
    });

    let answer = Callback::new(move |option: String| {
        session.update(|state| {
            if let Some(state) = state.as_mut() {
                if let Err(error) = state.answer(&option) {
                    logging::warn!("ignored answer: {error}");
                }
            }
        });
    });

    let next = Callback::new(move |_: ()| {
        let progress = session
            .try_update(|state| state.as_mut().map(GameSession::advance))
            .flatten();

        match progress {
            Some(Ok(Progress::Finished)) => set_scene.set(Scene::Results),
            Some(Ok(Progress::Next(_))) | None => {}
            Some(Err(error)) => logging::warn!("could not advance: {error}"),
        }
    });

    let play_again = Callback::new(move |_: ()| {
        session.set(None);
        set_scene.set(Scene::Setup);
    });

    let question_view = move || {
        session.with(|state| {
            state.as_ref().map(|state| {
                view! {
                    <QuestionCard
                        question=state.current_question().clone()
                        number=state.question_number()
                        total=state.total_questions()
                        score=state.score()
                        outcome=state.last_answer().cloned()
                        is_last=state.is_last_question()
                        on_answer=answer
                        on_next=next
                    />
                }
            })
        })
    };

    let results_view = move || {
        session.with(|state| {
            state.as_ref().map(|state| {
                view! { <ResultsCard results=state.results() on_play_again=play_again /> }
            })
        })
    };

    view! {
        <main class="page">
            {move || match scene.get() {
                Scene::Setup => view! {
                    <SetupCard available=available on_start=start_game />
                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <section class="error-card">
                                        <p class="eyebrow">"Error"</p>
                                        <p class="error-body">{message}</p>
                                    </section>
                                }
                            })
                    }}
                }
                .into_view(),
                Scene::Playing => question_view.into_view(),
                Scene::Results => results_view.into_view(),
            }}
        </main>
    }
}

/// Mounts the quiz application into the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    crate::console::init();
    mount_to_body(|| view! { <App /> });
}
