use flagquiz::{
    CountryDataset, GameSession, Grade, Progress, QuizConfig, initial_question_count,
};

#[test]
fn full_game_with_bundled_dataset() {
    let dataset = CountryDataset::builtin();
    let config = QuizConfig::from_toml_str("seed = 7\n", "inline").expect("config should parse");
    let count = config.question_count(dataset.len());
    assert_eq!(count, initial_question_count(dataset.len()));

    let mut session =
        GameSession::start(&mut config.rng(), &dataset, count).expect("session should start");

    loop {
        let answer = session.current_question().correct_answer().to_string();
        let outcome = session.answer(&answer).expect("answer should be accepted");
        assert!(outcome.is_correct);

        if session.advance().expect("advance should succeed") == Progress::Finished {
            break;
        }
    }

    let results = session.results();
    assert_eq!(results.correct, count);
    assert_eq!(results.incorrect, 0);
    assert_eq!(results.percentage(), 100);
    assert_eq!(results.grade(), Grade::Excellent);
}

#[test]
fn seeded_config_reproduces_a_game() {
    let dataset = CountryDataset::builtin();
    let config = QuizConfig {
        questions: Some(6),
        seed: Some(123),
        dataset: None,
    };

    let first = GameSession::start(&mut config.rng(), &dataset, 6).expect("session should start");
    let second = GameSession::start(&mut config.rng(), &dataset, 6).expect("session should start");

    assert_eq!(first.questions(), second.questions());
}
