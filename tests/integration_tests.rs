// Integration tests for the wordle-engine crate
// These tests verify that matcher, engine, strategies and the game driver work together

use proptest::prelude::*;
use wordle_engine::{
    CandidateEngine, EngineState, FeedbackResult, FrequencyStrategy, Secret, Strategy as _,
    StrategyKind, Verdict, Vocabulary, has_distinct_letters, load_wordbank_from_file,
    load_wordbank_from_str, match_word, play_game, run_benchmark,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_trace_against_crate_scenario() {
    // Vocabulary from the classic example, answer CRATE, first guess TRACE
    let vocabulary = Vocabulary::single(&["crane", "trace", "slate", "crate", "grate"]).unwrap();
    let secret = Secret::fixed("crate", &vocabulary).unwrap();
    let feedback = secret.guess("trace", &vocabulary).unwrap();

    // t and c are swapped, r a e line up
    assert_eq!(feedback.pattern(), "YGGYG");

    let mut engine = CandidateEngine::new(vocabulary);
    engine.eliminate(&feedback);
    assert_eq!(engine.possible_answers(), &["crate"]);
    assert_eq!(engine.state(), EngineState::Solved);
    assert_eq!(engine.best_guess(false, false), Some("crate"));
}

#[test]
fn test_lulls_against_allot() {
    let feedback = match_word("lulls", "allot").unwrap();
    let l_verdicts: Vec<Verdict> = feedback
        .iter()
        .filter(|&(c, _)| c == 'l')
        .map(|(_, v)| v)
        .collect();
    assert_eq!(
        l_verdicts,
        vec![Verdict::Present, Verdict::Correct, Verdict::Absent]
    );
}

#[test]
fn test_empty_result_scenario() {
    // Feedback that no word in the vocabulary can produce
    let vocabulary = Vocabulary::single(&["crane", "slate", "trace"]).unwrap();
    let mut engine = CandidateEngine::new(vocabulary);
    engine.eliminate(&FeedbackResult::parse("crane", "GGGGX").unwrap());

    assert_eq!(engine.size(), 0);
    assert_eq!(engine.state(), EngineState::Exhausted);
    assert_eq!(engine.best_guess(true, false), None);
    assert_eq!(engine.best_guess(false, false), None);
    assert_eq!(engine.best_guess(true, true), None);
}

#[test]
fn test_repeated_letter_candidates_are_kept_apart() {
    let wordbank = words(&["speed", "creep", "sleep", "steep", "sweep"]);
    let vocabulary = Vocabulary::single(wordbank.as_slice()).unwrap();
    let secret = Secret::fixed("creep", &vocabulary).unwrap();
    let feedback = secret.guess("speed", &vocabulary).unwrap();

    let mut engine = CandidateEngine::new(vocabulary);
    engine.eliminate(&feedback);

    assert!(engine.possible_answers().contains(&"creep".to_string()));
    assert!(engine.size() < wordbank.len());
    for candidate in engine.possible_answers() {
        assert_eq!(match_word("speed", candidate).unwrap(), feedback);
    }
}

#[test]
fn test_externally_reported_feedback_narrows() {
    // A runner relaying feedback from a real game
    let vocabulary = Vocabulary::single(&["crane", "frame", "blame", "flame", "shame"]).unwrap();
    let mut engine = CandidateEngine::new(vocabulary);
    engine.eliminate(&FeedbackResult::parse("CRANE", "xggxg").unwrap());
    assert_eq!(engine.possible_answers(), &["frame"]);
}

#[test]
fn test_every_strategy_solves_every_answer() {
    let vocabulary = Vocabulary::embedded().unwrap();
    for kind in [
        StrategyKind::Frequency,
        StrategyKind::Guessable,
        StrategyKind::Distinct,
        StrategyKind::Probability,
    ] {
        let mut strategy = kind.build(vocabulary.clone(), 5);
        for answer in vocabulary.possible_answers() {
            let secret = Secret::fixed(answer, &vocabulary).unwrap();
            // no strategy repeats a guess, so a generous bound always suffices
            let outcome = play_game(strategy.as_mut(), secret, &vocabulary, 100);
            assert!(outcome.is_solved(), "{} failed on {}", strategy.name(), answer);
            assert_eq!(outcome.answer, *answer);
        }
    }
}

#[test]
fn test_strategies_are_independent_instances() {
    let vocabulary = Vocabulary::embedded().unwrap();
    let mut first = FrequencyStrategy::new(vocabulary.clone());
    let mut second = FrequencyStrategy::new(vocabulary.clone());

    let opening = first.next_guess(None).unwrap();
    assert_eq!(second.next_guess(None).as_deref(), Some(opening.as_str()));

    let feedback = match_word(&opening, "zebra").unwrap();
    first.next_guess(Some(&feedback));
    assert!(first.engine().size() < second.engine().size());
    assert_eq!(second.engine().size(), vocabulary.possible_answers().len());
}

#[test]
fn test_benchmark_over_embedded_wordbank() {
    let vocabulary = Vocabulary::embedded().unwrap();
    let report = run_benchmark(StrategyKind::Frequency, &vocabulary, 25, 1, 100);
    assert_eq!(report.games, 25);
    assert_eq!(report.solved, 25);
    assert!(report.average_guesses().unwrap() >= 1.0);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    // Load custom word lists from files -> play a game
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let guesses_path = temp_dir.join("wordle_engine_test_guesses.txt");
    let answers_path = temp_dir.join("wordle_engine_test_answers.txt");
    {
        let mut file = File::create(&guesses_path).unwrap();
        writeln!(file, "APPLE\ngrape\nlemon\nmelon\npeach\nxylyl").unwrap();
        let mut file = File::create(&answers_path).unwrap();
        writeln!(file, "apple\ngrape\nlemon\nmelon\npeach").unwrap();
    }

    let guessable = load_wordbank_from_file(&guesses_path).unwrap();
    let answers = load_wordbank_from_file(&answers_path).unwrap();
    let vocabulary = Vocabulary::new(guessable.as_slice(), answers.as_slice()).unwrap();
    assert_eq!(vocabulary.all_guessable().len(), 6);
    assert_eq!(vocabulary.possible_answers().len(), 5);

    let secret = Secret::fixed("melon", &vocabulary).unwrap();
    let mut strategy = FrequencyStrategy::new(vocabulary.clone());
    let outcome = play_game(&mut strategy, secret, &vocabulary, 6);
    assert!(outcome.is_solved());

    std::fs::remove_file(&guesses_path).unwrap();
    std::fs::remove_file(&answers_path).unwrap();
}

#[test]
fn test_wordbank_loading_variations() {
    let wordbank1 = load_wordbank_from_str("crane\nslate\nraise");
    let wordbank2 = load_wordbank_from_str("CRANE\nSLATE\nRAISE");
    let wordbank3 = load_wordbank_from_str("  crane  \n  slate  \n  raise  ");
    assert_eq!(wordbank1, wordbank2);
    assert_eq!(wordbank2, wordbank3);
    assert_eq!(wordbank1.len(), 3);
}

fn word() -> impl Strategy<Value = String> {
    // small alphabet so repeated letters show up often
    "[a-e]{5}"
}

proptest! {
    #[test]
    fn prop_correct_exactly_where_positions_align(guess in word(), secret in word()) {
        let feedback = match_word(&guess, &secret).unwrap();
        for ((g, s), verdict) in guess.chars().zip(secret.chars()).zip(feedback.verdicts()) {
            prop_assert_eq!(g == s, *verdict == Verdict::Correct);
        }
    }

    #[test]
    fn prop_marked_copies_never_exceed_secret_copies(guess in word(), secret in word()) {
        let feedback = match_word(&guess, &secret).unwrap();
        for letter in guess.chars() {
            let marked = feedback
                .iter()
                .filter(|&(c, v)| c == letter && v != Verdict::Absent)
                .count();
            let in_secret = secret.chars().filter(|&c| c == letter).count();
            let in_guess = guess.chars().filter(|&c| c == letter).count();
            prop_assert_eq!(marked, in_secret.min(in_guess));
        }
    }

    #[test]
    fn prop_candidate_is_consistent_with_its_own_feedback(guess in word(), candidate in word()) {
        let feedback = match_word(&guess, &candidate).unwrap();
        prop_assert!(CandidateEngine::is_consistent(&candidate, &feedback));
    }

    #[test]
    fn prop_eliminate_is_monotonic_and_idempotent(
        list in prop::collection::vec(word(), 1..30),
        guess in word(),
        secret_index in any::<prop::sample::Index>(),
    ) {
        let vocabulary = Vocabulary::single(list.as_slice()).unwrap();
        let secret = secret_index.get(vocabulary.possible_answers()).clone();
        let feedback = match_word(&guess, &secret).unwrap();
        let mut engine = CandidateEngine::new(vocabulary);

        let before = engine.size();
        engine.eliminate(&feedback);
        let once = engine.possible_answers().to_vec();
        prop_assert!(once.len() <= before);
        prop_assert!(once.contains(&secret));

        engine.eliminate(&feedback);
        prop_assert_eq!(engine.possible_answers(), once.as_slice());
    }

    #[test]
    fn prop_best_guess_never_panics(
        list in prop::collection::vec(word(), 1..20),
        guess in word(),
        pattern in "[GYX]{5}",
    ) {
        let vocabulary = Vocabulary::single(list.as_slice()).unwrap();
        let mut engine = CandidateEngine::new(vocabulary);
        engine.eliminate(&FeedbackResult::parse(&guess, &pattern).unwrap());
        for from_guessable in [true, false] {
            for distinct in [true, false] {
                let best = engine.best_guess(from_guessable, distinct);
                if engine.size() == 0 {
                    prop_assert!(best.is_none());
                }
                if let Some(word) = best {
                    prop_assert!(!distinct || has_distinct_letters(word));
                }
            }
        }
    }
}
