//! Guessing policies built on top of [`CandidateEngine`].
//!
//! Every strategy owns its own engine and feedback history. A game calls
//! [`Strategy::next_guess`] with the feedback for the previous guess (none on
//! the first round) and [`Strategy::reset`] between games.

use crate::engine::{CandidateEngine, EngineState, score};
use crate::feedback::{FeedbackResult, Verdict};
use crate::wordbank::Vocabulary;
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Candidate count at which the probability strategy starts sampling.
const SAMPLING_THRESHOLD: usize = 4;
/// Candidate count above which the distinct-letter strategy keeps probing.
const PROBE_THRESHOLD: usize = 2;
const MAX_PROBES: usize = 2;

pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Forget everything learned in the current game.
    fn reset(&mut self);

    /// Apply the feedback of the previous guess and choose the next word.
    ///
    /// Returns `None` when no candidate is consistent with the feedback seen
    /// so far, which means the feedback history contradicts itself.
    fn next_guess(&mut self, previous: Option<&FeedbackResult>) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    /// Highest positional frequency score
    Frequency,
    /// Frequency scoring over the whole guess list, not just the candidates
    Guessable,
    /// Probe with distinct-letter words before committing to candidates
    Distinct,
    /// Weighted random pick among the last few candidates
    Probability,
}

impl StrategyKind {
    pub fn build(self, vocabulary: Vocabulary, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Frequency => Box::new(FrequencyStrategy::new(vocabulary)),
            StrategyKind::Guessable => {
                Box::new(FrequencyStrategy::new(vocabulary).from_guessable(true))
            }
            StrategyKind::Distinct => Box::new(DistinctLetterStrategy::new(vocabulary)),
            StrategyKind::Probability => Box::new(ProbabilityStrategy::new(vocabulary, seed)),
        }
    }
}

fn absorb(
    engine: &mut CandidateEngine,
    history: &mut Vec<FeedbackResult>,
    previous: Option<&FeedbackResult>,
) {
    if let Some(feedback) = previous {
        engine.eliminate(feedback);
        history.push(feedback.clone());
    }
}

fn already_guessed(history: &[FeedbackResult], word: &str) -> bool {
    history.iter().any(|feedback| feedback.guess() == word)
}

/// Best guessable word, unless it was played before; then the best candidate.
fn best_fresh_guess(engine: &CandidateEngine, history: &[FeedbackResult]) -> Option<String> {
    match engine.best_guess(true, false) {
        Some(word) if !already_guessed(history, word) => Some(word.to_string()),
        _ => engine.best_guess(false, false).map(str::to_string),
    }
}

/// What the feedback so far says about individual letters.
///
/// Always rebuilt from the whole history so nothing carries over between games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    /// Position -> letter confirmed there
    pub green: BTreeMap<usize, char>,
    /// Letters known to be in the word but not at the given position
    pub yellow: BTreeSet<(char, usize)>,
    /// Letters known not to be in the word at all
    pub gray: BTreeSet<char>,
}

impl LetterKnowledge {
    pub fn from_history(history: &[FeedbackResult]) -> Self {
        let mut knowledge = Self::default();
        for feedback in history {
            let confirmed: HashSet<char> = feedback
                .iter()
                .filter(|&(_, verdict)| verdict != Verdict::Absent)
                .map(|(letter, _)| letter)
                .collect();
            for (i, (letter, verdict)) in feedback.iter().enumerate() {
                match verdict {
                    Verdict::Correct => {
                        knowledge.green.insert(i, letter);
                    }
                    Verdict::Present => {
                        knowledge.yellow.insert((letter, i));
                    }
                    // a gray copy of a letter that is green or yellow elsewhere only caps its count
                    Verdict::Absent if !confirmed.contains(&letter) => {
                        knowledge.gray.insert(letter);
                    }
                    Verdict::Absent => {}
                }
            }
        }
        let known = knowledge.known_letters();
        knowledge.gray.retain(|letter| !known.contains(letter));
        knowledge
    }

    /// Letters confirmed to be in the word.
    pub fn known_letters(&self) -> HashSet<char> {
        self.green
            .values()
            .copied()
            .chain(self.yellow.iter().map(|&(letter, _)| letter))
            .collect()
    }

    /// A probe should only spend letters nothing is known about yet.
    pub fn allows_probe(&self, word: &str) -> bool {
        let green: HashSet<char> = self.green.values().copied().collect();
        word.chars().enumerate().all(|(i, c)| {
            !green.contains(&c) && !self.gray.contains(&c) && !self.yellow.contains(&(c, i))
        })
    }
}

/// Greedy positional frequency.
///
/// Guesses the best scoring remaining candidate by default; with
/// [`from_guessable`](Self::from_guessable) it scores the whole guess list.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    engine: CandidateEngine,
    history: Vec<FeedbackResult>,
    from_guessable: bool,
}

impl FrequencyStrategy {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            engine: CandidateEngine::new(vocabulary),
            history: Vec::new(),
            from_guessable: false,
        }
    }

    pub fn from_guessable(mut self, enabled: bool) -> Self {
        self.from_guessable = enabled;
        self
    }

    pub fn engine(&self) -> &CandidateEngine {
        &self.engine
    }
}

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        if self.from_guessable {
            "guessable"
        } else {
            "frequency"
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.history.clear();
    }

    fn next_guess(&mut self, previous: Option<&FeedbackResult>) -> Option<String> {
        absorb(&mut self.engine, &mut self.history, previous);
        if self.from_guessable && self.engine.size() > PROBE_THRESHOLD {
            best_fresh_guess(&self.engine, &self.history)
        } else {
            self.engine.best_guess(false, false).map(str::to_string)
        }
    }
}

/// Spends the first guesses on distinct-letter probes that avoid every letter
/// already known, then guesses candidates.
#[derive(Debug, Clone)]
pub struct DistinctLetterStrategy {
    engine: CandidateEngine,
    history: Vec<FeedbackResult>,
}

impl DistinctLetterStrategy {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            engine: CandidateEngine::new(vocabulary),
            history: Vec::new(),
        }
    }

    pub fn engine(&self) -> &CandidateEngine {
        &self.engine
    }

    fn probe(&self) -> Option<String> {
        let knowledge = LetterKnowledge::from_history(&self.history);
        let probes: Vec<String> = self
            .engine
            .all_guessable()
            .iter()
            .filter(|word| knowledge.allows_probe(word) && !already_guessed(&self.history, word))
            .cloned()
            .collect();
        let word = self.engine.best_guess_in(&probes, true)?;
        let table = self.engine.frequency_table();
        (score(word, &table) > 0).then(|| word.to_string())
    }
}

impl Strategy for DistinctLetterStrategy {
    fn name(&self) -> &'static str {
        "distinct"
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.history.clear();
    }

    fn next_guess(&mut self, previous: Option<&FeedbackResult>) -> Option<String> {
        absorb(&mut self.engine, &mut self.history, previous);
        if self.engine.size() > PROBE_THRESHOLD
            && self.history.len() < MAX_PROBES
            && let Some(word) = self.probe()
        {
            debug_log!("DistinctLetterStrategy - probing with {}", word);
            return Some(word);
        }
        self.engine.best_guess(false, false).map(str::to_string)
    }
}

/// Frequency guesses while many candidates remain, then a random pick among
/// the last few, weighted by score.
#[derive(Debug, Clone)]
pub struct ProbabilityStrategy {
    engine: CandidateEngine,
    history: Vec<FeedbackResult>,
    rng: StdRng,
}

impl ProbabilityStrategy {
    pub fn new(vocabulary: Vocabulary, seed: u64) -> Self {
        Self::with_rng(vocabulary, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(vocabulary: Vocabulary, rng: StdRng) -> Self {
        Self {
            engine: CandidateEngine::new(vocabulary),
            history: Vec::new(),
            rng,
        }
    }

    pub fn engine(&self) -> &CandidateEngine {
        &self.engine
    }

    fn sample_candidate(&mut self) -> Option<String> {
        let table = self.engine.frequency_table();
        let candidates = self.engine.possible_answers();
        let weights: Vec<usize> = candidates.iter().map(|w| score(w, &table)).collect();
        let index = match WeightedIndex::new(&weights) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(e) => {
                debug_log!("ProbabilityStrategy - cannot sample ({}), using best guess", e);
                return self.engine.best_guess(false, false).map(str::to_string);
            }
        };
        Some(candidates[index].clone())
    }
}

impl Strategy for ProbabilityStrategy {
    fn name(&self) -> &'static str {
        "probability"
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.history.clear();
    }

    fn next_guess(&mut self, previous: Option<&FeedbackResult>) -> Option<String> {
        absorb(&mut self.engine, &mut self.history, previous);
        if self.engine.state() == EngineState::Exhausted {
            info_log!("ProbabilityStrategy - no candidates left");
            return None;
        }
        if self.engine.size() < SAMPLING_THRESHOLD {
            let word = self.sample_candidate()?;
            self.engine.remove(&word);
            return Some(word);
        }
        best_fresh_guess(&self.engine, &self.history)
    }
}
