//! Self-test sessions.
//!
//! A session draws a uniform random sample of the collection and walks
//! through it once. There is no scheduling: every word is equally likely.

use carnet_types::{Direction, VocabularyRecord};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::QuizError;
use crate::matcher::match_answer;

pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Result of answering one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word_id: String,
    pub correct: bool,
    /// The stored answer, shown back to the user
    pub expected: String,
}

#[derive(Debug, Clone)]
pub struct QuizSummary {
    pub score: usize,
    /// Words answered so far, less than `total` when stopped early
    pub answered: usize,
    pub total: usize,
    pub mistakes: Vec<VocabularyRecord>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    direction: Direction,
    queue: Vec<VocabularyRecord>,
    index: usize,
    score: usize,
    mistakes: Vec<VocabularyRecord>,
}

impl QuizSession {
    /// Shuffle a copy of `words` and keep at most `batch_size` of them.
    ///
    /// A `batch_size` of 0 is treated as 1.
    pub fn start<R>(
        words: &[VocabularyRecord],
        direction: Direction,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError>
    where
        R: Rng + ?Sized,
    {
        if words.is_empty() {
            return Err(QuizError::NoWords);
        }

        let mut queue = words.to_vec();
        queue.shuffle(rng);
        queue.truncate(batch_size.max(1));

        tracing::debug!(size = queue.len(), ?direction, "test session started");

        Ok(Self {
            direction,
            queue,
            index: 0,
            score: 0,
            mistakes: Vec::new(),
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current(&self) -> Option<&VocabularyRecord> {
        self.queue.get(self.index)
    }

    /// Text to show for the current word
    pub fn prompt(&self) -> Option<&str> {
        self.current().map(|w| self.direction.prompt(w))
    }

    /// 1-based position and total
    pub fn progress(&self) -> (usize, usize) {
        ((self.index + 1).min(self.queue.len()), self.queue.len())
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.queue.len()
    }

    /// Check `answer` for the current word and move on
    pub fn submit(&mut self, answer: &str) -> Result<Attempt, QuizError> {
        let word = self.queue.get(self.index).ok_or(QuizError::Finished)?;
        let expected = self.direction.expected(word);
        let correct = match_answer(expected, answer);

        let attempt = Attempt {
            word_id: word.id.clone(),
            correct,
            expected: expected.to_string(),
        };

        if correct {
            self.score += 1;
        } else {
            self.mistakes.push(word.clone());
        }
        self.index += 1;

        Ok(attempt)
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            answered: self.index,
            total: self.queue.len(),
            mistakes: self.mistakes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn words(n: usize) -> Vec<VocabularyRecord> {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..n)
            .map(|i| {
                VocabularyRecord::new(
                    format!("{i}"),
                    &format!("word{i}"),
                    &format!("mot{i} / terme{i}"),
                    None,
                    at,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_empty_collection() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = QuizSession::start(&[], Direction::SourceToTarget, 10, &mut rng);
        assert!(matches!(result, Err(QuizError::NoWords)));
    }

    #[test]
    fn test_sample_is_capped_and_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = words(25);
        let session = QuizSession::start(&pool, Direction::SourceToTarget, DEFAULT_BATCH_SIZE, &mut rng).unwrap();

        assert_eq!(session.progress(), (1, 10));
        let ids: HashSet<_> = session.queue.iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_small_collection_uses_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = QuizSession::start(&words(4), Direction::SourceToTarget, 10, &mut rng).unwrap();
        assert_eq!(session.summary().total, 4);
    }

    #[test]
    fn test_full_session() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = QuizSession::start(&words(3), Direction::SourceToTarget, 10, &mut rng).unwrap();

        // First answer right (one sense), second wrong, third right (whole field)
        let first = session.current().unwrap().clone();
        let i = first.id.as_str();
        let attempt = session.submit(&format!("MOT{i}")).unwrap();
        assert!(attempt.correct);
        assert_eq!(attempt.word_id, first.id);

        let second = session.current().unwrap().clone();
        let attempt = session.submit("nope").unwrap();
        assert!(!attempt.correct);
        assert_eq!(attempt.expected, second.target);

        let third = session.current().unwrap().clone();
        let attempt = session.submit(&third.target).unwrap();
        assert!(attempt.correct);

        assert!(session.is_finished());
        assert!(matches!(session.submit("x"), Err(QuizError::Finished)));

        let summary = session.summary();
        assert_eq!(summary.score, 2);
        assert_eq!(summary.answered, 3);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.mistakes, vec![second]);
    }

    #[test]
    fn test_summary_counts_only_answered_words() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = QuizSession::start(&words(3), Direction::SourceToTarget, 10, &mut rng).unwrap();
        assert_eq!(session.summary().answered, 0);

        session.submit("nope").unwrap();

        let summary = session.summary();
        assert_eq!((summary.score, summary.answered, summary.total), (0, 1, 3));
        assert!(!session.is_finished());
    }

    #[test]
    fn test_reverse_direction() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::start(&words(1), Direction::TargetToSource, 10, &mut rng).unwrap();

        assert_eq!(session.prompt(), Some("mot0 / terme0"));
        assert!(session.submit(" Word0 ").unwrap().correct);
    }

    #[test]
    fn test_zero_batch_size() {
        let mut rng = StdRng::seed_from_u64(9);
        let session = QuizSession::start(&words(5), Direction::SourceToTarget, 0, &mut rng).unwrap();
        assert_eq!(session.summary().total, 1);
    }
}
