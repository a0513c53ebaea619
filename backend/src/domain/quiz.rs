//! Quiz sampling: draw one unseen question uniformly at random.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{Question, QuestionId};

/// Outcome of a quiz draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    /// A question the player has not seen yet.
    Question(Question),
    /// Every question in the pool has already been seen.
    Exhausted,
}

/// Stateless sampler; randomness is supplied per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuizSampler;

impl QuizSampler {
    /// Pick a question from `pool` whose identifier is not in `seen`.
    ///
    /// Each remaining candidate is returned with probability
    /// `1 / candidates`.
    pub fn sample<R>(pool: &[Question], seen: &HashSet<QuestionId>, rng: &mut R) -> QuizDraw
    where
        R: Rng + ?Sized,
    {
        let candidates: Vec<&Question> = pool
            .iter()
            .filter(|question| !seen.contains(&question.id))
            .collect();

        match candidates.choose(rng) {
            Some(question) => QuizDraw::Question((*question).clone()),
            None => QuizDraw::Exhausted,
        }
    }
}
