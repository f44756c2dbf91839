use crate::domain::model::{Question, QuestionId, QuizCategory};
use crate::domain::ports::QuestionRepository;
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Mutex;

/// Picks the next quiz question.
///
/// Each call is an independent draw. The selector keeps no record of what it
/// has returned; callers accumulate `excluded` ids across a session.
pub struct QuizSelector {
    rng: Mutex<StdRng>,
}

impl QuizSelector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence of draws, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub async fn select_next<Q>(
        &self,
        questions: &Q,
        excluded: &HashSet<QuestionId>,
        category: QuizCategory,
    ) -> Result<Option<Question>>
    where
        Q: QuestionRepository + ?Sized,
    {
        let eligible = eligible_set(questions, excluded, category).await?;
        tracing::debug!(
            "Quiz eligible set: {} questions ({} excluded, {:?})",
            eligible.len(),
            excluded.len(),
            category
        );

        // No await while the lock is held.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(pick_uniform(&eligible, &mut *rng))
    }
}

impl Default for QuizSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Questions not in `excluded` that satisfy the category constraint.
pub async fn eligible_set<Q>(
    questions: &Q,
    excluded: &HashSet<QuestionId>,
    category: QuizCategory,
) -> Result<Vec<Question>>
where
    Q: QuestionRepository + ?Sized,
{
    let mut eligible = questions.filter_by_ids_excluded(excluded).await?;
    eligible.retain(|q| category.admits(q));
    Ok(eligible)
}

/// `None` means the quiz is exhausted.
pub fn pick_uniform<R: Rng + ?Sized>(eligible: &[Question], rng: &mut R) -> Option<Question> {
    eligible.choose(rng).cloned()
}
