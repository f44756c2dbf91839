use crate::core::search::search_questions;
use crate::domain::model::{Category, CategoryId, NewQuestion, Question, QuestionId, Snapshot};
use crate::domain::ports::{CategoryRepository, QuestionRepository};
use crate::utils::error::{Result, TriviaError};
use crate::utils::validation::validate_question_fields;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;

#[derive(Debug)]
struct StoreState {
    categories: Vec<Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: i64,
}

impl StoreState {
    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Category and question store held in memory.
///
/// Each operation takes the lock once, so a create that fails validation
/// never leaves a partial record behind. Ids come from a counter that only
/// moves forward; deleted ids are never handed out again.
#[derive(Debug)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_categories(Vec::new())
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                categories,
                questions: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Builds a store from a snapshot. Questions must pass the same field
    /// checks as a create and reference a category in the snapshot; ids must
    /// be unique and leave room for the counter to advance.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut category_ids = HashSet::new();
        for category in &snapshot.categories {
            if !category_ids.insert(category.id) {
                return Err(TriviaError::StorageError {
                    message: format!("duplicate category id {} in snapshot", category.id),
                });
            }
        }

        let mut questions = BTreeMap::new();
        for question in snapshot.questions {
            validate_question_fields(&question.question, &question.answer, question.difficulty)?;
            if !category_ids.contains(&question.category) {
                return Err(TriviaError::InvalidReference {
                    field: "category".to_string(),
                    value: question.category.to_string(),
                });
            }
            let id = question.id;
            if questions.insert(id, question).is_some() {
                return Err(TriviaError::StorageError {
                    message: format!("duplicate question id {} in snapshot", id),
                });
            }
        }

        let next_id = match questions.keys().next_back() {
            Some(last) => advance_id(last.0)?,
            None => 1,
        };
        Ok(Self {
            state: RwLock::new(StoreState {
                categories: snapshot.categories,
                questions,
                next_id,
            }),
        })
    }

    pub async fn snapshot(&self) -> Snapshot {
        let state = self.state.read().await;
        Snapshot {
            categories: state.categories.clone(),
            questions: state.questions.values().cloned().collect(),
        }
    }

}

fn advance_id(id: i64) -> Result<i64> {
    id.checked_add(1).ok_or_else(|| TriviaError::StorageError {
        message: format!("question id space exhausted after {}", id),
    })
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Category>> {
        Ok(self.state.read().await.categories.clone())
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Category> {
        self.state
            .read()
            .await
            .category(id)
            .cloned()
            .ok_or_else(|| TriviaError::not_found("Category", id))
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>> {
        Ok(self.state.read().await.questions.values().cloned().collect())
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question> {
        let mut state = self.state.write().await;
        if state.category(new_question.category).is_none() {
            return Err(TriviaError::InvalidReference {
                field: "category".to_string(),
                value: new_question.category.to_string(),
            });
        }

        let id = QuestionId(state.next_id);
        state.next_id = advance_id(state.next_id)?;
        let question = new_question.into_question(id);
        state.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<()> {
        self.state
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| TriviaError::not_found("Question", id))
    }

    async fn filter_by_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn filter_by_ids_excluded(
        &self,
        excluded: &HashSet<QuestionId>,
    ) -> Result<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| !excluded.contains(&q.id))
            .cloned()
            .collect())
    }

    async fn search_by_text(&self, term: &str) -> Result<Vec<Question>> {
        let state = self.state.read().await;
        Ok(search_questions(term, state.questions.values()))
    }
}
