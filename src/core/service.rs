use crate::core::pagination::Paginator;
use crate::core::quiz::QuizSelector;
use crate::domain::model::{
    Category, CategoryId, CategoryQuestions, NewQuestion, Question, QuestionId, QuestionPage,
    QuizCategory, SearchResult,
};
use crate::domain::ports::{CategoryRepository, QuestionRepository};
use crate::utils::error::{Result, TriviaError};
use crate::utils::validation::validate_question_fields;
use std::collections::HashSet;
use std::sync::Arc;

/// Question retrieval and quiz selection over the two repositories.
///
/// Operations are independent units of work with no cross-operation
/// atomicity. A question returned by [`TriviaService::next_quiz_question`]
/// can be deleted by a concurrent caller before it is answered; that race is
/// accepted and callers must tolerate a later `NotFound` for it.
pub struct TriviaService<C: CategoryRepository, Q: QuestionRepository> {
    categories: Arc<C>,
    questions: Arc<Q>,
    paginator: Paginator,
    selector: QuizSelector,
}

impl<C: CategoryRepository, Q: QuestionRepository> TriviaService<C, Q> {
    pub fn new(categories: Arc<C>, questions: Arc<Q>, paginator: Paginator) -> Self {
        Self::with_selector(categories, questions, paginator, QuizSelector::new())
    }

    pub fn with_selector(
        categories: Arc<C>,
        questions: Arc<Q>,
        paginator: Paginator,
        selector: QuizSelector,
    ) -> Self {
        Self {
            categories,
            questions,
            paginator,
            selector,
        }
    }

    pub fn question_store(&self) -> Arc<Q> {
        Arc::clone(&self.questions)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.categories.list_all().await
    }

    /// One page of questions; `total_questions` counts the full set.
    pub async fn list_questions(&self, page: usize) -> Result<QuestionPage> {
        let all = self.questions.list_all().await?;
        let questions = self.paginator.window(&all, page).to_vec();
        tracing::debug!(
            "Page {} of questions: {} of {} returned",
            page,
            questions.len(),
            all.len()
        );

        Ok(QuestionPage {
            total_questions: all.len(),
            categories: self.categories.list_all().await?,
            questions,
        })
    }

    pub async fn create_question(&self, new_question: NewQuestion) -> Result<Question> {
        validate_question_fields(
            &new_question.question,
            &new_question.answer,
            new_question.difficulty,
        )?;

        let created = self.questions.create(new_question).await.map_err(|e| {
            tracing::warn!("Question create rejected: {}", e);
            e
        })?;
        tracing::info!("Created question {} in category {}", created.id, created.category);
        Ok(created)
    }

    pub async fn delete_question(&self, id: QuestionId) -> Result<()> {
        self.questions.delete_by_id(id).await.map_err(|e| {
            tracing::warn!("Question delete failed: {}", e);
            e
        })?;
        tracing::info!("Deleted question {}", id);
        Ok(())
    }

    pub async fn search(&self, term: &str) -> Result<SearchResult> {
        if term.is_empty() {
            return Err(TriviaError::invalid_input("searchTerm", "search term cannot be empty"));
        }

        let questions = self.questions.search_by_text(term).await?;
        tracing::debug!("Search '{}' matched {} questions", term, questions.len());
        Ok(SearchResult {
            total_questions: questions.len(),
            questions,
        })
    }

    pub async fn questions_by_category(&self, id: CategoryId) -> Result<CategoryQuestions> {
        let category = self.categories.get_by_id(id).await?;
        let questions = self.questions.filter_by_category(id).await?;
        Ok(CategoryQuestions {
            category,
            total_questions: questions.len(),
            questions,
        })
    }

    /// `Ok(None)` when every eligible question has been excluded.
    pub async fn next_quiz_question(
        &self,
        previous: &HashSet<QuestionId>,
        category: QuizCategory,
    ) -> Result<Option<Question>> {
        let next = self
            .selector
            .select_next(self.questions.as_ref(), previous, category)
            .await?;
        if next.is_none() {
            tracing::debug!("Quiz exhausted after {} questions ({:?})", previous.len(), category);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_store::InMemoryStore;

    async fn service_with(count: usize) -> TriviaService<InMemoryStore, InMemoryStore> {
        let store = Arc::new(InMemoryStore::with_categories(vec![
            Category::new(1, "Science"),
            Category::new(2, "Art"),
        ]));
        for i in 0..count {
            store
                .create(NewQuestion {
                    question: format!("What is fact number {}?", i),
                    answer: format!("Fact {}", i),
                    category: CategoryId(if i % 2 == 0 { 1 } else { 2 }),
                    difficulty: 2,
                })
                .await
                .unwrap();
        }
        TriviaService::with_selector(
            store.clone(),
            store,
            Paginator::default(),
            QuizSelector::with_seed(5),
        )
    }

    #[tokio::test]
    async fn test_list_questions_reports_full_total() {
        let service = service_with(19).await;

        let first = service.list_questions(1).await.unwrap();
        assert_eq!(first.total_questions, 19);
        assert_eq!(first.questions.len(), 10);
        assert_eq!(first.categories.len(), 2);

        let second = service.list_questions(2).await.unwrap();
        assert_eq!(second.questions.len(), 9);
        assert_eq!(second.questions[0].id, QuestionId(11));

        let beyond = service.list_questions(123).await.unwrap();
        assert!(beyond.questions.is_empty());
        assert_eq!(beyond.total_questions, 19);
    }

    #[tokio::test]
    async fn test_empty_search_term_is_rejected() {
        let service = service_with(3).await;
        let result = service.search("").await;
        assert!(matches!(result, Err(TriviaError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn test_search_counts_matches() {
        let service = service_with(12).await;
        let result = service.search("NUMBER 1").await.unwrap();
        // "number 1", "number 10", "number 11"
        assert_eq!(result.total_questions, 3);
        assert_eq!(result.questions.len(), 3);
    }

    #[tokio::test]
    async fn test_create_validates_before_insert() {
        let service = service_with(0).await;

        let blank = service
            .create_question(NewQuestion {
                question: "   ".to_string(),
                answer: "a".to_string(),
                category: CategoryId(1),
                difficulty: 1,
            })
            .await;
        assert!(matches!(blank, Err(TriviaError::InvalidInput { .. })));

        let dangling = service
            .create_question(NewQuestion {
                question: "q".to_string(),
                answer: "a".to_string(),
                category: CategoryId(12),
                difficulty: 1,
            })
            .await;
        assert!(matches!(dangling, Err(TriviaError::InvalidReference { .. })));

        assert_eq!(service.list_questions(1).await.unwrap().total_questions, 0);
    }

    #[tokio::test]
    async fn test_questions_by_missing_category() {
        let service = service_with(4).await;
        let result = service.questions_by_category(CategoryId(62)).await;
        assert!(matches!(result, Err(TriviaError::NotFound { .. })));

        let science = service.questions_by_category(CategoryId(1)).await.unwrap();
        assert_eq!(science.category.r#type, "Science");
        assert_eq!(science.total_questions, 2);
    }

    #[tokio::test]
    async fn test_quiz_over_unknown_category_is_exhausted() {
        let service = service_with(4).await;
        let next = service
            .next_quiz_question(&HashSet::new(), QuizCategory::Only(CategoryId(99)))
            .await
            .unwrap();
        assert!(next.is_none());
    }
}
