use crate::domain::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn questions_per_page(&self) -> usize;
    fn snapshot_path(&self) -> &str;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in insertion order.
    async fn list_all(&self) -> Result<Vec<Category>>;
    async fn get_by_id(&self, id: CategoryId) -> Result<Category>;
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id ascending. Pagination relies on this order.
    async fn list_all(&self) -> Result<Vec<Question>>;
    /// Fails with `InvalidReference` when the category does not resolve; the
    /// store is left untouched in that case.
    async fn create(&self, new_question: NewQuestion) -> Result<Question>;
    async fn delete_by_id(&self, id: QuestionId) -> Result<()>;
    async fn filter_by_category(&self, category: CategoryId) -> Result<Vec<Question>>;
    async fn filter_by_ids_excluded(&self, excluded: &HashSet<QuestionId>) -> Result<Vec<Question>>;
    async fn search_by_text(&self, term: &str) -> Result<Vec<Question>>;
}
