pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    local_storage::LocalStorage, memory_store::InMemoryStore, snapshot::SnapshotRepository,
};
pub use crate::api::{ApiResponse, TriviaApi};
pub use crate::config::Settings;
pub use crate::core::{pagination::Paginator, quiz::QuizSelector, service::TriviaService};
pub use crate::domain::model::{
    Category, CategoryId, NewQuestion, Question, QuestionId, QuizCategory,
};
pub use crate::utils::error::{Result, TriviaError};
