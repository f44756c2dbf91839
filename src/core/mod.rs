pub mod pagination;
pub mod quiz;
pub mod search;
pub mod service;

pub use crate::domain::model::{Category, Question, QuizCategory};
pub use crate::domain::ports::{CategoryRepository, ConfigProvider, QuestionRepository, Storage};
pub use crate::utils::error::Result;
