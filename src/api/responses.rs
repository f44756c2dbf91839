use crate::domain::model::{Category, Question};
use crate::utils::error::{ErrorCategory, TriviaError};
use serde::Serialize;
use serde_json::Value;

/// Status code plus JSON body, ready for whatever transport sits in front.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(e) => Self::from_error(&TriviaError::SerializationError(e)),
        }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::new(200, body)
    }

    pub fn from_error(error: &TriviaError) -> Self {
        if error.category() == ErrorCategory::ServerFault {
            tracing::error!("Request failed with server fault: {}", error);
        } else {
            tracing::debug!("Request rejected: {}", error);
        }
        Self::failure(error.status_code(), error.user_friendly_message())
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: serde_json::json!({
                "success": false,
                "message": message.into(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}
