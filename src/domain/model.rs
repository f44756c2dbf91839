use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub r#type: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            r#type: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

/// Create payload before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl NewQuestion {
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Category constraint for quiz selection.
///
/// `All` is kept distinct from any real [`CategoryId`]; the wire value `0`
/// is translated to it at the API boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(CategoryId),
}

impl QuizCategory {
    pub fn admits(&self, question: &Question) -> bool {
        match self {
            QuizCategory::All => true,
            QuizCategory::Only(id) => question.category == *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPage {
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub total_questions: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryQuestions {
    pub category: Category,
    pub total_questions: usize,
    pub questions: Vec<Question>,
}

/// Serialized form of both stores, used for seeding and persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}
