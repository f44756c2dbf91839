use crate::domain::model::{CategoryId, NewQuestion, QuestionId, QuizCategory};
use crate::utils::error::{Result, TriviaError};
use crate::utils::validation::{as_integer, require_integer, require_string};
use serde_json::Value;
use std::collections::HashSet;

/// Wire value of `quiz_category.id` that lifts the category restriction.
pub const ALL_CATEGORIES: i64 = 0;

/// `?page=` value; absent means page 1, anything non-numeric is rejected.
pub fn parse_page(raw: Option<&str>) -> Result<i64> {
    match raw {
        None => Ok(1),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| TriviaError::invalid_input("page", format!("'{}' is not an integer", s))),
    }
}

pub fn parse_new_question(body: &Value) -> Result<NewQuestion> {
    let question = require_string(body, "question")?;
    let answer = require_string(body, "answer")?;
    let difficulty = require_integer(body, "difficulty")?;
    let category = require_integer(body, "category")?;

    let difficulty = u8::try_from(difficulty)
        .map_err(|_| TriviaError::invalid_input("difficulty", "difficulty out of range"))?;

    Ok(NewQuestion {
        question,
        answer,
        category: CategoryId(category),
        difficulty,
    })
}

pub fn parse_search_term(body: &Value) -> Result<String> {
    require_string(body, "searchTerm")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub previous_questions: HashSet<QuestionId>,
    pub quiz_category: QuizCategory,
}

impl QuizRequest {
    /// Expects `{"previous_questions": [ids...], "quiz_category": {"id": n}}`.
    pub fn from_json(body: &Value) -> Result<Self> {
        let previous = match body.get("previous_questions") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(TriviaError::invalid_input(
                    "previous_questions",
                    "expected a list of question ids",
                ))
            }
        };
        let previous_questions = previous
            .iter()
            .map(|item| {
                as_integer(item).map(QuestionId).ok_or_else(|| {
                    TriviaError::invalid_input("previous_questions", "ids must be integers")
                })
            })
            .collect::<Result<HashSet<_>>>()?;

        let category_id = body
            .get("quiz_category")
            .and_then(|c| c.get("id"))
            .and_then(as_integer)
            .ok_or_else(|| TriviaError::invalid_input("quiz_category.id", "field is required"))?;

        let quiz_category = if category_id == ALL_CATEGORIES {
            QuizCategory::All
        } else {
            QuizCategory::Only(CategoryId(category_id))
        };

        Ok(Self {
            previous_questions,
            quiz_category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("2")).unwrap(), 2);
        assert_eq!(parse_page(Some("-3")).unwrap(), -3);
        assert!(parse_page(Some("two")).is_err());
    }

    #[test]
    fn test_parse_new_question() {
        let body = json!({"question": "test_question", "answer": "test_answer", "difficulty": 3, "category": 1});
        let parsed = parse_new_question(&body).unwrap();
        assert_eq!(parsed.question, "test_question");
        assert_eq!(parsed.category, CategoryId(1));
        assert_eq!(parsed.difficulty, 3);
    }

    #[test]
    fn test_parse_new_question_missing_field() {
        let body = json!({"fwffw": "test_question", "answer": "test_answer", "difficulty": 3, "category": 2});
        assert!(matches!(
            parse_new_question(&body),
            Err(TriviaError::InvalidInput { .. })
        ));

        let zero_difficulty = json!({"question": "q", "answer": "a", "difficulty": 0, "category": 2});
        assert!(parse_new_question(&zero_difficulty).is_err());
    }

    #[test]
    fn test_quiz_request_all_categories() {
        let body = json!({"previous_questions": [4, 9], "quiz_category": {"id": 0, "type": "click"}});
        let request = QuizRequest::from_json(&body).unwrap();
        assert_eq!(request.quiz_category, QuizCategory::All);
        assert!(request.previous_questions.contains(&QuestionId(4)));
        assert!(request.previous_questions.contains(&QuestionId(9)));
    }

    #[test]
    fn test_quiz_request_specific_category() {
        let body = json!({"previous_questions": [], "quiz_category": {"id": "1", "type": "Science"}});
        let request = QuizRequest::from_json(&body).unwrap();
        assert_eq!(request.quiz_category, QuizCategory::Only(CategoryId(1)));
        assert!(request.previous_questions.is_empty());
    }

    #[test]
    fn test_quiz_request_rejects_bad_shapes() {
        let missing_id = json!({"previous_questions": [], "quiz_category": {"type": "click", "q": 0}});
        assert!(QuizRequest::from_json(&missing_id).is_err());

        let not_a_list = json!({"previous_questions": "1,2", "quiz_category": {"id": 0}});
        assert!(QuizRequest::from_json(&not_a_list).is_err());

        let no_category = json!({"previous_questions": []});
        assert!(QuizRequest::from_json(&no_category).is_err());
    }
}
