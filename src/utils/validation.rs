use crate::utils::error::{Result, TriviaError};
use crate::utils::logger::LOG_LEVELS;
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TriviaError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(TriviaError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TriviaError::ConfigError {
            message: format!("{}: value {} must be at least {}", field_name, value, min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TriviaError::invalid_input(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Field rules every stored question satisfies, whether created or loaded.
pub fn validate_question_fields(question: &str, answer: &str, difficulty: u8) -> Result<()> {
    validate_non_empty_string("question", question)?;
    validate_non_empty_string("answer", answer)?;
    if difficulty == 0 {
        return Err(TriviaError::invalid_input(
            "difficulty",
            "difficulty must be at least 1",
        ));
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level) {
        return Err(TriviaError::ConfigError {
            message: format!(
                "{}: unsupported level '{}'. Valid levels: {}",
                field_name,
                level,
                LOG_LEVELS.join(", ")
            ),
        });
    }
    Ok(())
}

/// A request field that is absent, `null`, `""`, `0` or `false` counts as missing.
pub fn require_field<'a>(body: &'a Value, field_name: &str) -> Result<&'a Value> {
    match body.get(field_name) {
        None | Some(Value::Null) => {
            Err(TriviaError::invalid_input(field_name, "field is required"))
        }
        Some(Value::String(s)) if s.is_empty() => {
            Err(TriviaError::invalid_input(field_name, "field cannot be empty"))
        }
        Some(Value::Bool(false)) => {
            Err(TriviaError::invalid_input(field_name, "field is required"))
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            Err(TriviaError::invalid_input(field_name, "field cannot be zero"))
        }
        Some(value) => Ok(value),
    }
}

pub fn require_string(body: &Value, field_name: &str) -> Result<String> {
    match require_field(body, field_name)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(TriviaError::invalid_input(field_name, "expected a string")),
    }
}

/// Accepts integers and integer-valued strings (`3` or `"3"`).
pub fn require_integer(body: &Value, field_name: &str) -> Result<i64> {
    let value = require_field(body, field_name)?;
    as_integer(value).ok_or_else(|| TriviaError::invalid_input(field_name, "expected an integer"))
}

pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
