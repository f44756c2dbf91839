use crate::domain::model::Question;

/// Case-insensitive substring test.
///
/// Callers reject an empty term before getting here; this function would
/// otherwise match everything.
pub fn matches(term: &str, candidate: &str) -> bool {
    candidate.to_lowercase().contains(&term.to_lowercase())
}

/// Keeps the questions whose text contains `term`, in their original order.
pub fn search_questions<'a, I>(term: &str, questions: I) -> Vec<Question>
where
    I: IntoIterator<Item = &'a Question>,
{
    questions
        .into_iter()
        .filter(|q| matches(term, &q.question))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CategoryId, QuestionId};

    fn question(id: i64, text: &str) -> Question {
        Question {
            id: QuestionId(id),
            question: text.to_string(),
            answer: "a".to_string(),
            category: CategoryId(1),
            difficulty: 1,
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(matches("What", "what is this"));
        assert!(matches("IS TH", "what is this"));
        assert!(!matches("zzz", "what is this"));
    }

    #[test]
    fn test_search_preserves_order() {
        let questions = vec![
            question(1, "What is the largest lake in Africa?"),
            question(2, "Who painted the Mona Lisa?"),
            question(3, "WHAT movie earned Tom Hanks his third Oscar?"),
        ];

        let found = search_questions("what", &questions);
        let ids: Vec<i64> = found.iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        let questions = vec![question(1, "What is the heaviest organ?")];
        assert!(search_questions("fasfasfsafasf", &questions).is_empty());
    }
}
