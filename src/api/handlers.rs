use crate::api::requests::{parse_new_question, parse_page, parse_search_term, QuizRequest};
use crate::api::responses::{
    ApiResponse, CategoriesResponse, CategoryQuestionsResponse, MessageResponse, QuestionsResponse,
    QuizResponse, SearchResponse,
};
use crate::core::pagination::Paginator;
use crate::core::service::TriviaService;
use crate::domain::model::{CategoryId, QuestionId};
use crate::domain::ports::{CategoryRepository, QuestionRepository};
use crate::utils::error::Result;
use serde_json::Value;

/// Request/response translation in front of [`TriviaService`].
///
/// Each handler mirrors one route of the trivia API. Routing, CORS and body
/// decoding belong to the transport; handlers receive path and query values
/// already extracted and JSON bodies already parsed.
pub struct TriviaApi<C: CategoryRepository, Q: QuestionRepository> {
    service: TriviaService<C, Q>,
}

impl<C: CategoryRepository, Q: QuestionRepository> TriviaApi<C, Q> {
    pub fn new(service: TriviaService<C, Q>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &TriviaService<C, Q> {
        &self.service
    }

    /// `GET /`: bare category list, used as a liveness probe.
    pub async fn index(&self) -> ApiResponse {
        respond(self.service.list_categories().await, |categories| {
            ApiResponse::ok(&categories)
        })
    }

    /// `GET /categories`
    pub async fn get_categories(&self) -> ApiResponse {
        respond(self.service.list_categories().await, |categories| {
            ApiResponse::ok(&CategoriesResponse {
                success: true,
                categories,
            })
        })
    }

    /// `GET /questions?page=n`
    pub async fn get_questions(&self, page: Option<&str>) -> ApiResponse {
        let result = async {
            let page = Paginator::clamp_page(parse_page(page)?);
            self.service.list_questions(page).await
        }
        .await;

        respond(result, |page| {
            ApiResponse::ok(&QuestionsResponse {
                success: true,
                total_questions: page.total_questions,
                categories: page.categories,
                current_category: String::new(),
                questions: page.questions,
            })
        })
    }

    /// `DELETE /questions/<id>`
    pub async fn delete_question(&self, id: i64) -> ApiResponse {
        respond(self.service.delete_question(QuestionId(id)).await, |_| {
            ApiResponse::ok(&MessageResponse {
                success: true,
                message: "deleted successfully".to_string(),
                created: None,
            })
        })
    }

    /// `POST /questions`
    pub async fn create_question(&self, body: &Value) -> ApiResponse {
        let result = async {
            let new_question = parse_new_question(body)?;
            self.service.create_question(new_question).await
        }
        .await;

        respond(result, |question| {
            ApiResponse::new(
                201,
                &MessageResponse {
                    success: true,
                    message: "question created successfully".to_string(),
                    created: Some(question.id.0),
                },
            )
        })
    }

    /// `POST /questions/search`
    pub async fn search_questions(&self, body: &Value) -> ApiResponse {
        let result = async {
            let term = parse_search_term(body)?;
            self.service.search(&term).await
        }
        .await;

        respond(result, |found| {
            ApiResponse::ok(&SearchResponse {
                success: true,
                questions: found.questions,
                total_questions: found.total_questions,
                current_category: String::new(),
            })
        })
    }

    /// `GET /categories/<id>/questions`
    pub async fn get_category_questions(&self, id: i64) -> ApiResponse {
        respond(
            self.service.questions_by_category(CategoryId(id)).await,
            |found| {
                ApiResponse::ok(&CategoryQuestionsResponse {
                    success: true,
                    questions: found.questions,
                    total_questions: found.total_questions,
                    current_category: found.category.r#type,
                })
            },
        )
    }

    /// `POST /quizzes`
    pub async fn get_quiz_question(&self, body: &Value) -> ApiResponse {
        let result = async {
            let request = QuizRequest::from_json(body)?;
            self.service
                .next_quiz_question(&request.previous_questions, request.quiz_category)
                .await
        }
        .await;

        respond(result, |question| {
            ApiResponse::ok(&QuizResponse {
                success: true,
                question,
            })
        })
    }

    /// Any route hit with an unsupported method.
    pub fn method_not_allowed(&self) -> ApiResponse {
        ApiResponse::failure(405, "method not allowed")
    }
}

fn respond<T>(result: Result<T>, on_success: impl FnOnce(T) -> ApiResponse) -> ApiResponse {
    match result {
        Ok(value) => on_success(value),
        Err(e) => ApiResponse::from_error(&e),
    }
}
