// Boundary layer: JSON requests in, status + JSON body out.

pub mod handlers;
pub mod requests;
pub mod responses;

pub use handlers::TriviaApi;
pub use responses::ApiResponse;
