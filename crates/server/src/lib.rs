use api_types::ErrorBody;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{EXPENSES_PATH, router, run_with_listener, spawn_with_listener};

mod expenses;
mod server;

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// The request body could not be read as JSON.
    Malformed(String),
}

fn internal_error(err: String) -> ErrorBody {
    tracing::error!("request failed: {err}");
    ErrorBody::new("Internal Server Error").with_error(err)
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ServerError::Engine(EngineError::MissingFields(fields)) => {
                tracing::warn!("rejected expense, missing {fields:?}");
                let fields = fields.iter().map(|f| f.as_str().to_string()).collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new("Missing required fields").with_fields(fields),
                )
            }
            ServerError::Engine(err @ EngineError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, internal_error(err.to_string()))
            }
            ServerError::Malformed(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, internal_error(err))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
