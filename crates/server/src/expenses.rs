//! Expenses API endpoints

use api_types::{
    ErrorBody, Status,
    expense::{Expense as ApiExpense, ExpenseCreated, ExpenseListResponse, ExpenseNew},
};
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ApiExpense {
    ApiExpense {
        id: expense.id,
        amount: expense.amount,
        description: expense.description,
        category: expense.category,
        date: expense.date,
    }
}

/// Read the request body as JSON.
///
/// Any non-object JSON value carries no fields. An empty body, invalid JSON
/// and `null` are malformed.
fn parse_body(body: &[u8]) -> Result<ExpenseNew, ServerError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|err| ServerError::Malformed(err.to_string()))?;

    match value {
        Value::Null => Err(ServerError::Malformed(
            "request body must not be null".to_string(),
        )),
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|err| ServerError::Malformed(err.to_string()))
        }
        _ => Ok(ExpenseNew::default()),
    }
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ExpenseListResponse>, ServerError> {
    let data: Vec<ApiExpense> = state
        .engine
        .list_expenses()?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(ExpenseListResponse {
        status: Status::Success,
        count: data.len(),
        data,
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    let body = body.map_err(|rejection| ServerError::Malformed(rejection.body_text()))?;
    let payload = parse_body(&body)?;

    let expense = state.engine.add_expense(engine::ExpenseInput {
        amount: payload.amount,
        description: payload.description,
        category: payload.category,
        date: payload.date,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreated {
            status: Status::Success,
            message: "Expense added successfully".to_string(),
            data: map_expense(expense),
        }),
    ))
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method Not Allowed")),
    )
}
