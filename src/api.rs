use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use stmtdb_core::{Statement, StatementSummary};

use crate::service::{AccessError, StatementService};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Serialize)]
struct ListResponse {
    statements: Vec<StatementSummary>,
}

fn error(status: StatusCode, error: &str) -> Response {
    (status, Json(ErrorBody { error: error.to_string() })).into_response()
}

fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(MessageBody { message: message.to_string() })).into_response()
}

pub fn router(service: Arc<StatementService>) -> Router {
    Router::new()
        .route("/statements", post(create_statement).get(list_statements))
        .route(
            "/statements/:statement_id",
            get(get_statement)
                .delete(delete_statement)
                .put(update_statement),
        )
        .fallback(not_found)
        .with_state(service)
}

async fn create_statement(
    State(service): State<Arc<StatementService>>,
    payload: Option<Json<Statement>>,
) -> Response {
    let Some(Json(statement)) = payload else {
        return error(StatusCode::BAD_REQUEST, "Invalid statement");
    };

    match service.create(statement) {
        Ok(()) => message(StatusCode::CREATED, "Successfully created."),
        Err(AccessError::BadRequest(msg)) => error(StatusCode::BAD_REQUEST, &msg),
        Err(AccessError::AlreadyExists) => error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Cannot create an already existent statement",
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to save statement");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not save statement.")
        }
    }
}

async fn list_statements(State(service): State<Arc<StatementService>>) -> Response {
    match service.list(None) {
        Ok(statements) => (StatusCode::OK, Json(ListResponse { statements })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list statements");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server Error!")
        }
    }
}

async fn get_statement(
    State(service): State<Arc<StatementService>>,
    Path(statement_id): Path<String>,
) -> Response {
    match service.get(&statement_id) {
        Ok(statement) => (StatusCode::OK, Json(statement)).into_response(),
        Err(AccessError::BadRequest(_)) => error(StatusCode::BAD_REQUEST, "Invalid statement ID."),
        Err(AccessError::NoStatements) => message(StatusCode::NOT_FOUND, "No statement found."),
        Err(AccessError::NotFound) => message(StatusCode::NOT_FOUND, "Statement not found"),
        Err(e) => {
            tracing::error!(error = %e, statement_id, "Failed to fetch statement");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
        }
    }
}

async fn delete_statement(
    State(service): State<Arc<StatementService>>,
    Path(statement_id): Path<String>,
) -> Response {
    match service.delete(&statement_id) {
        Ok(_previous) => StatusCode::NO_CONTENT.into_response(),
        Err(AccessError::BadRequest(_)) => error(StatusCode::BAD_REQUEST, "Invalid statement ID."),
        Err(AccessError::NotFound) => error(StatusCode::NOT_FOUND, "Statement not found"),
        Err(e) => {
            tracing::error!(error = %e, statement_id, "Failed to delete statement");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
        }
    }
}

// Reserved for partial updates.
async fn update_statement(
    State(service): State<Arc<StatementService>>,
    Path(statement_id): Path<String>,
) -> Response {
    match service.update(&statement_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, statement_id, "Failed to update statement");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
        }
    }
}

async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not Found")
}
