//! HTTP transport layer for the todo service.
//!
//! # Design
//! Handlers only translate between HTTP and the injected `TodoService`:
//! verbs/paths map to service calls, `StoreError` maps to status codes via
//! `ApiError`. The router is built by `app` from an already-composed service,
//! so tests and `main` choose the backend.
//!
//! Update is `PATCH /todos` with the id carried in the body, and replaces
//! title/completed wholesale; payloads missing a required field are rejected
//! at deserialization with 422.

mod error;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use todo_core::{Todo, TodoService};

pub use error::ApiError;

/// Request payload for creating a new todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Carries the id of the
/// target record; title and completed replace the stored fields wholesale.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Build the router over an injected service.
pub fn app(service: TodoService) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).patch(update_todo),
        )
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the app on the given listener until the process exits.
pub async fn run(listener: TcpListener, service: TodoService) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}

async fn list_todos(State(service): State<TodoService>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(service.list_all().await?))
}

async fn get_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.get(&id).await?))
}

async fn create_todo(
    State(service): State<TodoService>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = service.create(input.title, input.completed).await?;
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(service): State<TodoService>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = service
        .update(&input.id, input.title, input.completed)
        .await?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete(&id).await?;
    tracing::info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: "0".to_string(),
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "0");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_accepts_explicit_completed() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","completed":true}"#).unwrap();
        assert!(input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_requires_every_field() {
        let full: UpdateTodo =
            serde_json::from_str(r#"{"id":"1","title":"New","completed":true}"#).unwrap();
        assert_eq!(full.id, "1");
        assert_eq!(full.title, "New");
        assert!(full.completed);

        let missing_id: Result<UpdateTodo, _> =
            serde_json::from_str(r#"{"title":"New","completed":true}"#);
        assert!(missing_id.is_err());

        let missing_completed: Result<UpdateTodo, _> =
            serde_json::from_str(r#"{"id":"1","title":"New"}"#);
        assert!(missing_completed.is_err());
    }
}
