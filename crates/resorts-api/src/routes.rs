use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use resorts_core::db::{Database, ResortRepository, SqliteResortRepository};
use resorts_core::{Resort, ResortFields, ResortId, ResortUpdate};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    pub fn from_config(config: &AppConfig) -> resorts_core::Result<Self> {
        Ok(Self::new(Database::open(&config.db_path)?))
    }

    async fn with_repo<T>(
        &self,
        operation: impl FnOnce(&SqliteResortRepository<'_>) -> resorts_core::Result<T> + Send,
    ) -> Result<T, AppError> {
        let db = self.db.lock().await;
        let repo = SqliteResortRepository::new(db.connection());
        Ok(operation(&repo)?)
    }
}

pub fn app_router(state: AppState) -> Router {
    let resort_routes = Router::new()
        .route("/resorts", get(list_resorts).post(create_resort))
        .route("/resorts/{id}", get(get_resort).put(update_resort).delete(delete_resort));

    Router::new()
        .route("/health", get(health))
        .nest("/api", resort_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "ski-resort-api",
    })
}

async fn list_resorts(State(state): State<AppState>) -> Result<Json<Vec<Resort>>, AppError> {
    let resorts = state.with_repo(|repo| repo.list()).await?;
    Ok(Json(resorts))
}

async fn get_resort(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resort>, AppError> {
    let id = ResortId::from(id);
    let resort = state
        .with_repo(|repo| repo.get(&id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(resort))
}

async fn create_resort(
    State(state): State<AppState>,
    Json(fields): Json<ResortFields>,
) -> Result<(StatusCode, Json<Resort>), AppError> {
    let resort = state.with_repo(|repo| repo.create(&fields)).await?;
    tracing::info!(resort = %resort.id, name = %resort.name, "Created resort");
    Ok((StatusCode::CREATED, Json(resort)))
}

async fn update_resort(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ResortUpdate>,
) -> Result<Json<Resort>, AppError> {
    let id = ResortId::from(id);
    let resort = state
        .with_repo(|repo| {
            let current = repo
                .get(&id)?
                .ok_or_else(|| resorts_core::Error::NotFound(id.to_string()))?;
            repo.update(&id, &update.merged_onto(&current))
        })
        .await?;
    tracing::info!(resort = %resort.id, "Updated resort");
    Ok(Json(resort))
}

async fn delete_resort(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = ResortId::from(id);
    state.with_repo(|repo| repo.delete(&id)).await?;
    tracing::info!(resort = %id, "Deleted resort");
    Ok(Json(MessageResponse {
        message: "Resort deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{self, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use resorts_core::Difficulty;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> Router {
        app_router(AppState::new(Database::open_in_memory().expect("db")))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json")
        };
        (status, value)
    }

    fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    #[tokio::test]
    async fn health_reports_service() {
        let app = test_app();
        let (status, body) = send(&app, empty_request("GET", "/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy", "service": "ski-resort-api"}));
    }

    #[tokio::test]
    async fn create_returns_created_record() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/resorts",
                &json!({"name": "Alpine Peak", "location": "Rockies", "slopes": 12, "difficulty": "Advanced"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: Resort = serde_json::from_value(body).expect("resort");
        assert_eq!(created.slopes, 12);
        assert_eq!(created.difficulty, Difficulty::Advanced);

        let (status, body) = send(&app, empty_request("GET", "/api/resorts")).await;
        assert_eq!(status, StatusCode::OK);
        let listed: Vec<Resort> = serde_json::from_value(body).expect("list");
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn create_applies_defaults_and_accepts_text_slopes() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request("POST", "/api/resorts", &json!({"name": "Hakuba", "location": "Nagano"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["slopes"], 0);
        assert_eq!(body["difficulty"], "Beginner");

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/resorts",
                &json!({"name": "Niseko", "location": "Hokkaido", "slopes": "61"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["slopes"], 61);
    }

    #[tokio::test]
    async fn create_requires_name_and_location() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request("POST", "/api/resorts", &json!({"location": "Nagano", "slopes": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn update_replaces_fields_at_same_id() {
        let app = test_app();
        let (_, created) = send(
            &app,
            json_request(
                "POST",
                "/api/resorts",
                &json!({"name": "Vail", "location": "Colorado", "slopes": 195, "difficulty": "Intermediate"}),
            ),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, updated) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/resorts/{id}"),
                &json!({"name": "Vail", "location": "Colorado", "slopes": 200, "difficulty": "Expert"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["slopes"], 200);

        let (_, listed) = send(&app, empty_request("GET", "/api/resorts")).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_without_difficulty_keeps_stored_values() {
        let app = test_app();
        let (_, created) = send(
            &app,
            json_request(
                "POST",
                "/api/resorts",
                &json!({"name": "Jackson Hole", "location": "Wyoming", "slopes": 131, "difficulty": "Expert"}),
            ),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, updated) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/resorts/{id}"),
                &json!({"name": "Jackson Hole", "location": "Teton Village"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["location"], "Teton Village");
        assert_eq!(updated["slopes"], 131);
        assert_eq!(updated["difficulty"], "Expert");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = test_app();
        let payload = json!({"name": "Ghost", "location": "Nowhere", "slopes": 1});

        let (status, body) = send(&app, json_request("PUT", "/api/resorts/missing", &payload)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Resort not found"}));

        let (status, _) = send(&app, empty_request("DELETE", "/api/resorts/missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, empty_request("GET", "/api/resorts/missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_acknowledges_and_removes() {
        let app = test_app();
        let (_, created) = send(
            &app,
            json_request(
                "POST",
                "/api/resorts",
                &json!({"name": "Aspen", "location": "Colorado", "slopes": 40}),
            ),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, empty_request("DELETE", &format!("/api/resorts/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Resort deleted successfully"}));

        let (_, listed) = send(&app, empty_request("GET", "/api/resorts")).await;
        assert_eq!(listed, json!([]));
    }
}
