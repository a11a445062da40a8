//! Read-only JSON API over the embedded portfolio documents, for consumers
//! other than the site itself.

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use http::StatusCode;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::portfolio::{
    load_profile, load_projects, load_skills, PortfolioError, Profile, Project, Skill,
};

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api", get(welcome))
        .route("/api/profile", get(profile))
        .route("/api/skills", get(skills))
        .route("/api/projects", get(projects))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

struct ApiError(PortfolioError);

impl From<PortfolioError> for ApiError {
    fn from(err: PortfolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "couldn't serve portfolio document");
        let body = Json(json!({ "error": self.0.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

async fn welcome() -> Result<Json<Value>, ApiError> {
    let profile = load_profile()?;
    Ok(Json(json!({
        "message": format!("Welcome to {}'s Portfolio API", profile.first_name())
    })))
}

async fn profile() -> Result<Json<Profile>, ApiError> {
    Ok(Json(load_profile()?))
}

async fn skills() -> Result<Json<Vec<Skill>>, ApiError> {
    Ok(Json(load_skills()?))
}

async fn projects() -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(load_projects()?))
}
