use crate::handler::SkillHandler;
use anyhow::Result;
use axum::{
    body::{Body, Bytes},
    http::{Response as HttpResponse, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use country_protocol::SkillRequest;
use country_resolver::CountryLookup;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
}

/// `POST /skill` takes a skill request, `GET /health` answers `{"status":"ok"}`.
pub fn router<L>(handler: SkillHandler<L>) -> Router
where
    L: CountryLookup + 'static,
{
    let handler = Arc::new(handler);
    Router::new()
        .route(
            "/skill",
            post({
                let handler = handler.clone();
                move |body: Bytes| skill_endpoint(body, handler.clone())
            }),
        )
        .route("/health", get(health_endpoint))
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

async fn skill_endpoint<L>(
    body: Bytes,
    handler: Arc<SkillHandler<L>>,
) -> Result<Response, StatusCode>
where
    L: CountryLookup + 'static,
{
    let request: SkillRequest = serde_json::from_slice(&body).map_err(|err| {
        log::warn!("Rejected skill request: {err}");
        StatusCode::BAD_REQUEST
    })?;

    let response = handler.handle(&request).await.map_err(|err| {
        log::error!("Skill request failed: {err:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    json_response(&response)
}

async fn health_endpoint() -> Result<Response, StatusCode> {
    json_response(&HealthReport { status: "ok" })
}

fn json_response<T: Serialize>(value: &T) -> Result<Response, StatusCode> {
    let bytes = serde_json::to_vec(value).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    HttpResponse::builder()
        .status(StatusCode::OK)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
