//! HTTP surface for the map and scanner clients.
//!
//! | Route               | Purpose                                   |
//! |---------------------|-------------------------------------------|
//! | `GET /api/landmarks`| full catalog, optional `?search=` filter  |
//! | `POST /api/glb-path`| resolve a scanned `building_code`         |
//! | `GET /health`       | liveness                                  |

pub mod payload;

use crate::core::{Landmark, LandmarkStore, LocatorService};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use payload::{ApiError, CatalogQuery, GlbPathRequest, GlbPathResponse};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn router<S>(service: LocatorService<S>, static_dir: Option<&str>) -> Router
where
    S: LandmarkStore + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/api/landmarks", get(list_landmarks::<S>))
        .route("/api/glb-path", post(glb_path::<S>))
        .route("/health", get(health));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).layer(TraceLayer::new_for_http()).with_state(service)
}

async fn list_landmarks<S>(
    State(service): State<LocatorService<S>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Landmark>>, ApiError>
where
    S: LandmarkStore + ?Sized + 'static,
{
    let landmarks = match query.search.as_deref() {
        Some(term) => service.search_landmarks(term).await?,
        None => service.list_landmarks().await?,
    };
    Ok(Json(landmarks))
}

async fn glb_path<S>(
    State(service): State<LocatorService<S>>,
    body: Result<Json<GlbPathRequest>, JsonRejection>,
) -> Result<Json<GlbPathResponse>, ApiError>
where
    S: LandmarkStore + ?Sized + 'static,
{
    // An unreadable body counts as a missing code
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable glb-path request body");
            GlbPathRequest::default()
        }
    };

    let resolution = service.resolve(request.building_code.as_deref()).await?;
    Ok(Json(resolution.into()))
}

async fn health() -> &'static str {
    "ok"
}
