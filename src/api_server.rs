// Axum server: full page render, htmx fragments, JSON endpoints
//
// Every page load opens a page view; the browser then posts scroll samples
// and collection toggles against that view and swaps the returned fragments.

use std::path::PathBuf;
use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, DefaultBodyLimit, Form, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_htmx::{HxRefresh, HxRequest};
use chrono::Datelike;
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::navigation::{ScrollSample, ScrollSpyConfig, SectionRegistry};
use crate::portfolio::Portfolio;
use crate::site::pages::{CollectionTemplate, HomeTemplate, IconSet, NavTemplate};
use crate::site::{build_collection, build_nav, build_page};
use crate::views::{ViewNotFound, ViewRegistry};

/// Scroll samples and toggles are a handful of numbers; anything larger is
/// not from our page.
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    pub sections: Arc<SectionRegistry>,
    pub scroll: ScrollSpyConfig,
    pub views: ViewRegistry,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(portfolio: Portfolio, config: &ServerConfig) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            sections: Arc::new(SectionRegistry::standard()),
            scroll: config.scroll,
            views: ViewRegistry::new(config.view_ttl, config.view_capacity),
            assets_dir: config.assets_dir.clone(),
        }
    }

    /// Load (and validate) the portfolio named by the config, falling back to
    /// the embedded content.
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading portfolio content...");
        let portfolio = Portfolio::load_or_embedded(config.portfolio_path.as_deref())?;
        tracing::info!(
            "Loaded portfolio for {} ({} project entries, {} skill categories)",
            portfolio.name,
            portfolio.projects.len(),
            portfolio.skills.len()
        );
        Ok(Self::new(portfolio, config))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.assets_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Page + htmx fragments
        .route("/", get(home_page))
        .route("/views/:view_id/scroll", post(scroll_view))
        .route(
            "/views/:view_id/collections/:collection_id/toggle",
            post(toggle_collection),
        )
        .route("/views/:view_id/close", post(close_view))

        // Read-only content (JSON)
        .route("/api/portfolio", get(get_portfolio))

        // Static files (stylesheet, resume)
        .nest_service("/assets", assets)

        // Middleware (applied in reverse order)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(Debug, Deserialize)]
struct HomeQuery {
    view: Option<String>,
}

/// GET /
///
/// Reuses `?view=<id>` when that view is still live (the no-JS toggle
/// redirect lands here), otherwise opens a fresh one.
async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Response, AppError> {
    let existing = match query.view.as_deref() {
        Some(id) => state.views.get(id).await.map(|view| (id.to_string(), view)),
        None => None,
    };
    let (view_id, view) = match existing {
        Some(found) => found,
        None => state.views.open(&state.sections).await,
    };

    let year = chrono::Utc::now().year();
    let page = build_page(&state.portfolio, &state.sections, &view, year);
    let html = render(&HomeTemplate::new(view_id, page))?;

    Ok(([(header::CACHE_CONTROL, "no-store")], html).into_response())
}

/// POST /views/:view_id/scroll
///
/// Body: `scroll_y=<px>&top_<section>=<px>...`. Returns the nav fragment when
/// the scroll state changed, 204 otherwise.
async fn scroll_view(
    State(state): State<AppState>,
    Path(view_id): Path<String>,
    HxRequest(is_htmx): HxRequest,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(fields) = form?;
    let sample = ScrollSample::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let update = state
        .views
        .update(&view_id, |view| {
            let before = view.scroll.active.clone();
            let changed = view.apply_scroll(&sample, &state.sections, &state.scroll);
            (changed, before, view.scroll.clone())
        })
        .await
        .map_err(|err| AppError::view_gone(err, is_htmx))?;

    let (changed, before, scroll) = update;
    if !changed {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    if before != scroll.active {
        tracing::debug!(
            view_id = %view_id,
            from = %before,
            to = %scroll.active,
            direction = ?scroll.direction,
            "active section changed"
        );
    }

    let template = NavTemplate {
        view_id,
        nav: build_nav(&state.sections, &scroll),
    };
    Ok(render(&template)?.into_response())
}

/// POST /views/:view_id/collections/:collection_id/toggle
///
/// htmx swaps the returned collection fragment in place; a plain form post
/// is redirected back to the page at the collection.
async fn toggle_collection(
    State(state): State<AppState>,
    Path((view_id, collection_id)): Path<(String, String)>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    let collection = state
        .portfolio
        .collection(&collection_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown collection: {}", collection_id)))?;

    let expanded = state
        .views
        .update(&view_id, |view| view.toggle_collection(&collection_id))
        .await
        .map_err(|err| AppError::view_gone(err, is_htmx))?;
    tracing::debug!(view_id = %view_id, collection = %collection_id, expanded, "collection toggled");

    if !is_htmx {
        let target = format!(
            "/?view={}#{}",
            urlencoding::encode(&view_id),
            urlencoding::encode(collection.element_id())
        );
        return Ok(Redirect::to(&target).into_response());
    }

    let template = CollectionTemplate {
        view_id,
        collection: build_collection(collection, expanded),
        icons: IconSet,
    };
    Ok(render(&template)?.into_response())
}

/// POST /views/:view_id/close
async fn close_view(State(state): State<AppState>, Path(view_id): Path<String>) -> StatusCode {
    state.views.close(&view_id).await;
    StatusCode::NO_CONTENT
}

/// GET /api/portfolio
async fn get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| {
        tracing::error!("Template error: {}", e);
        AppError::Internal(format!("Template error: {}", e))
    })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// Page view closed or expired. htmx callers are told to reload the page,
    /// which opens a fresh view.
    ViewGone { message: String, refresh: bool },
    BadRequest(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
            _ => AppError::BadRequest(rejection.body_text()),
        }
    }
}

impl AppError {
    fn view_gone(err: ViewNotFound, is_htmx: bool) -> Self {
        AppError::ViewGone {
            message: err.to_string(),
            refresh: is_htmx,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ViewGone { message, refresh } => {
                let body = Json(serde_json::json!({ "error": message }));
                return (StatusCode::NOT_FOUND, HxRefresh(refresh), body).into_response();
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
