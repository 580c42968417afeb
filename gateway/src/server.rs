use crate::templates::{ERROR_PAGE, Templates};
use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use gateway_core::{GatewayError, PageAssembler, PageView};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error};

/// Sent with every rendered identifier page, including the not-found view.
pub const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=604800";

pub struct AppState {
    pub assembler: PageAssembler,
    pub templates: Templates,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Template render failed: {0}")]
    Template(#[from] liquid::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Gateway(e) if e.is_upstream() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (self.status(), Html(ERROR_PAGE)).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/id/{identifier}", get(handle_id))
        .with_state(state)
}

async fn handle_id(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Result<Response, ServerError> {
    let start = Instant::now();
    let body = match state.assembler.assemble(&identifier).await? {
        PageView::Found(page) => {
            debug!("{}: {} ({})", identifier, page.tier, page.status);
            state.templates.render_id(&page)?
        }
        PageView::NotFound(missing) => {
            debug!("{}: not found", identifier);
            state.templates.render_not_found(&missing)?
        }
    };
    debug!("Served {} in {:?}", identifier, start.elapsed());

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL)], Html(body)).into_response())
}
