use anyhow::{Result, anyhow};
use axum::Router;
use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::infrastructure::settings::Settings;

fn allowed_origins(origins: &[String]) -> Result<AllowOrigin> {
    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return Ok(AllowOrigin::from(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| anyhow!("invalid CORS origin: {err}"))?;
    Ok(AllowOrigin::list(origins))
}

pub(crate) fn build_cors_layer(settings: &Settings) -> Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(allowed_origins(&settings.cors_origins)?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

pub(crate) fn apply_cors(router: Router, settings: &Settings) -> Result<Router> {
    let cors = build_cors_layer(settings)?;
    Ok(router.layer(cors))
}
