use std::net::SocketAddr;
use std::time::Duration;

use axum::middleware::from_fn;
use axum::{extract, http, response::IntoResponse, routing, Json, Router};
use crd_validation::Tag;
use log::info;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::gh::GhPath;
use crate::middleware::log_request;
use crate::ServerResult;

static NOT_FOUND: (http::StatusCode, &'static str) =
    (http::StatusCode::NOT_FOUND, "No such reference");

static INVALID_TAG: (http::StatusCode, &'static str) =
    (http::StatusCode::BAD_REQUEST, "Invalid tag format");

pub async fn run() -> ServerResult<()>
{
    let app = Router::new()
        .route("/{*path}", routing::get(get_reference))
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(from_fn(log_request)),
        );

    let address = format!("{}:{}", Config::readu().address, Config::readu().port);
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn fallback() -> (http::StatusCode, &'static str)
{
    NOT_FOUND
}

/// Resolves a `github.com/{org}/{repo}/{group}/{version}/{kind}[@{tag}]`
/// path and reports its components. Nothing is fetched or cloned here; the
/// endpoint only decides whether the reference is safe to act on.
async fn get_reference(extract::Path(path): extract::Path<String>) -> impl IntoResponse
{
    let gh = match GhPath::try_from(path.as_str()) {
        Ok(gh) => gh,
        Err(err) => {
            info!("Rejected path {:?}: {}", path, err);
            return NOT_FOUND.into_response();
        }
    };

    if !gh.tag.is_empty() && Tag::try_from(gh.tag.as_str()).is_err() {
        info!("Rejected tag {:?}", gh.tag);
        return INVALID_TAG.into_response();
    }

    info!(
        "Resolved {}/{}: {}/{} kind {}",
        gh.org, gh.repo, gh.group, gh.version, gh.kind
    );
    Json(gh).into_response()
}
