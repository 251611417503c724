use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use log::debug;

// Proxy headers carrying the real client address, most trusted first.
const IP_HEADERS: [&str; 3] = ["CF-Connecting-IP", "True-Client-IP", "X-Real-IP"];

/// Extracts the real client IP from proxy headers, falling back to the
/// peer address of the connection.
pub fn client_ip(request: &Request) -> String
{
    let headers = request.headers();

    for name in IP_HEADERS {
        if let Some(ip) = headers.get(name).and_then(|v| v.to_str().ok()) {
            if !ip.is_empty() {
                return ip.to_string();
            }
        }
    }

    // X-Forwarded-For is a comma separated chain; the first hop is the client.
    if let Some(xff) = headers.get("X-Forwarded-For").and_then(|v| v.to_str().ok()) {
        let first = xff.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    match request.extensions().get::<ConnectInfo<SocketAddr>>() {
        Some(ConnectInfo(addr)) => addr.ip().to_string(),
        None => "unknown".to_string(),
    }
}

pub async fn log_request(request: Request, next: Next) -> Response
{
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let ip = client_ip(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    debug!(
        "{} {} -> {} in {:?} from {}",
        method,
        path,
        response.status(),
        start.elapsed(),
        ip
    );

    response
}
