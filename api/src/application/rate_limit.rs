use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::http::server::{api_entities::api_error::ApiError, app_state::ClientRateLimiter};

/// Peer address of the connection. Requests served without connect info share one bucket.
fn client_ip(req: &Request) -> IpAddr {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Rejects a client with 429 once it has spent its per-minute quota.
pub async fn rate_limit(
    State(limiter): State<Arc<ClientRateLimiter>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ip = client_ip(&req);

    if limiter.check_key(&ip).is_err() {
        warn!(%ip, path = %req.uri().path(), "rate limit exceeded");
        return Err(ApiError::TooManyRequests(
            "Too many requests, please try again later".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
