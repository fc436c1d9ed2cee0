//! Per-client admission control for the API routes

use super::state::AppState;
use crate::config::{LimiterSettings, RealIpMethod};
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{debug, warn};

/// Body returned with 429 responses
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests, please try again later.";

/// Keyed GCRA limiter: `max_requests` per client address per window
pub struct ClientLimiter {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
    real_ip_method: RealIpMethod,
}

impl ClientLimiter {
    /// Build a limiter, or `None` when limiting is disabled
    pub fn new(settings: &LimiterSettings, real_ip_method: RealIpMethod) -> Option<Self> {
        if !settings.enabled {
            return None;
        }

        let Some(burst) = NonZeroU32::new(settings.max_requests) else {
            warn!("limiter.max_requests is 0, rate limiting disabled");
            return None;
        };

        let window = Duration::from_secs(settings.window_secs.max(1));
        let quota = Quota::with_period(window / burst.get())?.allow_burst(burst);

        Some(Self {
            limiter: RateLimiter::keyed(quota),
            real_ip_method,
        })
    }

    /// Admit or reject one request from `ip`
    pub fn check(&self, ip: IpAddr) -> bool {
        self.limiter.check_key(&ip).is_ok()
    }

    /// Drop state for clients whose allowance is fully replenished
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
    }

    /// Determine the client address according to the configured method
    pub fn client_ip(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
        let from_header = match self.real_ip_method {
            RealIpMethod::XForwardedFor => headers
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .and_then(|v| v.trim().parse().ok()),
            RealIpMethod::XRealIp => headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok()),
            RealIpMethod::Connection => None,
        };

        from_header.or_else(|| peer.map(|addr| addr.ip()))
    }
}

/// Middleware rejecting clients that exceeded their allowance
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(limiter) = state.limiter.as_deref() else {
        return next.run(request).await;
    };

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ip = limiter
        .client_ip(request.headers(), peer)
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if limiter.check(ip) {
        next.run(request).await
    } else {
        debug!("Rate limit exceeded for {}", ip);
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "error": RATE_LIMITED_MESSAGE })),
        )
            .into_response()
    }
}
