use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header::{HeaderName, HeaderValue}},
    middleware::Next,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use app::api::MailConfig;

/// Static security headers added to every response.
const SECURITY_HEADERS: [(&str, &str); 6] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    (
        "permissions-policy",
        "geolocation=(), microphone=(), camera=(), payment=(), usb=()",
    ),
    // WASM needs 'wasm-unsafe-eval'; Leptos emits inline styles. Profile
    // links and mailto: are plain navigations, so nothing else is allowed.
    (
        "content-security-policy",
        "default-src 'self'; script-src 'self' 'wasm-unsafe-eval'; style-src 'self' 'unsafe-inline'; \
         img-src 'self' data: https:; font-src 'self' data:; connect-src 'self'; \
         frame-ancestors 'none'; base-uri 'self'; form-action 'self'",
    ),
];

/// Server functions live under this prefix; only they are rate limited.
pub const SERVER_FN_PREFIX: &str = "/api/";

pub async fn security_headers(req: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    response
}

/// Sliding-window request limiter keyed by client IP.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<HashMap<String, Vec<Instant>>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_secs: u64) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    async fn check_rate_limit(&self, ip: &str) -> bool {
        let mut requests = self.requests.lock().await;
        let now = Instant::now();

        requests.retain(|_, history| {
            history.retain(|&time| now.duration_since(time) < self.window);
            !history.is_empty()
        });

        let history = requests.entry(ip.to_owned()).or_default();

        if history.len() < self.max_requests {
            history.push(now);
            true
        } else {
            false
        }
    }

    /// Rejects server-function calls over the limit with 429; page and asset
    /// requests pass through untouched.
    pub async fn middleware(self, req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
        if !req.uri().path().starts_with(SERVER_FN_PREFIX) {
            return Ok(next.run(req).await);
        }

        let ip = client_ip(&req);
        if !self.check_rate_limit(&ip).await {
            tracing::warn!(%ip, path = req.uri().path(), "Rate limit exceeded");
            return Err(StatusCode::TOO_MANY_REQUESTS);
        }

        Ok(next.run(req).await)
    }
}

fn client_ip(req: &Request<Body>) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map_or("unknown", str::trim)
        .to_owned()
}

/// Checks that the contact form can deliver mail.
///
/// Outside production missing settings are tolerated; the contact server
/// function reports them per request instead.
pub fn validate_contact_env(lookup: impl Fn(&str) -> Option<String>) -> Result<(), Vec<String>> {
    let is_production = lookup("RUST_ENV").is_some_and(|env| env == "production");
    if !is_production {
        return Ok(());
    }

    let errors: Vec<String> = MailConfig::REQUIRED_VARS
        .iter()
        .filter(|var| lookup(var).is_none_or(|value| value.trim().is_empty()))
        .map(|var| format!("Missing required environment variable: {var}"))
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
