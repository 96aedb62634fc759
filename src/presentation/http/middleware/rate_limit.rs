// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type AuthRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter for the credential endpoints. `per_second` is the
/// sustained rate, `burst` the bucket size. Returns `None` when either is zero.
pub fn rate_limit_layer(per_second: u32, burst: u32) -> Option<AuthRateLimitLayer> {
    if per_second == 0 || burst == 0 {
        return None;
    }

    let replenish_ms = (1000 / u64::from(per_second)).max(1);
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(replenish_ms);
    builder.burst_size(burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
