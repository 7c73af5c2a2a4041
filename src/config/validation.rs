//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limit > 0)
//! - Check addresses and the upstream URL parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listener bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid upstream url '{url}': {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("upstream timeout must be greater than zero")]
    ZeroUpstreamTimeout,

    #[error("request timeout ({request_ms} ms) must not be shorter than upstream timeout ({upstream_ms} ms)")]
    RequestTimeoutTooShort { request_ms: u64, upstream_ms: u64 },

    #[error("ranking limit must be greater than zero")]
    ZeroLimit,

    #[error("upstream header '{0}' must not be empty")]
    EmptyHeader(&'static str),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match url::Url::parse(&config.upstream.url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        Ok(parsed) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.url.clone(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_ms == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }

    let request_ms = config.timeouts.request_secs.saturating_mul(1000);
    if request_ms < config.upstream.timeout_ms {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_ms,
            upstream_ms: config.upstream.timeout_ms,
        });
    }

    if config.ranking.limit == 0 {
        errors.push(ValidationError::ZeroLimit);
    }

    if config.upstream.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyHeader("user_agent"));
    }
    if config.upstream.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHeader("host"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ProxyConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.url = "ftp://example.com/ticker".into();
        config.upstream.timeout_ms = 0;
        config.ranking.limit = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::InvalidBindAddress("not-an-address".into())));
        assert!(errors.contains(&ValidationError::ZeroUpstreamTimeout));
        assert!(errors.contains(&ValidationError::ZeroLimit));
        assert!(matches!(
            errors[1],
            ValidationError::InvalidUpstreamUrl { ref reason, .. } if reason.contains("ftp")
        ));
    }

    #[test]
    fn test_request_timeout_must_cover_upstream() {
        let mut config = ProxyConfig::default();
        config.timeouts.request_secs = 5;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RequestTimeoutTooShort {
                request_ms: 5000,
                upstream_ms: 8000,
            }]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ProxyConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidMetricsAddress("nowhere".into())]);
    }
}
