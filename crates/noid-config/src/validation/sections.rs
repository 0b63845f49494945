//! Per-section validators: endpoint, messages and proxy.

use std::net::SocketAddr;

use crate::schema::NoidConfig;

use super::helpers::{validate_http_url, validate_non_empty, validate_range, validate_range_f64};

/// Validate the completion endpoint.
pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &NoidConfig) {
    validate_http_url(errors, "endpoint.url", &config.endpoint.url);
    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        config.endpoint.connect_timeout_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        config.endpoint.request_timeout_secs,
        0,
        3600,
    );
}

/// The strings the session relies on to show progress and empty replies.
pub(crate) fn validate_messages(errors: &mut Vec<String>, config: &NoidConfig) {
    validate_non_empty(errors, "messages.loading", &config.messages.loading);
    validate_non_empty(errors, "messages.no_reply", &config.messages.no_reply);
}

/// Validate the relay proxy and its upstream model settings.
pub(crate) fn validate_proxy(errors: &mut Vec<String>, config: &NoidConfig) {
    let proxy = &config.proxy;
    if proxy.bind.parse::<SocketAddr>().is_err() {
        errors.push(format!(
            "proxy.bind = {:?} is not a socket address",
            proxy.bind
        ));
    }
    validate_non_empty(errors, "proxy.model", &proxy.model);
    validate_http_url(errors, "proxy.api_base", &proxy.api_base);
    validate_range(
        errors,
        "proxy.max_output_tokens",
        u64::from(proxy.max_output_tokens),
        1,
        65536,
    );
    validate_range_f64(errors, "proxy.temperature", proxy.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "proxy.upstream_timeout_secs",
        proxy.upstream_timeout_secs,
        1,
        600,
    );
}
