//! Configuration schema types for NOID.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod endpoint;
mod logging;
mod messages;
mod proxy;

pub use endpoint::*;
pub use logging::*;
pub use messages::*;
pub use proxy::*;

use serde::{Deserialize, Serialize};

/// Root configuration shared by the chat front-end and the relay proxy.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NoidConfig {
    pub endpoint: EndpointConfig,
    pub messages: MessagesConfig,
    pub proxy: ProxyConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: NoidConfig = toml::from_str("").unwrap();
        assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.proxy.model, DEFAULT_PROXY_MODEL);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: NoidConfig = toml::from_str(
            r#"
[endpoint]
url = "https://chat.example.com/generate"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint.url, "https://chat.example.com/generate");
        assert_eq!(config.endpoint.connect_timeout_secs, 10);
        assert_eq!(config.endpoint.request_timeout_secs, 0);
        assert!(!config.messages.no_reply.is_empty());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = NoidConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: NoidConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.proxy.bind, config.proxy.bind);
        assert_eq!(back.messages.greeting, config.messages.greeting);
    }
}
