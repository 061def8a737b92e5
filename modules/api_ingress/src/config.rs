use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SEC: u64 = 30;
const DEFAULT_BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

/// API ingress configuration.
///
/// Built from the `server` section by default; a `modules.api_ingress` section
/// overrides it as a whole.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    pub bind_addr: String,
    #[serde(default)]
    pub cors_enabled: bool,
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_timeout_sec() -> u64 {
    DEFAULT_TIMEOUT_SEC
}

fn default_body_limit_bytes() -> usize {
    DEFAULT_BODY_LIMIT_BYTES
}

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self::from_server(&runtime::ServerConfig::default())
    }
}

impl ApiIngressConfig {
    pub fn from_server(server: &runtime::ServerConfig) -> Self {
        let timeout_sec = if server.timeout_sec == 0 {
            DEFAULT_TIMEOUT_SEC
        } else {
            server.timeout_sec
        };
        Self {
            bind_addr: format!("{}:{}", server.host, server.port),
            cors_enabled: server.cors_enabled,
            timeout_sec,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}
