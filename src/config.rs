use std::time::Duration;

use crate::sign::SignatureMethod;

/// IAM Query API version sent with every request.
pub(crate) const API_VERSION: &str = "2010-05-08";

/// Configuration for the IAM client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// IAM API endpoint URL.
    pub endpoint: String,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// TCP connect timeout.
    pub connect_timeout: Duration,

    /// How long idle pooled connections are kept alive.
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,

    /// TCP keepalive interval, disabled when `None`.
    pub tcp_keepalive: Option<Duration>,

    /// HMAC algorithm used for request signatures.
    pub signature_method: SignatureMethod,

    /// API version (always "2010-05-08").
    pub(crate) api_version: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://iam.amazonaws.com".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 8,
            tcp_keepalive: None,
            signature_method: SignatureMethod::default(),
            api_version: API_VERSION,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the TCP connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the idle timeout for pooled connections.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Sets the maximum number of idle connections per host.
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enables TCP keepalive with the given interval.
    pub fn with_tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = Some(interval);
        self
    }

    /// Selects the HMAC algorithm used to sign requests.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.signature_method = method;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://iam.amazonaws.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.signature_method, SignatureMethod::HmacSha256);
        assert_eq!(config.api_version, "2010-05-08");
        assert!(config.tcp_keepalive.is_none());
    }

    #[test]
    fn custom_endpoint() {
        let config = ClientConfig::default().with_endpoint("https://iam.us-gov.amazonaws.com");
        assert_eq!(config.endpoint, "https://iam.us-gov.amazonaws.com");
    }

    #[test]
    fn custom_timeouts() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(60))
            .with_connect_timeout(Duration::from_secs(3))
            .with_pool_idle_timeout(Duration::from_secs(15));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(15));
    }

    #[test]
    fn custom_pool_and_keepalive() {
        let config = ClientConfig::default()
            .with_pool_max_idle_per_host(2)
            .with_tcp_keepalive(Duration::from_secs(45));
        assert_eq!(config.pool_max_idle_per_host, 2);
        assert_eq!(config.tcp_keepalive, Some(Duration::from_secs(45)));
    }

    #[test]
    fn custom_signature_method() {
        let config = ClientConfig::default().with_signature_method(SignatureMethod::HmacSha1);
        assert_eq!(config.signature_method, SignatureMethod::HmacSha1);
    }
}
