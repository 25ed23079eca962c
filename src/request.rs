//! Request building and signing logic for the IAM Query API.

use std::collections::BTreeMap;

use reqwest::Url;

use crate::action::Action;
use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::{IamError, Result};
use crate::sign::{Signer, percent_encode};

/// HTTP method an action is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flat, string-keyed parameter set of a single request.
///
/// Keys are unique and kept sorted, which is also the order the signature
/// canonicalizes them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Sets `key` only when `value` is present and non-empty.
    ///
    /// An absent key and an empty value mean different things to IAM, so
    /// optional fields are never sent empty.
    pub fn insert_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value
            && !value.is_empty()
        {
            self.insert(key, value);
        }
    }

    /// Sets `key` only when `value` is present and non-zero.
    pub fn insert_nonzero(&mut self, key: &str, value: Option<u32>) {
        if let Some(value) = value
            && value > 0
        {
            self.insert(key, value.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the set as `k1=v1&k2=v2`, sorted by key and percent-encoded.
    ///
    /// Used verbatim as the GET query string, the POST form body, and the
    /// canonical query of the signature.
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Request-side cursor shared by every list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Marker returned by the previous truncated page.
    pub marker: Option<String>,
    /// Page size; `None` or `0` leaves it to the service default.
    pub max_items: Option<u32>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor that continues after the given marker.
    pub fn after(marker: impl Into<String>) -> Self {
        Self {
            marker: Some(marker.into()),
            max_items: None,
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn with_max_items(mut self, max_items: u32) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub(crate) fn apply(&self, params: &mut ParameterSet) {
        params.insert_opt("Marker", self.marker.as_deref());
        params.insert_nonzero("MaxItems", self.max_items);
    }
}

/// A signed request ready to hand to the HTTP client.
#[derive(Debug)]
pub(crate) enum PreparedRequest {
    /// Parameters live in the query string.
    Get { url: Url },
    /// Parameters live in the form-encoded body; the URL is the bare endpoint.
    Post { url: Url, body: String },
}

/// Gets the current UTC time as an RFC 3339 timestamp.
fn get_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Assembles the unsigned parameter set: the action's own fields plus
/// `Action`, `Version` and `Timestamp`.
pub(crate) fn assemble_params<A: Action>(
    action: &A,
    api_version: &str,
    timestamp: &str,
) -> ParameterSet {
    let mut params = ParameterSet::new();
    action.to_params(&mut params);
    params.insert("Action", A::NAME);
    params.insert("Version", api_version);
    params.insert("Timestamp", timestamp);
    params
}

/// Returns the `host[:port]` authority the signature is computed over.
fn endpoint_host(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| IamError::Endpoint(format!("{} has no host", url)))?;
    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Builds a signed request for an IAM action.
///
/// This function:
/// 1. Parses the configured endpoint
/// 2. Assembles the action's parameters with `Action`, `Version`, `Timestamp`
/// 3. Signs the complete set exactly once
/// 4. Encodes it into the query string (GET) or form body (POST)
///
/// # Errors
///
/// Returns [`IamError`] if:
///   - The endpoint is not an absolute URL with a host
///   - Signature computation fails
pub(crate) fn build_signed_request<A: Action>(
    action: &A,
    credential: &Credential,
    config: &ClientConfig,
    signer: &dyn Signer,
) -> Result<PreparedRequest> {
    let mut url = Url::parse(&config.endpoint)
        .map_err(|e| IamError::Endpoint(format!("{}: {}", config.endpoint, e)))?;
    let host = endpoint_host(&url)?;

    let mut params = assemble_params(action, config.api_version, &get_timestamp());
    signer.sign(credential, A::METHOD, url.path(), &mut params, &host)?;

    let encoded = params.encode();
    Ok(match A::METHOD {
        HttpMethod::Get => {
            url.set_query(Some(&encoded));
            PreparedRequest::Get { url }
        }
        HttpMethod::Post => PreparedRequest::Post { url, body: encoded },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{CreateGroupRequest, ListUsersRequest, PutUserPolicyRequest};
    use crate::sign::SignatureV2;

    fn test_credential() -> Credential {
        Credential::new("AKIDEXAMPLE", "test_secret")
    }

    fn query_pairs(url: &Url) -> BTreeMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    fn form_pairs(body: &str) -> BTreeMap<String, String> {
        Url::parse(&format!("http://localhost/?{}", body))
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn insert_opt_skips_none_and_empty() {
        let mut params = ParameterSet::new();
        params.insert_opt("Path", None);
        params.insert_opt("PathPrefix", Some(""));
        params.insert_opt("UserName", Some("Bob"));
        assert!(!params.contains_key("Path"));
        assert!(!params.contains_key("PathPrefix"));
        assert_eq!(params.get("UserName"), Some("Bob"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn insert_nonzero_skips_none_and_zero() {
        let mut params = ParameterSet::new();
        params.insert_nonzero("MaxItems", None);
        assert!(params.is_empty());
        params.insert_nonzero("MaxItems", Some(0));
        assert!(params.is_empty());
        params.insert_nonzero("MaxItems", Some(25));
        assert_eq!(params.get("MaxItems"), Some("25"));
    }

    #[test]
    fn encode_is_sorted_and_percent_encoded() {
        let mut params = ParameterSet::new();
        params.insert("Path", "/division abc/");
        params.insert("Action", "CreateUser");
        assert_eq!(
            params.encode(),
            "Action=CreateUser&Path=%2Fdivision%20abc%2F"
        );
    }

    #[test]
    fn pagination_apply() {
        let mut params = ParameterSet::new();
        Pagination::new().apply(&mut params);
        assert!(params.is_empty());

        Pagination::after("X").with_max_items(10).apply(&mut params);
        assert_eq!(params.get("Marker"), Some("X"));
        assert_eq!(params.get("MaxItems"), Some("10"));
    }

    #[test]
    fn assemble_params_adds_protocol_fields() {
        let params = assemble_params(
            &CreateGroupRequest::new("Admins"),
            "2010-05-08",
            "2024-01-01T00:00:00Z",
        );
        assert_eq!(params.get("Action"), Some("CreateGroup"));
        assert_eq!(params.get("Version"), Some("2010-05-08"));
        assert_eq!(params.get("Timestamp"), Some("2024-01-01T00:00:00Z"));
        assert_eq!(params.get("GroupName"), Some("Admins"));
        assert!(!params.contains_key("Path"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let ts = get_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn build_get_request_puts_params_in_query() {
        let config = ClientConfig::default();
        let request = build_signed_request(
            &ListUsersRequest::new().with_path_prefix("/engineering/"),
            &test_credential(),
            &config,
            &SignatureV2::default(),
        )
        .unwrap();

        let PreparedRequest::Get { url } = request else {
            panic!("ListUsers must be a GET request");
        };
        assert_eq!(url.host_str(), Some("iam.amazonaws.com"));
        assert_eq!(url.path(), "/");
        let query = query_pairs(&url);
        assert_eq!(query["Action"], "ListUsers");
        assert_eq!(query["Version"], "2010-05-08");
        assert_eq!(query["PathPrefix"], "/engineering/");
        assert_eq!(query["AWSAccessKeyId"], "AKIDEXAMPLE");
        assert!(query.contains_key("Timestamp"));
        assert!(query.contains_key("Signature"));
        assert!(!query.contains_key("Marker"));
        assert!(!query.contains_key("MaxItems"));
    }

    #[test]
    fn build_post_request_puts_params_in_body() {
        let document = "{\n  \"Statement\": [{\"Effect\": \"Allow\", \"Action\": \"*\"}]\n}";
        let config = ClientConfig::default().with_endpoint("http://127.0.0.1:8080");
        let request = build_signed_request(
            &PutUserPolicyRequest::new("Bob", "AllAccessPolicy", document),
            &test_credential(),
            &config,
            &SignatureV2::default(),
        )
        .unwrap();

        let PreparedRequest::Post { url, body } = request else {
            panic!("PutUserPolicy must be a POST request");
        };
        assert!(url.query().is_none());
        let form = form_pairs(&body);
        assert_eq!(form["Action"], "PutUserPolicy");
        assert_eq!(form["PolicyDocument"], document);
        assert!(form.contains_key("Signature"));
    }

    #[test]
    fn build_rejects_malformed_endpoint() {
        let config = ClientConfig::default().with_endpoint("not a url");
        let err = build_signed_request(
            &ListUsersRequest::new(),
            &test_credential(),
            &config,
            &SignatureV2::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IamError::Endpoint(_)));
    }

    #[test]
    fn endpoint_host_keeps_explicit_port() {
        let url = Url::parse("http://127.0.0.1:4566/").unwrap();
        assert_eq!(endpoint_host(&url).unwrap(), "127.0.0.1:4566");
        let url = Url::parse("https://iam.amazonaws.com").unwrap();
        assert_eq!(endpoint_host(&url).unwrap(), "iam.amazonaws.com");
    }
}
