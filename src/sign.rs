//! AWS Signature Version 2 for the IAM Query API.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::credential::Credential;
use crate::error::{IamError, Result};
use crate::request::{HttpMethod, ParameterSet};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// HMAC algorithm used to compute the request signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    #[default]
    HmacSha256,
    HmacSha1,
}

impl SignatureMethod {
    /// Value of the `SignatureMethod` request parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SignatureMethod::HmacSha256 => "HmacSHA256",
            SignatureMethod::HmacSha1 => "HmacSHA1",
        }
    }
}

/// Adds authentication entries to a request's parameter set.
///
/// Called exactly once per request, after every other parameter is in place
/// and before the set is encoded, so the signature covers all of it.
pub trait Signer: Send + Sync {
    fn sign(
        &self,
        credential: &Credential,
        method: HttpMethod,
        path: &str,
        params: &mut ParameterSet,
        host: &str,
    ) -> Result<()>;
}

/// AWS Signature Version 2 (query-string signing).
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureV2 {
    method: SignatureMethod,
}

impl SignatureV2 {
    pub fn new(method: SignatureMethod) -> Self {
        Self { method }
    }
}

impl Signer for SignatureV2 {
    /// Steps:
    /// 1. Add `AWSAccessKeyId`, `SignatureVersion`, `SignatureMethod` and,
    ///    for temporary credentials, `SecurityToken`.
    /// 2. Build the canonical query: sorted `key=value` pairs, percent-encoded.
    /// 3. StringToSign: `{method}\n{host}\n{path}\n{canonical_query}`.
    /// 4. HMAC with the secret access key, base64 encoded, stored as `Signature`.
    fn sign(
        &self,
        credential: &Credential,
        method: HttpMethod,
        path: &str,
        params: &mut ParameterSet,
        host: &str,
    ) -> Result<()> {
        params.insert("AWSAccessKeyId", credential.access_key_id.as_str());
        params.insert("SignatureVersion", "2");
        params.insert("SignatureMethod", self.method.as_str());
        if let Some(token) = &credential.session_token {
            params.insert("SecurityToken", token.as_str());
        }

        let path = if path.is_empty() { "/" } else { path };
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            method.as_str(),
            host.to_ascii_lowercase(),
            path,
            params.encode()
        );

        let signature = compute_hmac(
            self.method,
            credential.secret_access_key.as_bytes(),
            string_to_sign.as_bytes(),
        )?;
        params.insert("Signature", signature);
        Ok(())
    }
}

fn compute_hmac(method: SignatureMethod, key: &[u8], data: &[u8]) -> Result<String> {
    let digest = match method {
        SignatureMethod::HmacSha256 => {
            let mut mac = HmacSha256::new_from_slice(key)
                .map_err(|e| IamError::Signature(format!("HMAC key error: {}", e)))?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        SignatureMethod::HmacSha1 => {
            let mut mac = HmacSha1::new_from_slice(key)
                .map_err(|e| IamError::Signature(format!("HMAC key error: {}", e)))?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    };
    Ok(BASE64.encode(digest))
}

/// Percent-encodes a string per AWS's rules (RFC 3986).
///
/// Unreserved characters (A-Z, a-z, 0-9, '-', '.', '_', '~') are NOT encoded.
/// All other characters are encoded as `%XX` (uppercase hex).
/// Spaces become `%20` (NOT `+`).
pub(crate) fn percent_encode(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len() * 2);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert("Action", "ListUsers");
        params.insert("Version", "2010-05-08");
        params.insert("Timestamp", "2024-01-01T00:00:00Z");
        params
    }

    fn sign_with(
        method: SignatureMethod,
        secret: &str,
        http_method: HttpMethod,
        host: &str,
    ) -> ParameterSet {
        let mut params = base_params();
        SignatureV2::new(method)
            .sign(
                &Credential::new("AKIDEXAMPLE", secret),
                http_method,
                "/",
                &mut params,
                host,
            )
            .unwrap();
        params
    }

    #[test]
    fn percent_encode_unreserved_chars() {
        assert_eq!(percent_encode("abcXYZ019"), "abcXYZ019");
        assert_eq!(percent_encode("-._~"), "-._~");
    }

    #[test]
    fn percent_encode_spaces() {
        assert_eq!(percent_encode("hello world"), "hello%20world");
    }

    #[test]
    fn percent_encode_special_chars() {
        assert_eq!(percent_encode("/"), "%2F");
        assert_eq!(percent_encode("="), "%3D");
        assert_eq!(percent_encode("&"), "%26");
        assert_eq!(percent_encode("+"), "%2B");
        assert_eq!(percent_encode("*"), "%2A");
        assert_eq!(percent_encode("\n"), "%0A");
    }

    #[test]
    fn percent_encode_multibyte() {
        assert_eq!(percent_encode("中文"), "%E4%B8%AD%E6%96%87");
    }

    #[test]
    fn sign_adds_auth_entries() {
        let params = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        assert_eq!(params.get("AWSAccessKeyId"), Some("AKIDEXAMPLE"));
        assert_eq!(params.get("SignatureVersion"), Some("2"));
        assert_eq!(params.get("SignatureMethod"), Some("HmacSHA256"));
        assert!(params.get("SecurityToken").is_none());
        assert!(params.get("Signature").is_some());
    }

    #[test]
    fn sign_deterministic() {
        let a = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        let b = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        assert_eq!(a.get("Signature"), b.get("Signature"));
    }

    #[test]
    fn sign_different_secrets_differ() {
        let a = sign_with(
            SignatureMethod::HmacSha256,
            "secret1",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        let b = sign_with(
            SignatureMethod::HmacSha256,
            "secret2",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        assert_ne!(a.get("Signature"), b.get("Signature"));
    }

    #[test]
    fn sign_different_methods_differ() {
        let get = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        let post = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Post,
            "iam.amazonaws.com",
        );
        assert_ne!(get.get("Signature"), post.get("Signature"));
    }

    #[test]
    fn sign_different_hosts_differ() {
        let a = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        let b = sign_with(SignatureMethod::HmacSha256, "secret", HttpMethod::Get, "127.0.0.1:8080");
        assert_ne!(a.get("Signature"), b.get("Signature"));
    }

    #[test]
    fn signature_digest_length_matches_method() {
        let sha256 = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        let sha1 = sign_with(
            SignatureMethod::HmacSha1,
            "secret",
            HttpMethod::Get,
            "iam.amazonaws.com",
        );
        assert_eq!(sha1.get("SignatureMethod"), Some("HmacSHA1"));
        assert_eq!(BASE64.decode(sha256.get("Signature").unwrap()).unwrap().len(), 32);
        assert_eq!(BASE64.decode(sha1.get("Signature").unwrap()).unwrap().len(), 20);
    }

    #[test]
    fn signature_matches_manual_computation() {
        let params = sign_with(
            SignatureMethod::HmacSha256,
            "secret",
            HttpMethod::Get,
            "IAM.amazonaws.com",
        );

        let mut unsigned = params.clone();
        unsigned.remove("Signature");
        let string_to_sign = format!("GET\niam.amazonaws.com\n/\n{}", unsigned.encode());
        let mut mac = HmacSha256::new_from_slice(b"secret").unwrap();
        mac.update(string_to_sign.as_bytes());
        let expected = BASE64.encode(mac.finalize().into_bytes());

        assert_eq!(params.get("Signature"), Some(expected.as_str()));
    }

    #[test]
    fn session_token_is_signed() {
        let mut params = base_params();
        let credential = Credential::new("ASIAEXAMPLE", "secret").with_session_token("token-123");
        SignatureV2::default()
            .sign(&credential, HttpMethod::Get, "/", &mut params, "iam.amazonaws.com")
            .unwrap();
        assert_eq!(params.get("SecurityToken"), Some("token-123"));
    }
}
