//! Request signing for the asset host.
//!
//! Signed parameters are sorted by name, empty values are dropped, the rest
//! are joined as `k=v&k=v`, the API secret is appended, and the digest is hex
//! encoded. The digest is SHA-1 unless the account is configured for SHA-256.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Digest used for request signatures. Must match the account setting on
/// the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
        }
    }

    fn digest_hex(self, input: &[u8]) -> String {
        match self {
            SignatureAlgorithm::Sha1 => hex::encode(Sha1::digest(input)),
            SignatureAlgorithm::Sha256 => hex::encode(Sha256::digest(input)),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" => Ok(SignatureAlgorithm::Sha256),
            other => Err(format!("unknown signature algorithm '{other}'")),
        }
    }
}

/// Compute the signature for a set of request parameters.
///
/// `api_key`, `signature`, `file`, and `resource_type` must not be part of
/// `params`; they are never signed.
pub fn sign_params(
    params: &BTreeMap<&str, String>,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let mut to_sign = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    to_sign.push_str(api_secret);

    algorithm.digest_hex(to_sign.as_bytes())
}

/// Sign the parameters a browser sends with a direct upload.
pub fn sign_upload(
    folder: &str,
    public_id: Option<&str>,
    timestamp: i64,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let mut params = BTreeMap::new();
    params.insert("folder", folder.to_string());
    params.insert("timestamp", timestamp.to_string());
    if let Some(public_id) = public_id {
        params.insert("public_id", public_id.to_string());
    }
    sign_params(&params, api_secret, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha256_hex(input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }

    fn sha1_hex(input: &str) -> String {
        hex::encode(Sha1::digest(input.as_bytes()))
    }

    #[test]
    fn matches_published_cloudinary_example() {
        let mut params = BTreeMap::new();
        params.insert("eager", "w_400,h_300,c_pad|w_260,h_200,c_crop".to_string());
        params.insert("public_id", "sample_image".to_string());
        params.insert("timestamp", "1315060510".to_string());

        assert_eq!(
            sign_params(&params, "abcd", SignatureAlgorithm::Sha1),
            "bfd09f95f331f558cbd1320e67aa8d488770583e"
        );
    }

    #[test]
    fn sha1_is_the_default() {
        assert_eq!(SignatureAlgorithm::default(), SignatureAlgorithm::Sha1);
    }

    #[test]
    fn params_are_sorted_and_secret_appended() {
        let mut params = BTreeMap::new();
        params.insert("timestamp", "1700000000".to_string());
        params.insert("folder", "portfolio".to_string());

        let signature = sign_params(&params, "s3cret", SignatureAlgorithm::Sha256);

        assert_eq!(
            signature,
            sha256_hex("folder=portfolio&timestamp=1700000000s3cret")
        );
        assert_eq!(signature.len(), 64);
        assert_eq!(sign_params(&params, "s3cret", SignatureAlgorithm::Sha1).len(), 40);
    }

    #[test]
    fn empty_values_are_not_signed() {
        let mut with_empty = BTreeMap::new();
        with_empty.insert("public_id", String::new());
        with_empty.insert("timestamp", "1".to_string());

        let mut without = BTreeMap::new();
        without.insert("timestamp", "1".to_string());

        assert_eq!(
            sign_params(&with_empty, "k", SignatureAlgorithm::Sha1),
            sign_params(&without, "k", SignatureAlgorithm::Sha1)
        );
    }

    #[test]
    fn upload_signature_includes_public_id_when_given() {
        let bare = sign_upload("portfolio", None, 42, "k", SignatureAlgorithm::Sha1);
        let named = sign_upload("portfolio", Some("shorts__standard__a"), 42, "k", SignatureAlgorithm::Sha1);

        assert_eq!(bare, sha1_hex("folder=portfolio&timestamp=42k"));
        assert_eq!(
            named,
            sha1_hex("folder=portfolio&public_id=shorts__standard__a&timestamp=42k")
        );
    }

    #[test]
    fn algorithm_parses_case_insensitively() {
        assert_eq!("SignatureAlgorithm::Sha256".parse::<SignatureAlgorithm>(), Ok(SignatureAlgorithm::Sha256));
        assert_eq!("sha1".parse::<SignatureAlgorithm>(), Ok(SignatureAlgorithm::Sha1));
        assert!("md5".parse::<SignatureAlgorithm>().is_err());
    }
}
