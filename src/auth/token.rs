// src/auth/token.rs
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::errors::ServerError;

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// `{"alg":"HS256","typ":"JWT"}`, the only header this signer emits or accepts.
const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Generate a secure random token using the OS RNG.
pub fn generate_token_default() -> String {
    let mut rng = OsRng;
    generate_token(&mut rng, DEFAULT_TOKEN_BYTES)
}

/// Generate a URL-safe token from random bytes.
/// - Uses Base64 URL-safe, no padding.
/// - Typically 32 bytes -> ~43 char token.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64_url_nopad(&buf)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks compact `header.payload.signature` bearer tokens.
#[derive(Clone)]
pub struct TokenSigner {
    key: Vec<u8>,
    ttl_secs: i64,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            key: secret.to_vec(),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn issue(&self, user_id: i64, now: i64) -> Result<String, ServerError> {
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.ttl_secs,
        };
        let payload = serde_json::to_vec(&claims).map_err(|_| ServerError::InternalError)?;

        let signing_input = format!(
            "{}.{}",
            base64_url_nopad(HEADER_JSON.as_bytes()),
            base64_url_nopad(&payload)
        );
        let sig = self.mac()?.chain_update(signing_input.as_bytes()).finalize();

        Ok(format!(
            "{signing_input}.{}",
            base64_url_nopad(&sig.into_bytes())
        ))
    }

    /// Checks signature, header and expiry. Every failure is the same 401.
    pub fn verify(&self, token: &str, now: i64) -> Result<Claims, ServerError> {
        let invalid = || ServerError::Unauthorized("Invalid token".into());

        let mut parts = token.split('.');
        let (Some(header), Some(payload), Some(sig), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let sig = decode_url_nopad(sig).ok_or_else(invalid)?;
        let mut mac = self.mac()?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        mac.verify_slice(&sig).map_err(|_| invalid())?;

        if header != base64_url_nopad(HEADER_JSON.as_bytes()) {
            return Err(invalid());
        }

        let payload = decode_url_nopad(payload).ok_or_else(invalid)?;
        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| invalid())?;
        if claims.exp <= now {
            return Err(invalid());
        }
        Ok(claims)
    }

    fn mac(&self) -> Result<HmacSha256, ServerError> {
        <HmacSha256 as Mac>::new_from_slice(&self.key).map_err(|_| ServerError::InternalError)
    }
}

fn base64_url_nopad(bytes: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn decode_url_nopad(s: &str) -> Option<Vec<u8>> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(s)
        .ok()
}
