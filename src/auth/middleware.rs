use astra::Request;

use crate::auth::token::{Claims, TokenSigner};
use crate::errors::ServerError;

/// Raw credential from the `Authorization` header. The `Bearer ` prefix is
/// optional; a bare token is accepted too.
pub fn bearer_token(req: &Request) -> Option<&str> {
    let raw = req.headers().get("authorization")?.to_str().ok()?.trim();
    let token = raw
        .strip_prefix("Bearer ")
        .or_else(|| raw.strip_prefix("bearer "))
        .unwrap_or(raw)
        .trim();
    (!token.is_empty()).then_some(token)
}

/// Gate for protected routes: no credential is 403, a bad one is 401.
pub fn require_auth(req: &Request, signer: &TokenSigner, now: i64) -> Result<Claims, ServerError> {
    let token = bearer_token(req).ok_or_else(|| ServerError::Forbidden("Access denied".into()))?;
    signer.verify(token, now)
}

/// Same checks as [`require_auth`] but an absent header is anonymous.
pub fn optional_auth(
    req: &Request,
    signer: &TokenSigner,
    now: i64,
) -> Result<Option<Claims>, ServerError> {
    match bearer_token(req) {
        None => Ok(None),
        Some(token) => signer.verify(token, now).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra::Body;

    const NOW: i64 = 1_790_000_000;

    fn req_with(auth: Option<&str>) -> Request {
        let mut b = http::Request::builder().uri("/api/cars");
        if let Some(v) = auth {
            b = b.header("Authorization", v);
        }
        b.body(Body::empty()).unwrap()
    }

    #[test]
    fn missing_header_is_forbidden() {
        let s = TokenSigner::new(b"k", 60);
        let err = require_auth(&req_with(None), &s, NOW).unwrap_err();
        assert_eq!(err.status(), 403);
        assert_eq!(err.public_message(), "Access denied");
    }

    #[test]
    fn bad_token_is_unauthorized() {
        let s = TokenSigner::new(b"k", 60);
        let err = require_auth(&req_with(Some("Bearer nope")), &s, NOW).unwrap_err();
        assert_eq!(err.status(), 401);
    }

    #[test]
    fn prefix_is_optional() {
        let s = TokenSigner::new(b"k", 60);
        let t = s.issue(7, NOW).unwrap();

        let with = require_auth(&req_with(Some(&format!("Bearer {t}"))), &s, NOW).unwrap();
        let bare = require_auth(&req_with(Some(&t)), &s, NOW).unwrap();
        assert_eq!(with.sub, 7);
        assert_eq!(bare, with);
    }

    #[test]
    fn optional_auth_allows_anonymous() {
        let s = TokenSigner::new(b"k", 60);
        assert_eq!(optional_auth(&req_with(None), &s, NOW).unwrap(), None);
        assert!(optional_auth(&req_with(Some("junk")), &s, NOW).is_err());
    }
}
