/// HTTP middleware utilities for ripple-social
///
/// Authentication happens upstream; the gateway injects the authenticated
/// account id via the `X-User-Id` header. Handlers receive it through the
/// `UserId` extractor and never authenticate themselves.
use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Header carrying the gateway-authenticated account id
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Extracted viewer identity for the current request.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let parsed = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ErrorUnauthorized("Missing X-User-Id header"))
            .and_then(|raw| {
                Uuid::parse_str(raw).map_err(|_| ErrorUnauthorized("Invalid user ID"))
            })
            .map(UserId);

        ready(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_id_from_header() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, id.to_string()))
            .to_http_request();

        let user_id = UserId::from_request(&req, &mut actix_web::dev::Payload::None)
            .await
            .unwrap();
        assert_eq!(user_id.0, id);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = UserId::from_request(&req, &mut actix_web::dev::Payload::None).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_malformed_header_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "not-a-uuid"))
            .to_http_request();
        let result = UserId::from_request(&req, &mut actix_web::dev::Payload::None).await;
        assert!(result.is_err());
    }
}
