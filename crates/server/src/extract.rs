use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Optional JSON request body.
///
/// A request without a JSON content type, or with an empty body, reads as an
/// empty object, so the handler reports the same missing-field error as for
/// `{}`. Bodies that claim to be JSON but do not parse are rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let ct = ct.to_ascii_lowercase();
            ct.starts_with("application/json") || ct.contains("+json")
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use service::todos::NewCategory;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<NewCategory, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/categories");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).expect("request");
        JsonBody::<NewCategory>::from_request(req, &()).await.map(|JsonBody(v)| v)
    }

    #[tokio::test]
    async fn empty_json_body_is_default() {
        let v = extract(Some("application/json"), "").await.expect("empty body");
        assert!(v.name.is_none());
        let v = extract(Some("application/json"), "  \n").await.expect("blank body");
        assert!(v.name.is_none());
    }

    #[tokio::test]
    async fn non_json_content_type_is_default() {
        let v = extract(Some("text/plain"), "{\"name\":\"work\"}").await.expect("text body");
        assert!(v.name.is_none());
        let v = extract(None, "").await.expect("no content type");
        assert!(v.name.is_none());
    }

    #[tokio::test]
    async fn json_body_is_parsed() {
        let v = extract(Some("application/json; charset=utf-8"), "{\"name\":\"work\"}").await.expect("json");
        assert_eq!(v.name.as_deref(), Some("work"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = extract(Some("application/json"), "{\"name\":").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let err = extract(Some("application/json"), "{\"name\":42}").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
