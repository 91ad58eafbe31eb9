use axum::body::Body;
use serde::de::DeserializeOwned;

/// Lenient extractor for relay request bodies
///
/// A missing or unparseable body deserializes as the type's default so
/// that field validation produces the diagnostic instead of the JSON
/// parser. Oversized bodies are still rejected outright.
pub struct LenientJson<T>(pub T);

/// Body limit for relay requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

impl<S, T: DeserializeOwned + Default> axum::extract::FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let body = request.into_body();

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err)
                .is_some_and(|source| source.is::<http_body_util::LengthLimitError>())
            {
                (
                    axum::http::StatusCode::PAYLOAD_TOO_LARGE,
                    format!("Request body is too large, limit is {BODY_LIMIT_BYTES} bytes"),
                )
            } else {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    format!("Failed to read request body: {err}"),
                )
            }
            .into_response()
        })?;

        Ok(Self(serde_json::from_slice(&bytes).unwrap_or_default()))
    }
}
