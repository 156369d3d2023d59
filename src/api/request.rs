use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::timeout;

use crate::api::envelope::ApiResponse;
use crate::api::error::RequestError;
use crate::config::{build_auth_header, ApiConfig};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const USER_AGENT: &str = concat!("aiadmin/", env!("CARGO_PKG_VERSION"));

/// Longest error body echoed back in a `RequestError::Status`.
const MAX_ERROR_BODY: usize = 512;

/// Shared HTTP transport for every API wrapper.
#[derive(Clone)]
pub struct RequestClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
    api: ApiConfig,
}

impl RequestClient {
    pub fn new(api: &ApiConfig) -> Result<Self, RequestError> {
        let base_url = parse_base_url(&api.base_url)?;
        let request_timeout = Duration::from_secs(api.timeout_seconds as u64);
        // No client-wide total deadline: streamed bodies may run longer than
        // `timeout_seconds`, as long as no single read stalls that long.
        let client = Client::builder()
            .read_timeout(request_timeout)
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .user_agent(USER_AGENT)
            .build()
            .map_err(RequestError::Client)?;

        Ok(Self {
            client,
            base_url,
            request_timeout,
            api: api.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// Paths are appended to the base path rather than replacing it, so a
    /// base of `http://host/api/v1` and a path of `/admin/x` yield
    /// `http://host/api/v1/admin/x`.
    pub fn url(&self, path: &str) -> Result<Url, RequestError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| RequestError::InvalidUrl {
            url: joined.clone(),
            reason: e.to_string(),
        })
    }

    /// GET a JSON document and decode it as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.url(path)?;
        let builder = self.client.get(url.clone()).timeout(self.request_timeout);
        let response = self.send(builder, &url).await?;
        decode_json(response, &url).await
    }

    /// GET an enveloped payload.
    ///
    /// Envelopes flagged `success = false` are turned into
    /// `RequestError::Rejected`.
    pub async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, RequestError> {
        let url = self.url(path)?;
        let builder = self.client.get(url.clone()).timeout(self.request_timeout);
        let response = self.send(builder, &url).await?;
        let value: Value = decode_json(response, &url).await?;
        let envelope =
            ApiResponse::<T>::from_payload(value).map_err(|e| RequestError::Decode {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if envelope.is_rejected() {
            tracing::warn!(url = %url, code = envelope.code, msg = %envelope.msg, "Request rejected by backend");
            return Err(RequestError::Rejected {
                code: envelope.code,
                message: envelope.msg,
            });
        }
        Ok(envelope)
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let url = self.url(path)?;
        let builder = self
            .client
            .post(url.clone())
            .json(body)
            .timeout(self.request_timeout);
        let response = self.send(builder, &url).await?;
        decode_json(response, &url).await
    }

    /// POST a JSON body and consume a streamed text response.
    ///
    /// Each decoded chunk is passed to `on_chunk` as it arrives; the full
    /// text is returned once the stream ends. Multi-byte characters split
    /// across chunk boundaries are held back until complete.
    ///
    /// `timeout_seconds` bounds the wait for response headers and each gap
    /// between chunks, not the length of the whole reply.
    pub async fn post_stream<B, F>(
        &self,
        path: &str,
        body: &B,
        mut on_chunk: F,
    ) -> Result<String, RequestError>
    where
        B: Serialize + ?Sized,
        F: FnMut(&str),
    {
        let url = self.url(path)?;
        let builder = self.client.post(url.clone()).json(body);
        let mut response = timeout(self.request_timeout, self.send(builder, &url))
            .await
            .map_err(|_| {
                tracing::warn!(url = %url, "No response headers before timeout");
                RequestError::Timeout {
                    url: url.to_string(),
                }
            })??;

        let mut text = String::new();
        let mut pending: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| RequestError::from_reqwest(url.as_str(), e))?
        {
            pending.extend_from_slice(&chunk);
            let valid = match std::str::from_utf8(&pending) {
                Ok(s) => s.len(),
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(e) => {
                    return Err(RequestError::Decode {
                        url: url.to_string(),
                        reason: e.to_string(),
                    })
                }
            };
            if valid == 0 {
                continue;
            }
            let rest = pending.split_off(valid);
            let piece = String::from_utf8(std::mem::replace(&mut pending, rest)).map_err(|e| {
                RequestError::Decode {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            })?;
            on_chunk(piece.as_str());
            text.push_str(&piece);
        }

        if !pending.is_empty() {
            return Err(RequestError::Decode {
                url: url.to_string(),
                reason: "stream ended inside a UTF-8 sequence".to_string(),
            });
        }
        Ok(text)
    }

    /// Attach common headers, send, and map non-2xx statuses to errors.
    async fn send(&self, builder: RequestBuilder, url: &Url) -> Result<Response, RequestError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let mut builder = builder
            .header(REQUEST_ID_HEADER, &request_id)
            .header(ACCEPT, HeaderValue::from_static("application/json, text/plain"));

        if let Some((name, value)) = build_auth_header(&self.api) {
            builder = builder.header(name, value);
        }

        tracing::debug!(url = %url, request_id = %request_id, "Sending request");

        let response = builder.send().await.map_err(|e| {
            let err = RequestError::from_reqwest(url.as_str(), e);
            tracing::warn!(url = %url, request_id = %request_id, error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        tracing::warn!(
            url = %url,
            request_id = %request_id,
            status = status.as_u16(),
            message = %message,
            "Backend returned error status"
        );
        Err(RequestError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, RequestError> {
    Url::parse(raw).map_err(|e| RequestError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, RequestError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| RequestError::from_reqwest(url.as_str(), e))?;
    serde_json::from_slice(&bytes).map_err(|e| RequestError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Pull a readable message out of an error body.
///
/// Understands the backend's `msg` envelope field and FastAPI's `detail`,
/// falling back to the raw (truncated) body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "detail", "error", "message"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }
    body.chars().take(MAX_ERROR_BODY).collect()
}
