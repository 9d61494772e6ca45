use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend is used to execute the single request/response exchange behind
/// an API call.
///
/// The response body is collected fully before the response is returned, so
/// implementations own the connection and stream lifetimes; nothing stays
/// open once `http_send` resolves. HTTP error statuses are valid responses
/// and must be returned as such, never as errors.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// The default [`HttpSend`] implementation, backed by [`reqwest::Client`].
///
/// reqwest does not turn non-2xx statuses into errors unless asked to, so a
/// 4xx/5xx from the server comes back as a normal response here. Only
/// network-level failures (DNS, connect, timeout) surface as
/// [`ErrorKind::Transport`](crate::ErrorKind::Transport) errors. Timeout and
/// proxy policy, if desired, belong on the `reqwest::Client` passed to
/// [`ReqwestHttpSend::new`].
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: reqwest::Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)
            .map_err(|e| Error::request_invalid("request cannot be executed").with_source(e))?;

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("sending request failed").with_source(e))?;

        let status = resp.status();
        let version = resp.version();
        let headers = resp.headers().clone();

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::transport("reading response body failed").with_source(e))?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.version_mut() = version;
        *out.headers_mut() = headers;
        Ok(out)
    }
}
