use crate::config::Config;
use crate::constants::METHOD_ENCODE_SET;
use crate::context::Context;
use crate::credential::Credential;
use crate::response::ApiResponse;
use crate::wsse::{WsseToken, X_WSSE};
use crate::{Error, Result};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::HeaderValue;
use log::debug;
use percent_encoding::utf8_percent_encode;

/// Path of the 1.4 REST endpoint, relative to the configured base URL.
const REST_PATH: &str = "/admin/1.4/rest/";

const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Client for the Omniture Reporting API 1.4.
///
/// One call means one signed POST and one fully-read response; the client
/// keeps no state between calls beyond its read-only configuration, so it is
/// cheap to clone and safe to share across tasks.
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    config: Config,
}

impl Client {
    /// Create a new client from a context and configuration.
    ///
    /// Configuration gaps are filled from the environment and validated on
    /// [`call`](Client::call), not here.
    pub fn new(ctx: Context, config: Config) -> Self {
        Self { ctx, config }
    }

    /// Call an Omniture API method with an URL-encoded POST body.
    ///
    /// `method` is the API method name, e.g. `Report.Queue` or
    /// `Company.GetReportSuites`; `post_body` is passed through as the
    /// request payload unmodified.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`](crate::ErrorKind) before any
    /// network activity if username, secret or endpoint are unset. A 4xx/5xx
    /// answer from the server is a normal [`ApiResponse`]; only
    /// network-level failures come back as
    /// [`ErrorKind::Transport`](crate::ErrorKind) errors.
    pub async fn call(&self, method: &str, post_body: &str) -> Result<ApiResponse> {
        let config = self.config.clone().from_env(&self.ctx);

        let cred = Credential {
            username: config.username.unwrap_or_default(),
            secret: config.secret.unwrap_or_default(),
        };
        let endpoint = config.endpoint.unwrap_or_default();
        if !cred.is_valid() || endpoint.is_empty() {
            return Err(Error::config_invalid(
                "username, secret and endpoint must all be set before the API can be called",
            ));
        }

        let req = self.build_request(&cred, &endpoint, method, post_body)?;

        debug!("calling {} at {}", method, req.uri());
        let resp = self.ctx.http_send(req).await?;
        debug!("{} answered with status {}", method, resp.status());

        Ok(ApiResponse::from_http(resp))
    }

    fn build_request(
        &self,
        cred: &Credential,
        endpoint: &str,
        method: &str,
        post_body: &str,
    ) -> Result<http::Request<Bytes>> {
        let uri = format!(
            "{}{}?method={}",
            endpoint.trim_end_matches('/'),
            REST_PATH,
            utf8_percent_encode(method, &METHOD_ENCODE_SET),
        );

        // Fresh nonce and timestamp on every request; the server rejects
        // replayed nonces.
        let token = WsseToken::generate();
        let mut wsse: HeaderValue = token.header_value(cred).parse()?;
        wsse.set_sensitive(true);

        let body = Bytes::copy_from_slice(post_body.as_bytes());

        let req = http::Request::builder()
            .method(http::Method::POST)
            .version(http::Version::HTTP_11)
            .uri(&uri)
            .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
            .header(CONTENT_LENGTH, body.len())
            .header(X_WSSE, wsse)
            .body(body)?;

        Ok(req)
    }
}
