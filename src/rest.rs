use crate::client::Config;
use crate::error::{Result, TogglError};
use crate::response::Response;
use crate::token::ApiToken;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Target of a request: a static resource URI, an optional caller-supplied
/// identifier and static trailing segments (sub-resource or action).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub uri: &'a str,
    pub id: Option<&'a str>,
    pub extra: &'a [&'a str],
}

impl<'a> Endpoint<'a> {
    pub fn new(uri: &'a str) -> Self {
        Endpoint {
            uri,
            id: None,
            extra: &[],
        }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_extra(mut self, extra: &'a [&'a str]) -> Self {
        self.extra = extra;
        self
    }
}

/// Shared, immutable state every resource dispatches through
#[derive(Clone)]
pub struct RestContext {
    /// HTTP exchange primitive
    transport: Arc<dyn Transport>,
    /// Configuration
    config: Config,
    /// Parsed base URL
    base: Url,
    /// Credential attached to every request
    token: ApiToken,
}

impl RestContext {
    /// Create a new context, validating the base URL
    pub fn new(token: ApiToken, config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let base = Url::parse(config.base_url())?;
        if base.cannot_be_a_base() {
            return Err(TogglError::UrlParse(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        Ok(RestContext {
            transport,
            config,
            base,
            token,
        })
    }

    /// Configuration the context was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL for an endpoint.
    ///
    /// Static segments (`uri`, `extra`) are split on `/` and empty parts are
    /// skipped, so no double slash is produced. The identifier always becomes
    /// exactly one percent-encoded segment; an empty, `.` or `..` identifier is
    /// rejected since it would address a different resource.
    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> Result<String> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| TogglError::UrlParse(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            path.pop_if_empty();
            path.extend(endpoint.uri.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = endpoint.id {
                if matches!(id, "" | "." | "..") {
                    return Err(TogglError::InvalidId(id.to_string()));
                }
                path.push(id);
            }
            for segment in endpoint.extra {
                path.extend(segment.split('/').filter(|s| !s.is_empty()));
            }
        }
        Ok(url.into())
    }

    /// Build the request envelope for a call.
    ///
    /// Pure: the same inputs always produce an identical envelope.
    pub fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint<'_>,
        payload: Option<&Value>,
    ) -> Result<HttpRequest> {
        let url = self.url_for(endpoint)?;
        let body = payload.map(serde_json::to_vec::<Value>).transpose()?;

        let headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), self.token.basic_auth_header()),
        ];

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Translate a transport response into a decoded body or a typed error
    pub fn parse_response(&self, response: &HttpResponse) -> Result<Response> {
        if !(200..300).contains(&response.status) {
            return Err(TogglError::from_status(response.status, response.body_text()));
        }
        Response::from_http(response)
    }

    /// Execute a request and return the decoded response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Resource URI, identifier and trailing segments
    /// * `payload` - Optional JSON body
    pub fn do_request(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint<'_>,
        payload: Option<&Value>,
    ) -> Result<Response> {
        let request = self.build_request(method, endpoint, payload)?;

        let start = Instant::now();
        let response = self
            .transport
            .execute(&request)
            .map_err(TogglError::Transport)?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            content_type = response.header("Content-Type"),
            elapsed = ?start.elapsed(),
            "toggl request"
        );

        self.parse_response(&response).map_err(|err| {
            tracing::warn!(
                method = %request.method,
                url = %request.url,
                status = ?err.status_code(),
                "toggl request failed: {}",
                err
            );
            err
        })
    }
}

impl fmt::Debug for RestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestContext")
            .field("config", &self.config)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use serde_json::json;
    use std::sync::Mutex;

    struct Canned {
        status: u16,
        body: &'static str,
        calls: Mutex<usize>,
    }

    impl Transport for Canned {
        fn execute(&self, _request: &HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
            *self.calls.lock().unwrap() += 1;
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct Refused;

    impl Transport for Refused {
        fn execute(&self, _request: &HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
            Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn context(api_url: &str, transport: Arc<dyn Transport>) -> RestContext {
        RestContext::new(ApiToken::new("tok").unwrap(), Config::new(api_url), transport).unwrap()
    }

    fn canned(status: u16, body: &'static str) -> Arc<Canned> {
        Arc::new(Canned {
            status,
            body,
            calls: Mutex::new(0),
        })
    }

    #[test]
    fn test_url_join_rule() {
        let ctx = context("http://localhost/api/v8/", canned(200, ""));
        assert_eq!(
            ctx.url_for(&Endpoint::new("clients")).unwrap(),
            "http://localhost/api/v8/clients"
        );
        assert_eq!(
            ctx.url_for(&Endpoint::new("/clients/").with_id("12").with_extra(&[""]))
                .unwrap(),
            "http://localhost/api/v8/clients/12"
        );
        assert_eq!(
            ctx.url_for(&Endpoint::new("time_entries").with_id("5").with_extra(&["stop"]))
                .unwrap(),
            "http://localhost/api/v8/time_entries/5/stop"
        );
    }

    #[test]
    fn test_id_is_a_single_encoded_segment() {
        let ctx = context("http://localhost/api/v8", canned(200, ""));
        assert_eq!(
            ctx.url_for(&Endpoint::new("clients").with_id("1/projects")).unwrap(),
            "http://localhost/api/v8/clients/1%2Fprojects"
        );
        assert_eq!(
            ctx.url_for(&Endpoint::new("clients").with_id("1?x=y#top")).unwrap(),
            "http://localhost/api/v8/clients/1%3Fx=y%23top"
        );
        assert_eq!(
            ctx.url_for(&Endpoint::new("clients").with_id("/")).unwrap(),
            "http://localhost/api/v8/clients/%2F"
        );
    }

    #[test]
    fn test_empty_or_dot_id_rejected() {
        let transport = canned(200, "");
        let ctx = context("http://localhost/api/v8", transport.clone());
        for id in ["", ".", ".."] {
            let err = ctx
                .do_request(HttpMethod::Delete, &Endpoint::new("clients").with_id(id), None)
                .unwrap_err();
            assert!(matches!(err, TogglError::InvalidId(ref bad) if bad == id));
        }
        assert_eq!(*transport.calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = RestContext::new(
            ApiToken::new("tok").unwrap(),
            Config::new("not a url"),
            canned(200, ""),
        )
        .unwrap_err();
        assert!(matches!(err, TogglError::UrlParse(_)));
    }

    #[test]
    fn test_build_request_headers_and_body() {
        let ctx = context("http://localhost", canned(200, ""));
        let payload = json!({"client": {"name": "Acme"}});
        let request = ctx
            .build_request(HttpMethod::Post, &Endpoint::new("clients"), Some(&payload))
            .unwrap();

        assert_eq!(request.url, "http://localhost/clients");
        assert_eq!(request.header("Authorization"), Some("Basic dG9rOmFwaV90b2tlbg=="));
        assert_eq!(request.header("Accept"), Some("application/json"));
        let body: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, payload);
    }

    #[test]
    fn test_forbidden_sends_once() {
        let transport = canned(403, "");
        let ctx = context("http://localhost", transport.clone());
        let err = ctx.do_request(HttpMethod::Get, &Endpoint::new("me"), None).unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(*transport.calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_server_error_keeps_body() {
        let ctx = context("http://localhost", canned(500, "boom"));
        let err = ctx.do_request(HttpMethod::Get, &Endpoint::new("me"), None).unwrap_err();
        assert!(matches!(err, TogglError::Request { status: 500, ref body } if body == "boom"));
    }

    #[test]
    fn test_transport_failure_propagates() {
        let ctx = context("http://localhost", Arc::new(Refused));
        let err = ctx.do_request(HttpMethod::Get, &Endpoint::new("me"), None).unwrap_err();
        assert!(matches!(err, TogglError::Transport(_)));
        assert_eq!(err.to_string(), "connection refused");
    }
}
