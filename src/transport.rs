//! HTTP transport for the BusinessObjects REST API.
//!
//! [`Transport`] owns the long-lived `reqwest` client, the four endpoint roots
//! and the base headers. The logon token is not part of it: every request
//! helper takes the token explicitly, so the only code that can change which
//! token is sent is the code that owns the [`LogonToken`].

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{trace, warn};

use crate::configuration::ServerSettings;
use crate::error::ClientError;

/// Header carrying the logon token on every authenticated request
pub const LOGON_TOKEN_HEADER: &str = "X-SAP-LogonToken";
/// Header asserting the user for trusted authentication
pub const TRUSTED_USER_HEADER: &str = "X-SAP-TRUSTED-USER";

/// The four REST roots of a BI platform installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `{protocol}://{host}:{port}/biprws`
    pub platform: String,
    /// Web Intelligence (raylight) document service
    pub documents: String,
    /// Semantic layer service
    pub semantic: String,
    /// CMS query service
    pub query: String,
}

impl Endpoints {
    /// Derive the endpoint roots. Nothing is validated here; a bad host or
    /// port only shows up when the first request is sent.
    pub fn new(protocol: &str, host: &str, port: impl fmt::Display) -> Self {
        let platform = format!("{}://{}:{}/biprws", protocol, host, port);
        Self {
            documents: format!("{}/raylight/v1", platform),
            semantic: format!("{}/sl/v1", platform),
            query: format!("{}/v1", platform),
            platform,
        }
    }
}

/// Opaque token issued by the platform on logon.
#[derive(Clone, PartialEq, Eq)]
pub struct LogonToken(String);

impl LogonToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A short prefix that is safe to put in logs
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(6).collect();
        format!("{}…", prefix)
    }
}

impl fmt::Debug for LogonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LogonToken").field(&self.redacted()).finish()
    }
}

/// Connection context shared by every operation of one client.
#[derive(Debug)]
pub struct Transport {
    endpoints: Endpoints,
    headers: HeaderMap,
    http: Client,
}

impl Transport {
    pub fn new(settings: &ServerSettings) -> Result<Self, ClientError> {
        let endpoints = Endpoints::new(&settings.protocol, &settings.host, settings.port);

        let mut headers = HeaderMap::new();
        let content_type = HeaderValue::from_str(&settings.content_type).map_err(|_| {
            ClientError::InvalidHeader(format!("content type {:?}", settings.content_type))
        })?;
        headers.insert(ACCEPT, content_type.clone());
        headers.insert(CONTENT_TYPE, content_type);

        if settings.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for {}", endpoints.platform);
        }

        let mut builder = Client::builder()
            .user_agent(concat!("bocli/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(settings.accept_invalid_certs);
        if let Some(timeout) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            endpoints,
            headers,
            http: builder.build()?,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The base headers sent with every request (accept and content type)
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub async fn get(&self, url: &str, token: Option<&LogonToken>) -> Result<Response, ClientError> {
        trace!("GET {}", url);
        self.send(self.http.get(url), token).await
    }

    /// GET with additional request headers
    pub async fn get_with_headers(
        &self,
        url: &str,
        extra: HeaderMap,
        token: Option<&LogonToken>,
    ) -> Result<Response, ClientError> {
        trace!("GET {}", url);
        self.send(self.http.get(url).headers(extra), token).await
    }

    pub async fn post_json<B>(
        &self,
        url: &str,
        body: &B,
        token: Option<&LogonToken>,
    ) -> Result<Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        trace!("POST {}", url);
        self.send(self.http.post(url).json(body), token).await
    }

    /// POST without a body
    pub async fn post(&self, url: &str, token: Option<&LogonToken>) -> Result<Response, ClientError> {
        trace!("POST {}", url);
        self.send(self.http.post(url), token).await
    }

    pub async fn put(&self, url: &str, token: Option<&LogonToken>) -> Result<Response, ClientError> {
        trace!("PUT {}", url);
        self.send(self.http.put(url), token).await
    }

    pub async fn delete(&self, url: &str, token: Option<&LogonToken>) -> Result<Response, ClientError> {
        trace!("DELETE {}", url);
        self.send(self.http.delete(url), token).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        token: Option<&LogonToken>,
    ) -> Result<Response, ClientError> {
        // Request-specific headers were set first; base headers must not
        // override them, so only fill in what is missing.
        let mut request = request.build()?;
        for (name, value) in &self.headers {
            if !request.headers().contains_key(name) {
                request.headers_mut().insert(name.clone(), value.clone());
            }
        }
        if let Some(token) = token {
            let value = HeaderValue::from_str(token.as_str()).map_err(|_| {
                ClientError::InvalidHeader("logon token".to_string())
            })?;
            request.headers_mut().insert(LOGON_TOKEN_HEADER, value);
        }

        Ok(self.http.execute(request).await?)
    }
}

/// Treat any non-2xx response as an error, keeping the body for diagnostics.
pub async fn error_for_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_derived_from_server() {
        let endpoints = Endpoints::new("https", "bi.example.com", 8443);
        assert_eq!(endpoints.platform, "https://bi.example.com:8443/biprws");
        assert_eq!(endpoints.documents, "https://bi.example.com:8443/biprws/raylight/v1");
        assert_eq!(endpoints.semantic, "https://bi.example.com:8443/biprws/sl/v1");
        assert_eq!(endpoints.query, "https://bi.example.com:8443/biprws/v1");
    }

    #[test]
    fn test_endpoints_do_not_validate() {
        let endpoints = Endpoints::new("http", "not a host", "port");
        assert_eq!(endpoints.platform, "http://not a host:port/biprws");
    }

    #[test]
    fn test_logon_token_debug_is_redacted() {
        let token = LogonToken::new("COMMANDCENTER:6400@{3&2=5595,U3&p=40623.9}");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("40623"));
        assert!(debug.contains("COMMAN"));
    }

    #[test]
    fn test_transport_base_headers() {
        let transport = Transport::new(&ServerSettings::default()).unwrap();
        assert_eq!(transport.headers().get(ACCEPT).unwrap(), "application/json");
        assert_eq!(transport.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }
}
