//! Logon and logoff against the BI platform.
//!
//! Two mutually exclusive flows install a logon token into the client:
//! the enterprise (user name and password) flow and the trusted flow, which
//! asserts a user name that the server has been configured to trust.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::client::BoClient;
use crate::error::ClientError;
use crate::model::LogonResponse;
use crate::transport::{LogonToken, TRUSTED_USER_HEADER};

const TEMPLATE_USER_NAME: &str = "userName";
const TEMPLATE_PASSWORD: &str = "password";

impl BoClient {
    /// Log on with a user name and password.
    ///
    /// Fetches the logon template from the server, fills in the credentials
    /// and posts it back. On success the issued token replaces any previous
    /// one; on failure the current token is left as it was.
    pub async fn logon(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let url = format!("{}/logon/long", self.endpoints().platform);
        debug!("Requesting the logon template for user {}", username);

        let response = self.transport.get(&url, None).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Could not fetch the logon template: {} - {}", status, body);
            return Err(ClientError::Authentication { status, body });
        }

        let mut payload: Value = serde_json::from_str(&response.text().await?)?;
        let fields = payload.as_object_mut().ok_or_else(|| {
            ClientError::UnexpectedResponse("logon template is not a JSON object".to_string())
        })?;
        fields.insert(TEMPLATE_USER_NAME.to_string(), Value::from(username));
        fields.insert(TEMPLATE_PASSWORD.to_string(), Value::from(password));

        let response = self.transport.post_json(&url, &payload, None).await?;
        self.install_token(response).await
    }

    /// Log on as a trusted user. No password is sent and no template is
    /// fetched.
    pub async fn logon_trusted(&mut self, username: &str) -> Result<(), ClientError> {
        let url = format!("{}/logon/trusted", self.endpoints().platform);
        debug!("Requesting a trusted logon for user {}", username);

        let mut headers = HeaderMap::new();
        let user = HeaderValue::from_str(username)
            .map_err(|_| ClientError::InvalidHeader(format!("trusted user {:?}", username)))?;
        headers.insert(TRUSTED_USER_HEADER, user);

        let response = self.transport.get_with_headers(&url, headers, None).await?;
        self.install_token(response).await
    }

    async fn install_token(&mut self, response: Response) -> Result<(), ClientError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status != StatusCode::OK {
            error!("Logon failed: {} - {}", status, body);
            return Err(ClientError::Authentication { status, body });
        }

        let logon: LogonResponse = serde_json::from_str(&body).map_err(|e| {
            ClientError::UnexpectedResponse(format!("logon response without a token: {}", e))
        })?;
        let token = LogonToken::new(logon.logon_token);
        info!("Logon successful, logon token set: {}", token.redacted());
        self.token = Some(token);

        Ok(())
    }

    /// Sign off and release the connection.
    ///
    /// The sign-off is best effort: the returned status is whatever the server
    /// answered, success or not. The client is consumed either way.
    pub async fn logoff(self) -> Result<StatusCode, ClientError> {
        let url = format!("{}/v1/logoff", self.endpoints().platform);
        let response = self.transport.post(&url, self.token.as_ref()).await?;
        let status = response.status();
        info!("Logoff status code: {}", status);
        Ok(status)
    }
}
