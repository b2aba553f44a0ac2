//! Operations on Web Intelligence documents and their data providers.
//!
//! Unlike logon and universe lookups, these operations never return an error:
//! they are meant to be called once per document over a whole folder tree, and
//! one bad document must not stop the sweep. Failures are logged and turned
//! into `None`, `false` or an empty list.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::client::BoClient;
use crate::error::ClientError;
use crate::model::{
    DataProviderDetails, DataProviderListResponse, DataProviderResponse, DocumentDetails,
    DocumentResponse, DocumentState, DocumentStatus, ObjectId, PurgeReport,
};
use crate::transport::error_for_status;

/// Error code the document service answers with (as HTTP 500) when the
/// object is not a Webi document, e.g. a Crystal report.
pub const NOT_WEBI_ERROR_CODE: &str = "WSR 00999";

impl BoClient {
    /// Name, path, CUID, scheduling flag and state of a document.
    pub async fn get_document_details(&self, document_id: &ObjectId) -> Option<DocumentDetails> {
        let result = self
            .get_document::<DocumentDetails>(document_id)
            .await
            .map(|response| response.document);
        recover("getting document info", document_id, result)
    }

    /// State of a document, telling "not a Webi document" apart from other
    /// failures.
    pub async fn get_document_status(&self, document_id: &ObjectId) -> DocumentStatus {
        let url = self.document_url(document_id);
        let response = match self.transport.get(&url, self.token.as_ref()).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error getting document status of {}: {}", document_id, e);
                return DocumentStatus::Unknown;
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Error reading document status of {}: {}", document_id, e);
                return DocumentStatus::Unknown;
            }
        };

        if !status.is_success() {
            return classify_status_failure(document_id, status, &body);
        }

        match serde_json::from_str::<DocumentResponse<DocumentState>>(&body) {
            Ok(response) => DocumentStatus::Status(response.document.state),
            Err(e) => {
                error!("Unexpected document status of {}: {}", document_id, e);
                DocumentStatus::Unknown
            }
        }
    }

    pub async fn delete_document(&self, document_id: &ObjectId) -> bool {
        let url = self.document_url(document_id);
        let result = match self.transport.delete(&url, self.token.as_ref()).await {
            Ok(response) => error_for_status(response).await.map(|response| response.status()),
            Err(e) => Err(e),
        };
        match recover("deleting document", document_id, result) {
            Some(status) => {
                info!("Deleted document {} - Status Code: {}", document_id, status);
                true
            }
            None => false,
        }
    }

    /// Save the document over itself, keeping its comments.
    pub async fn save_document(&self, document_id: &ObjectId, name: &str) -> bool {
        let url = format!(
            "{}?overwrite=true&withComments=true",
            self.document_url(document_id)
        );
        let payload = json!({
            "document": {
                "name": name,
                "folderId": -1
            }
        });
        let result = match self
            .transport
            .post_json(&url, &payload, self.token.as_ref())
            .await
        {
            Ok(response) => error_for_status(response).await.map(|response| response.status()),
            Err(e) => Err(e),
        };
        match recover("saving Webi document", document_id, result) {
            Some(status) => {
                info!("Saved Webi document {} - Status Code: {}", document_id, status);
                true
            }
            None => false,
        }
    }

    /// Ids of the data providers of a document.
    pub async fn list_data_providers(&self, document_id: &ObjectId) -> Vec<ObjectId> {
        let url = format!("{}/dataproviders", self.document_url(document_id));
        let result = self
            .fetch_json::<DataProviderListResponse>(&url)
            .await
            .map(|response| {
                response
                    .dataproviders
                    .dataprovider
                    .into_iter()
                    .map(|provider| provider.id)
                    .collect()
            });
        recover("getting data providers", document_id, result).unwrap_or_default()
    }

    pub async fn get_data_provider_details(
        &self,
        document_id: &ObjectId,
        provider_id: &ObjectId,
    ) -> Option<DataProviderDetails> {
        let url = format!(
            "{}/dataproviders/{}",
            self.document_url(document_id),
            provider_id
        );
        let result = self
            .fetch_json::<DataProviderResponse>(&url)
            .await
            .map(|response| response.dataprovider);
        recover("getting data provider details", provider_id, result)
    }

    /// Purge the cached result set of one data provider.
    pub async fn purge_data_provider(&self, document_id: &ObjectId, provider_id: &ObjectId) -> bool {
        let url = format!(
            "{}/dataproviders/{}?purge=true",
            self.document_url(document_id),
            provider_id
        );
        let result = match self.transport.put(&url, self.token.as_ref()).await {
            Ok(response) => error_for_status(response).await.map(|response| response.status()),
            Err(e) => Err(e),
        };
        match recover("purging data provider", provider_id, result) {
            Some(status) => {
                info!(
                    "Purged {} from Webi report {} - Status Code: {}",
                    provider_id, document_id, status
                );
                true
            }
            None => false,
        }
    }

    /// Purge every data provider of a document and optionally save it.
    ///
    /// Each provider is attempted even if an earlier one failed. The document
    /// is saved under its current name, which requires its details to load.
    pub async fn purge_document(&self, document_id: &ObjectId, save: bool) -> PurgeReport {
        let mut report = PurgeReport {
            document_id: document_id.clone(),
            ..PurgeReport::default()
        };

        for provider_id in self.list_data_providers(document_id).await {
            if self.purge_data_provider(document_id, &provider_id).await {
                report.purged.push(provider_id);
            } else {
                report.failed.push(provider_id);
            }
        }

        if save {
            match self.get_document_details(document_id).await {
                Some(details) => {
                    report.saved = self.save_document(document_id, &details.name).await;
                }
                None => debug!("Not saving {}: its details could not be read", document_id),
            }
        }

        report
    }

    fn document_url(&self, document_id: &ObjectId) -> String {
        format!("{}/documents/{}", self.endpoints().documents, document_id)
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        document_id: &ObjectId,
    ) -> Result<DocumentResponse<T>, ClientError> {
        self.fetch_json(&self.document_url(document_id)).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.transport.get(url, self.token.as_ref()).await?;
        parse_json(error_for_status(response).await?).await
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    Ok(serde_json::from_str(&response.text().await?)?)
}

/// Log a failed operation and drop the error.
fn recover<T>(operation: &str, id: &ObjectId, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Error {} ({}): {}", operation, id, e);
            None
        }
    }
}

/// Second-tier classification of a failed status request.
///
/// Only a 500 whose JSON body carries [`NOT_WEBI_ERROR_CODE`] is singled out;
/// everything else, including an undecodable 500 body, is `Unknown`.
pub fn classify_status_failure(
    document_id: &ObjectId,
    status: StatusCode,
    body: &str,
) -> DocumentStatus {
    if status != StatusCode::INTERNAL_SERVER_ERROR {
        error!("Error getting document info of {}: HTTP {}", document_id, status);
        return DocumentStatus::Unknown;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(error_json) => {
            let code = error_json
                .pointer("/error/error_code")
                .and_then(Value::as_str);
            if code == Some(NOT_WEBI_ERROR_CODE) {
                debug!("Document {} is not a Webi document", document_id);
                DocumentStatus::NotWebiDocument
            } else {
                error!(
                    "Error getting document info of {}: HTTP 500 with error code {:?}",
                    document_id, code
                );
                DocumentStatus::Unknown
            }
        }
        Err(e) => {
            error!("Error decoding 500 JSON response for {}: {}", document_id, e);
            DocumentStatus::Unknown
        }
    }
}
