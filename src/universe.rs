//! Universe lookups and the relationships resolved through CMS queries.

use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::client::BoClient;
use crate::error::ClientError;
use crate::model::{
    multi_valued_ids, CmsQueryResponse, ObjectId, RelatedReports, UniverseDetails,
    UniverseDetailsResponse, UniverseListResponse, UniverseSummary,
};
use crate::query::{report_field, CmsQuery, CMS_QUERY_PAGE_SIZE};

impl BoClient {
    /// List the universes visible to the logged on user.
    pub async fn list_universes(&self) -> Result<Vec<UniverseSummary>, ClientError> {
        let url = format!("{}/universes", self.endpoints().documents);
        let response = self.transport.get(&url, self.token.as_ref()).await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            error!("Could not retrieve universes: {} - {}", status, body);
            return Err(ClientError::Api { status, body });
        }

        let universes: UniverseListResponse = serde_json::from_str(&body)?;
        Ok(universes.universes.universe)
    }

    /// Type, name and CUID of a universe.
    pub async fn get_universe_details(
        &self,
        universe_id: &ObjectId,
    ) -> Result<UniverseDetails, ClientError> {
        let url = format!("{}/universes/{}", self.endpoints().documents, universe_id);
        let response = self.transport.get(&url, self.token.as_ref()).await?;
        let status = response.status();

        if status != StatusCode::OK {
            debug!("Universe {} lookup returned {}", universe_id, status);
            return Err(ClientError::NotFound(format!(
                "Could not retrieve the universe {} (HTTP {}). Check the universe id again",
                universe_id, status
            )));
        }

        let details: UniverseDetailsResponse = serde_json::from_str(&response.text().await?)?;
        Ok(UniverseDetails {
            kind: details.universe.kind.to_lowercase(),
            name: details.universe.name,
            cuid: details.universe.cuid,
        })
    }

    /// Find every report built on a universe.
    ///
    /// The universe kind decides which CMS query is sent; a kind other than
    /// `unx` or `unv` fails before any query is issued.
    pub async fn get_related_reports(
        &self,
        universe_id: &ObjectId,
    ) -> Result<RelatedReports, ClientError> {
        let details = self.get_universe_details(universe_id).await?;
        let kind = details
            .universe_kind()
            .ok_or_else(|| ClientError::UnsupportedUniverseType(details.kind.clone()))?;
        info!("Finding all reports related to the universe type: {}", kind);

        let query = CmsQuery::related_reports(kind, universe_id)?;
        let entry = self.first_cms_entry(&query).await?;

        let field = report_field(kind);
        let report_ids = match entry.get(field) {
            Some(Value::Object(property)) => multi_valued_ids(property),
            None | Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(ClientError::UnexpectedResponse(format!(
                    "{} is not a multi-valued property: {}",
                    field, other
                )))
            }
        };

        let universe_id = match entry.get("SI_ID") {
            Some(id) => serde_json::from_value(id.clone())?,
            None => universe_id.clone(),
        };
        let universe_name = entry
            .get("SI_NAME")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(details.name);

        Ok(RelatedReports {
            universe_id,
            universe_name,
            report_ids,
        })
    }

    /// Id of the connection a universe reads from.
    pub async fn get_connection_id(&self, universe_id: &ObjectId) -> Result<ObjectId, ClientError> {
        let query = CmsQuery::connection(universe_id)?;
        let entry = self.first_cms_entry(&query).await?;

        let connection = entry
            .get("SI_DATACONNECTION")
            .and_then(|connections| connections.get("1"))
            .ok_or_else(|| {
                ClientError::NotFound(format!("Universe {} has no data connection", universe_id))
            })?;
        Ok(serde_json::from_value(connection.clone())?)
    }

    async fn first_cms_entry(&self, query: &CmsQuery) -> Result<Map<String, Value>, ClientError> {
        let url = format!(
            "{}/cmsquery?page=1&pagesize={}",
            self.endpoints().query,
            CMS_QUERY_PAGE_SIZE
        );
        debug!("CMS query: {}", query.as_str());

        let response = self
            .transport
            .post_json(&url, query, self.token.as_ref())
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            error!("CMS query failed: {} - {}", status, body);
            return Err(ClientError::Api { status, body });
        }

        let result: CmsQueryResponse = serde_json::from_str(&body)?;
        result
            .entries
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("No objects match {}", query.as_str())))
    }
}
