//! CMS query builder.
//!
//! The CMS query endpoint accepts a SQL-like expression over the virtual
//! tables `CI_INFOOBJECTS` and `CI_APPOBJECTS`. The expressions below are a
//! fixed contract with the server and are reproduced character for character,
//! including their inconsistent spacing and casing. The only thing that varies
//! is the object id, which must be numeric before it is interpolated.

use serde::Serialize;

use crate::error::ClientError;
use crate::model::{ObjectId, UniverseKind};

/// Page size requested from the CMS query endpoint; matches the `TOP` clause.
pub const CMS_QUERY_PAGE_SIZE: usize = 50000;

/// A validated CMS query ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmsQuery {
    query: String,
}

impl CmsQuery {
    /// Reports depending on a universe, using the template for its kind.
    pub fn related_reports(kind: UniverseKind, universe_id: &ObjectId) -> Result<Self, ClientError> {
        let id = numeric_id(universe_id)?;
        let query = match kind {
            UniverseKind::Unx => format!(
                "SELECT TOP 50000 SI_ID, SI_NAME, SI_SL_DOCUMENTS FROM CI_APPOBJECTS WHERE SI_KIND = 'DSL.MetaDataFile' AND SI_ID ={}",
                id
            ),
            UniverseKind::Unv => format!(
                "SELECT TOP 50000 SI_ID, SI_NAME, SI_WEBI FROM CI_APPOBJECTS WHERE SI_KIND = 'Universe' AND SI_ID = {}",
                id
            ),
        };
        Ok(Self { query })
    }

    /// Connection used by a universe.
    pub fn connection(universe_id: &ObjectId) -> Result<Self, ClientError> {
        let id = numeric_id(universe_id)?;
        Ok(Self {
            query: format!(
                "select SI_NAME, SI_SPECIFIC_KIND, SI_DATACONNECTION from ci_appobjects, ci_infoobjects where si_id={}",
                id
            ),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }
}

/// Name of the multi-valued property holding the reports of a universe kind
pub fn report_field(kind: UniverseKind) -> &'static str {
    match kind {
        UniverseKind::Unx => "SI_SL_DOCUMENTS",
        UniverseKind::Unv => "SI_WEBI",
    }
}

/// Only plain ASCII digits are accepted: `SI_ID` is an integer column and
/// anything else could change the meaning of the expression.
fn numeric_id(id: &ObjectId) -> Result<&str, ClientError> {
    let text = id.as_str();
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        Ok(text)
    } else {
        Err(ClientError::InvalidIdentifier(text.to_string()))
    }
}
