//! Data models for BusinessObjects platform entities.
//!
//! The platform is not consistent about identifier types: the infostore returns
//! folder and document ids as integers while the document service returns data
//! provider ids as strings ("DP0"). All of them are carried as [`ObjectId`].

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::{Display, EnumString};

use crate::format::CsvRecordProducer;

/// An opaque, server-assigned identifier.
///
/// Never parsed or interpreted by the client; only echoed back in URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ObjectId(text),
            RawId::Integer(number) => ObjectId(number.to_string()),
            RawId::Float(number) => ObjectId(number.to_string()),
        })
    }
}

/// The two universe formats the platform knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UniverseKind {
    /// Information Design Tool universe (semantic layer)
    Unx,
    /// Legacy Universe Design Tool universe
    Unv,
}

/// An entry of the infostore `children` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct InfostoreEntry {
    pub id: ObjectId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfostoreChildrenResponse {
    #[serde(default)]
    pub entries: Vec<InfostoreEntry>,
}

/// Response of `GET /logon/long` and `/logon/trusted` after a successful logon
#[derive(Debug, Clone, Deserialize)]
pub struct LogonResponse {
    #[serde(rename = "logonToken")]
    pub logon_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseSummary {
    pub id: ObjectId,
    pub name: String,
    #[serde(rename = "folderId")]
    pub folder_id: ObjectId,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UniverseListResponse {
    pub universes: UniverseList,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UniverseList {
    #[serde(default)]
    pub universe: Vec<UniverseSummary>,
}

/// Details of a single universe.
///
/// `kind` is the lower-cased `type` reported by the server. It is kept as text
/// because the server may report kinds this client does not handle; see
/// [`UniverseDetails::universe_kind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniverseDetails {
    pub kind: String,
    pub name: String,
    pub cuid: String,
}

impl UniverseDetails {
    pub fn universe_kind(&self) -> Option<UniverseKind> {
        self.kind.parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UniverseDetailsResponse {
    pub universe: UniverseDetailsBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UniverseDetailsBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub cuid: String,
}

/// Result of resolving the reports that depend on a universe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedReports {
    pub universe_id: ObjectId,
    pub universe_name: String,
    pub report_ids: Vec<ObjectId>,
}

/// A page of results from the CMS query endpoint.
///
/// Entries are kept as raw JSON because the selected columns differ per query.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CmsQueryResponse {
    #[serde(default)]
    pub entries: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Key the CMS query endpoint adds to every multi-valued property
pub const SI_TOTAL: &str = "SI_TOTAL";

/// Extracts the values of a multi-valued CMS property such as `SI_WEBI`.
///
/// The server encodes these as `{"1": id, "2": id, ..., "SI_TOTAL": n}`. The
/// synthetic total is dropped and values are ordered by their numeric key.
pub fn multi_valued_ids(property: &serde_json::Map<String, serde_json::Value>) -> Vec<ObjectId> {
    let mut ordered: BTreeMap<(u64, String), ObjectId> = BTreeMap::new();
    for (key, value) in property {
        if key == SI_TOTAL {
            continue;
        }
        let id = match value {
            serde_json::Value::String(text) => ObjectId::new(text.clone()),
            other => ObjectId::new(other.to_string()),
        };
        let position = key.parse::<u64>().unwrap_or(u64::MAX);
        ordered.insert((position, key.clone()), id);
    }
    ordered.into_values().collect()
}

/// Details of a Web Intelligence document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetails {
    pub name: String,
    pub path: String,
    pub cuid: String,
    #[serde(deserialize_with = "flexible_bool")]
    pub scheduled: bool,
    pub state: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBool {
    Flag(bool),
    Text(String),
}

/// Accepts `true` as well as `"true"`; the document service is not
/// consistent about boolean encoding.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawBool::deserialize(deserializer)? {
        RawBool::Flag(flag) => Ok(flag),
        RawBool::Text(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        RawBool::Text(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        RawBool::Text(text) => Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&text),
            &"a boolean or \"true\"/\"false\"",
        )),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DocumentResponse<T> {
    pub document: T,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DocumentState {
    pub state: String,
}

/// Outcome of a document status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "state", rename_all = "snake_case")]
pub enum DocumentStatus {
    /// The document exists and reported its state
    Status(String),
    /// The object exists but is not a Web Intelligence document (WSR 00999)
    NotWebiDocument,
    /// Any other failure
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataProviderListResponse {
    pub dataproviders: DataProviderList,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataProviderList {
    #[serde(default)]
    pub dataprovider: Vec<DataProviderEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataProviderEntry {
    pub id: ObjectId,
}

/// Details of a data provider of a Webi document.
///
/// Providers that do not read from a universe (e.g. free-hand SQL or a local
/// file) may come without a data source; those fields are then empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataProviderDetails {
    pub id: ObjectId,
    #[serde(rename = "dataSourceId", default)]
    pub source_id: ObjectId,
    #[serde(rename = "dataSourceType", default)]
    pub source_type: String,
    #[serde(rename = "dataSourceName", default)]
    pub source_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataProviderResponse {
    pub dataprovider: DataProviderDetails,
}

/// Result of purging every data provider of one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurgeReport {
    pub document_id: ObjectId,
    pub purged: Vec<ObjectId>,
    pub failed: Vec<ObjectId>,
    pub saved: bool,
}

impl CsvRecordProducer for ObjectId {
    fn csv_header() -> Vec<String> {
        vec!["ID".to_string()]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![self.0.clone()]]
    }
}

impl CsvRecordProducer for UniverseSummary {
    fn csv_header() -> Vec<String> {
        vec!["ID".to_string(), "NAME".to_string(), "FOLDER_ID".to_string()]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.to_string(),
            self.name.clone(),
            self.folder_id.to_string(),
        ]]
    }
}

impl CsvRecordProducer for UniverseDetails {
    fn csv_header() -> Vec<String> {
        vec!["KIND".to_string(), "NAME".to_string(), "CUID".to_string()]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![self.kind.clone(), self.name.clone(), self.cuid.clone()]]
    }
}

/// One row per dependent report; a universe without reports yields no rows.
impl CsvRecordProducer for RelatedReports {
    fn csv_header() -> Vec<String> {
        vec![
            "UNIVERSE_ID".to_string(),
            "UNIVERSE_NAME".to_string(),
            "REPORT_ID".to_string(),
        ]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        self.report_ids
            .iter()
            .map(|report_id| {
                vec![
                    self.universe_id.to_string(),
                    self.universe_name.clone(),
                    report_id.to_string(),
                ]
            })
            .collect()
    }
}

impl CsvRecordProducer for DocumentDetails {
    fn csv_header() -> Vec<String> {
        vec![
            "NAME".to_string(),
            "PATH".to_string(),
            "CUID".to_string(),
            "SCHEDULED".to_string(),
            "STATE".to_string(),
        ]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.name.clone(),
            self.path.clone(),
            self.cuid.clone(),
            self.scheduled.to_string(),
            self.state.clone(),
        ]]
    }
}

impl CsvRecordProducer for DocumentStatus {
    fn csv_header() -> Vec<String> {
        vec!["STATUS".to_string(), "STATE".to_string()]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        let record = match self {
            DocumentStatus::Status(state) => vec!["status".to_string(), state.clone()],
            DocumentStatus::NotWebiDocument => {
                vec!["not_webi_document".to_string(), String::new()]
            }
            DocumentStatus::Unknown => vec!["unknown".to_string(), String::new()],
        };
        vec![record]
    }
}

impl CsvRecordProducer for DataProviderDetails {
    fn csv_header() -> Vec<String> {
        vec![
            "ID".to_string(),
            "SOURCE_ID".to_string(),
            "SOURCE_TYPE".to_string(),
            "SOURCE_NAME".to_string(),
        ]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.to_string(),
            self.source_id.to_string(),
            self.source_type.clone(),
            self.source_name.clone(),
        ]]
    }
}

impl CsvRecordProducer for PurgeReport {
    fn csv_header() -> Vec<String> {
        vec![
            "DOCUMENT_ID".to_string(),
            "PURGED".to_string(),
            "FAILED".to_string(),
            "SAVED".to_string(),
        ]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        let join = |ids: &[ObjectId]| {
            ids.iter()
                .map(ObjectId::as_str)
                .collect::<Vec<_>>()
                .join(";")
        };
        vec![vec![
            self.document_id.to_string(),
            join(&self.purged),
            join(&self.failed),
            self.saved.to_string(),
        ]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Formattable, OutputFormat, OutputFormatOptions};
    use serde_json::json;

    #[test]
    fn test_object_id_accepts_numbers_and_strings() {
        let ids: Vec<ObjectId> = serde_json::from_value(json!([5567, "DP0", "AbC-12"])).unwrap();
        assert_eq!(
            ids,
            vec![ObjectId::from("5567"), ObjectId::from("DP0"), ObjectId::from("AbC-12")]
        );
    }

    #[test]
    fn test_universe_kind_parsing() {
        assert_eq!("unx".parse::<UniverseKind>().unwrap(), UniverseKind::Unx);
        assert_eq!("UNV".parse::<UniverseKind>().unwrap(), UniverseKind::Unv);
        assert!("relational".parse::<UniverseKind>().is_err());
        assert_eq!(UniverseKind::Unx.to_string(), "unx");
    }

    #[test]
    fn test_multi_valued_ids_skips_total_and_orders_numerically() {
        let property = json!({"SI_TOTAL": 3, "10": 900, "2": 200, "1": 100});
        let ids = multi_valued_ids(property.as_object().unwrap());
        assert_eq!(
            ids,
            vec![ObjectId::from("100"), ObjectId::from("200"), ObjectId::from("900")]
        );
    }

    #[test]
    fn test_multi_valued_ids_empty() {
        let property = json!({"SI_TOTAL": 0});
        assert!(multi_valued_ids(property.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_document_status_serialization() {
        let status = serde_json::to_value(DocumentStatus::Status("Unused".into())).unwrap();
        assert_eq!(status, json!({"status": "status", "state": "Unused"}));
        let status = serde_json::to_value(DocumentStatus::NotWebiDocument).unwrap();
        assert_eq!(status, json!({"status": "not_webi_document"}));
    }

    #[test]
    fn test_related_reports_csv_has_one_row_per_report() {
        let reports = RelatedReports {
            universe_id: ObjectId::from("5551"),
            universe_name: "eFashion".to_string(),
            report_ids: vec![ObjectId::from("7001"), ObjectId::from("7002")],
        };
        let format = OutputFormat::Csv(OutputFormatOptions {
            with_headers: true,
            pretty: false,
        });
        assert_eq!(
            reports.format(&format).unwrap(),
            "UNIVERSE_ID,UNIVERSE_NAME,REPORT_ID\n5551,eFashion,7001\n5551,eFashion,7002\n"
        );
    }

    #[test]
    fn test_purge_report_csv_joins_ids() {
        let report = PurgeReport {
            document_id: ObjectId::from("9001"),
            purged: vec![ObjectId::from("DP0"), ObjectId::from("DP1")],
            failed: vec![],
            saved: true,
        };
        assert_eq!(report.to_csv(false).unwrap(), "9001,DP0;DP1,,true\n");
    }

    #[test]
    fn test_document_details_accept_textual_scheduled_flag() {
        let details: DocumentDetails = serde_json::from_value(json!({
            "name": "Sales", "path": "Public Folders", "cuid": "Fz1",
            "scheduled": "False", "state": "Original"
        }))
        .unwrap();
        assert!(!details.scheduled);

        let details: DocumentDetails = serde_json::from_value(json!({
            "name": "Sales", "path": "Public Folders", "cuid": "Fz1",
            "scheduled": true, "state": "Original"
        }))
        .unwrap();
        assert!(details.scheduled);

        let invalid = serde_json::from_value::<DocumentDetails>(json!({
            "name": "Sales", "path": "Public Folders", "cuid": "Fz1",
            "scheduled": "sometimes", "state": "Original"
        }));
        assert!(invalid.is_err());
    }

    #[test]
    fn test_data_provider_without_data_source() {
        let details: DataProviderDetails =
            serde_json::from_value(json!({ "id": "DP1", "name": "Free-hand SQL" })).unwrap();
        assert_eq!(details.id, ObjectId::from("DP1"));
        assert_eq!(details.source_id, ObjectId::default());
        assert!(details.source_type.is_empty());
    }
}
