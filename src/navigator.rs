//! Folder and document discovery through the infostore.
//!
//! The infostore `children` listing is requested with a single, large page.
//! There is no pagination: a folder with more children than the page size is
//! truncated, and a warning is logged when a page comes back full.

use reqwest::StatusCode;
use tracing::{debug, error, trace, warn};

use crate::client::BoClient;
use crate::error::ClientError;
use crate::model::{InfostoreChildrenResponse, ObjectId};

/// Infostore object type of a folder
pub const KIND_FOLDER: &str = "Folder";
/// Infostore object type of a Web Intelligence document
pub const KIND_WEBI: &str = "Webi";

impl BoClient {
    /// All folders below `root`, depth first, each folder before its
    /// descendants. The root itself is not included.
    ///
    /// A folder whose listing is refused by the server is kept in the result
    /// but its sub-folders are skipped; the walk continues with its siblings.
    /// Descending more than `max_folder_depth` levels below the root fails
    /// with [`ClientError::DepthExceeded`].
    pub async fn list_folders_recursive(
        &self,
        root: &ObjectId,
    ) -> Result<Vec<ObjectId>, ClientError> {
        let mut folders = Vec::new();
        let mut pending = vec![(root.clone(), 0usize)];

        while let Some((folder_id, depth)) = pending.pop() {
            if depth > 0 {
                folders.push(folder_id.clone());
            }

            let children = match self.list_children(&folder_id, KIND_FOLDER).await {
                Ok(children) => children,
                Err(ClientError::Api { status, .. }) => {
                    debug!("Skipping sub-folders of {} ({})", folder_id, status);
                    continue;
                }
                Err(e) => return Err(e),
            };
            if children.is_empty() {
                continue;
            }
            if depth >= self.max_folder_depth {
                return Err(ClientError::DepthExceeded {
                    folder_id,
                    max_depth: self.max_folder_depth,
                });
            }

            // Reversed so the first child is popped first
            pending.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }

        Ok(folders)
    }

    /// Webi documents directly inside one folder. Any failure yields an empty
    /// list.
    pub async fn list_documents(&self, folder_id: &ObjectId) -> Vec<ObjectId> {
        match self.list_children(folder_id, KIND_WEBI).await {
            Ok(documents) => documents,
            Err(e) => {
                error!("Error listing documents of folder {}: {}", folder_id, e);
                Vec::new()
            }
        }
    }

    /// Webi documents in `root` and in every folder below it, in folder order.
    pub async fn list_documents_recursive(
        &self,
        root: &ObjectId,
    ) -> Result<Vec<ObjectId>, ClientError> {
        let mut documents = self.list_documents(root).await;
        for folder_id in self.list_folders_recursive(root).await? {
            documents.extend(self.list_documents(&folder_id).await);
        }
        Ok(documents)
    }

    async fn list_children(
        &self,
        folder_id: &ObjectId,
        kind: &str,
    ) -> Result<Vec<ObjectId>, ClientError> {
        let url = format!(
            "{}/infostore/{}/children?type={}&page=1&pagesize={}",
            self.endpoints().platform,
            folder_id,
            kind,
            self.page_size
        );
        let response = self.transport.get(&url, self.token.as_ref()).await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::Api { status, body });
        }

        let children: InfostoreChildrenResponse = serde_json::from_str(&body)?;
        if children.entries.len() >= self.page_size {
            warn!(
                "Folder {} returned a full page of {} {} entries; the listing may be truncated",
                folder_id,
                children.entries.len(),
                kind
            );
        }
        trace!("Folder {} has {} {} children", folder_id, children.entries.len(), kind);

        Ok(children.entries.into_iter().map(|entry| entry.id).collect())
    }
}
