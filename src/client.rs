//! The BusinessObjects REST client.
//!
//! A [`BoClient`] is one logical session against one platform: it owns the
//! [`Transport`] and the logon token currently in use. Operations are spread
//! over the `auth`, `navigator`, `universe` and `documents` modules, each
//! adding an `impl BoClient` block.
//!
//! Operations take `&self` and send one request at a time; only logon takes
//! `&mut self`. Share a client between tasks only behind a lock, or better,
//! give each logical session its own client.

use crate::configuration::{
    Configuration, ServerSettings, DEFAULT_MAX_FOLDER_DEPTH, DEFAULT_PAGE_SIZE,
};
use crate::error::ClientError;
use crate::transport::{Endpoints, LogonToken, Transport};

pub struct BoClient {
    pub(crate) transport: Transport,
    pub(crate) token: Option<LogonToken>,
    pub(crate) max_folder_depth: usize,
    pub(crate) page_size: usize,
}

impl BoClient {
    /// Create a client for the given server. No request is sent and nothing
    /// about the server is validated until the first call.
    pub fn new(settings: &ServerSettings) -> Result<Self, ClientError> {
        Ok(Self {
            transport: Transport::new(settings)?,
            token: None,
            max_folder_depth: DEFAULT_MAX_FOLDER_DEPTH,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn from_configuration(configuration: &Configuration) -> Result<Self, ClientError> {
        Ok(Self::new(&configuration.server)?
            .with_max_folder_depth(configuration.max_folder_depth)
            .with_page_size(configuration.page_size))
    }

    /// Maximum folder nesting below the root that recursive listing will follow
    #[must_use]
    pub fn with_max_folder_depth(mut self, max_folder_depth: usize) -> Self {
        self.max_folder_depth = max_folder_depth;
        self
    }

    /// Page size requested from the infostore, at least 1
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.transport.endpoints()
    }

    /// The token sent with every request, if a logon succeeded
    pub fn logon_token(&self) -> Option<&LogonToken> {
        self.token.as_ref()
    }

    pub fn max_folder_depth(&self) -> usize {
        self.max_folder_depth
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl std::fmt::Debug for BoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoClient")
            .field("platform", &self.endpoints().platform)
            .field("token", &self.token)
            .field("max_folder_depth", &self.max_folder_depth)
            .field("page_size", &self.page_size)
            .finish()
    }
}
