//! Channel to the queen service.
//!
//! The queen is addressed by `CAO_QUEEN_URL` and knows this process by
//! `CAO_QUEEN_TAG`. The channel connects lazily; every request sent through
//! it carries the tag as metadata.

use std::time::Duration;

use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::interceptor::InterceptedService;
use tonic::service::Interceptor;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

use common::{ConfigError, QueenConfig};

/// Metadata key carrying the queen tag.
pub const QUEEN_TAG_METADATA: &str = "x-cao-queen-tag";

/// Channel type handed to queen clients.
pub type QueenChannel = InterceptedService<Channel, QueenTagInterceptor>;

/// Add an `http://` scheme when the configured address has none.
pub fn endpoint_uri(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

/// Stamps outgoing requests with the queen tag.
#[derive(Clone, Debug)]
pub struct QueenTagInterceptor {
    tag: MetadataValue<Ascii>,
}

impl QueenTagInterceptor {
    pub fn new(tag: &str) -> Result<Self, ConfigError> {
        let tag = MetadataValue::try_from(tag).map_err(|_| ConfigError::InvalidQueenTag)?;
        Ok(Self { tag })
    }
}

impl Interceptor for QueenTagInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert(QUEEN_TAG_METADATA, self.tag.clone());
        Ok(request)
    }
}

/// Lazily connected link to the queen.
#[derive(Clone, Debug)]
pub struct QueenLink {
    uri: String,
    tag: String,
    channel: Channel,
    interceptor: QueenTagInterceptor,
}

impl QueenLink {
    /// Build the endpoint and a lazy channel. Must run inside a tokio runtime.
    pub fn new(config: &QueenConfig) -> Result<Self, ConfigError> {
        let uri = endpoint_uri(&config.url);
        let endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| ConfigError::InvalidQueenEndpoint {
                url: config.url.clone(),
                reason: e.to_string(),
            })?
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms));
        let interceptor = QueenTagInterceptor::new(&config.tag)?;

        tracing::info!(queen = %uri, tag = %config.tag, "Queen link prepared");

        Ok(Self {
            uri,
            tag: config.tag.clone(),
            channel: endpoint.connect_lazy(),
            interceptor,
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Channel for generated queen clients; requests carry the tag.
    pub fn channel(&self) -> QueenChannel {
        InterceptedService::new(self.channel.clone(), self.interceptor.clone())
    }
}
