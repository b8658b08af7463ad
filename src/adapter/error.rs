use crate::client::ClientError;
use thiserror::Error;

/// Setup failure: the handshake or tool listing could not complete.
///
/// Invocation failures never surface here; wrappers report them as text.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("initialize: {0}")]
    Initialize(#[source] ClientError),

    #[error("initialize: server speaks unsupported protocol version {0}")]
    UnsupportedProtocolVersion(String),

    #[error("list tools: {0}")]
    ListTools(#[source] ClientError),

    #[error("marshal input schema of tool '{tool}': {source}")]
    MarshalSchema {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}
