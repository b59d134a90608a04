//! Codec configuration

/// Options for [`JsonCodec`](crate::JsonCodec)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Indent encoded documents
    pub pretty: bool,
    /// Reject typed resource documents that omit `resourceType`
    pub require_resource_type: bool,
}

impl FormatConfig {
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_require_resource_type(mut self, require: bool) -> Self {
        self.require_resource_type = require;
        self
    }
}
