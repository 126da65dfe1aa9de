//! `org.osbuild.hostname`: set the static hostname of the image.

use serde::{Deserialize, Serialize};

use super::Stage;

/// Options for the `org.osbuild.hostname` stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostnameStageOptions {
    /// Written to `/etc/hostname`.
    pub hostname: String,
}

impl HostnameStageOptions {
    /// Creates hostname options.
    #[must_use]
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }
}

stage_options!(HostnameStageOptions, Hostname, "org.osbuild.hostname");

/// Creates an `org.osbuild.hostname` stage.
#[must_use]
pub fn new_hostname_stage(options: HostnameStageOptions) -> Stage {
    Stage::new(options)
}
