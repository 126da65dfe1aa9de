//! `org.osbuild.timezone`

use serde::{Deserialize, Serialize};

use super::Stage;

/// Options for the `org.osbuild.timezone` stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimezoneStageOptions {
    /// Zone name from the tz database, e.g. `Europe/Berlin`.
    pub zone: String,
}

impl TimezoneStageOptions {
    /// Creates timezone options.
    #[must_use]
    pub fn new(zone: impl Into<String>) -> Self {
        Self { zone: zone.into() }
    }
}

stage_options!(TimezoneStageOptions, Timezone, "org.osbuild.timezone");

/// Creates an `org.osbuild.timezone` stage.
#[must_use]
pub fn new_timezone_stage(options: TimezoneStageOptions) -> Stage {
    Stage::new(options)
}
