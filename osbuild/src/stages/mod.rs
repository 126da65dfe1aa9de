//! Stage envelope and the sealed set of stage options.
//!
//! A [`Stage`] pairs an osbuild stage type (e.g. `org.osbuild.waagent.conf`)
//! with exactly one options record. The options record determines the stage
//! type, so the two can never disagree. Only the option types defined in this
//! module implement [`StageOptions`]; the trait is sealed.

// Binds an options record to its stage type and `StageOptionsKind` variant.
macro_rules! stage_options {
    ($options:ty, $variant:ident, $stage_type:literal) => {
        impl $crate::stages::sealed::Sealed for $options {
            fn into_kind(self) -> $crate::stages::StageOptionsKind {
                $crate::stages::StageOptionsKind::$variant(self)
            }

            fn from_kind(kind: &$crate::stages::StageOptionsKind) -> Option<&Self> {
                match kind {
                    $crate::stages::StageOptionsKind::$variant(options) => Some(options),
                    _ => None,
                }
            }
        }

        impl $crate::stages::StageOptions for $options {
            const STAGE_TYPE: &'static str = $stage_type;
        }

        impl From<$options> for $crate::stages::Stage {
            fn from(options: $options) -> Self {
                Self::new(options)
            }
        }
    };
}

mod hostname;
mod keymap;
mod locale;
mod timezone;
mod waagent_conf;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

pub use hostname::{new_hostname_stage, HostnameStageOptions};
pub use keymap::{new_keymap_stage, KeymapStageOptions, X11Keymap};
pub use locale::{new_locale_stage, LocaleStageOptions};
pub use timezone::{new_timezone_stage, TimezoneStageOptions};
pub use waagent_conf::{new_waagent_conf_stage, WaAgentConfStageOptions, WaAgentConfig};

// Sealed trait pattern: `Sealed` is public but lives in a private module, so
// downstream crates can name `StageOptions` but never implement it.
mod sealed {
    use super::StageOptionsKind;

    pub trait Sealed {
        fn into_kind(self) -> StageOptionsKind;

        fn from_kind(kind: &StageOptionsKind) -> Option<&Self>;
    }
}

/// Options payload accepted by a [`Stage`].
///
/// Implemented only by the option records in this crate. Each implementor
/// carries the stage type string it is bound to.
pub trait StageOptions:
    sealed::Sealed + Serialize + DeserializeOwned + Debug + Clone + PartialEq + Send + Sync
{
    /// The osbuild stage type this options record configures.
    const STAGE_TYPE: &'static str;
}

/// The closed set of stage payloads, keyed by stage type on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options")]
#[non_exhaustive]
pub enum StageOptionsKind {
    /// `org.osbuild.waagent.conf`
    #[serde(rename = "org.osbuild.waagent.conf")]
    WaAgentConf(WaAgentConfStageOptions),
    /// `org.osbuild.hostname`
    #[serde(rename = "org.osbuild.hostname")]
    Hostname(HostnameStageOptions),
    /// `org.osbuild.locale`
    #[serde(rename = "org.osbuild.locale")]
    Locale(LocaleStageOptions),
    /// `org.osbuild.timezone`
    #[serde(rename = "org.osbuild.timezone")]
    Timezone(TimezoneStageOptions),
    /// `org.osbuild.keymap`
    #[serde(rename = "org.osbuild.keymap")]
    Keymap(KeymapStageOptions),
}

impl StageOptionsKind {
    /// Returns the stage type bound to this payload.
    #[must_use]
    pub fn stage_type(&self) -> &'static str {
        match self {
            Self::WaAgentConf(_) => WaAgentConfStageOptions::STAGE_TYPE,
            Self::Hostname(_) => HostnameStageOptions::STAGE_TYPE,
            Self::Locale(_) => LocaleStageOptions::STAGE_TYPE,
            Self::Timezone(_) => TimezoneStageOptions::STAGE_TYPE,
            Self::Keymap(_) => KeymapStageOptions::STAGE_TYPE,
        }
    }
}

/// A single stage in an osbuild pipeline.
///
/// Serializes as `{"type": "<stage type>", "options": {...}}`. A stage can
/// only be built from a [`StageOptions`] value, either through [`Stage::new`],
/// the `new_*_stage` functions, or `From`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage {
    options: StageOptionsKind,
}

impl Stage {
    /// Wraps an options record into a stage of the matching type.
    #[must_use]
    pub fn new<O: StageOptions>(options: O) -> Self {
        Self {
            options: options.into_kind(),
        }
    }

    /// Returns the stage type.
    #[must_use]
    pub fn stage_type(&self) -> &'static str {
        self.options.stage_type()
    }

    /// Returns the options payload.
    #[must_use]
    pub fn options(&self) -> &StageOptionsKind {
        &self.options
    }

    /// Returns the options payload if it is of type `O`.
    #[must_use]
    pub fn options_as<O: StageOptions>(&self) -> Option<&O> {
        O::from_kind(&self.options)
    }

    /// Returns true if this stage is of the type configured by `O`.
    #[must_use]
    pub fn is<O: StageOptions>(&self) -> bool {
        self.options_as::<O>().is_some()
    }
}
