//! Encoding manifests and manifest fragments to JSON or YAML.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::errors::{ManifestError, Result};

/// Wire format for encoded manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ManifestFormat {
    /// JSON, the format the build engine reads.
    #[default]
    Json,
    /// YAML with the same key names and omission rules.
    #[cfg(feature = "yaml")]
    Yaml,
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ManifestFormat {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ManifestError::UnknownFormat(s.to_string())),
        }
    }
}

/// Configuration for encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodingConfig {
    /// Output format.
    pub format: ManifestFormat,
    /// Indent the output. YAML output is always block-indented.
    pub pretty: bool,
}

impl EncodingConfig {
    /// Creates a config for compact JSON.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: ManifestFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables indented output.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

/// Encodes `value` to a string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in the chosen format.
pub fn encode<T: Serialize + ?Sized>(value: &T, config: &EncodingConfig) -> Result<String> {
    let encoded = match config.format {
        ManifestFormat::Json if config.pretty => serde_json::to_string_pretty(value)?,
        ManifestFormat::Json => serde_json::to_string(value)?,
        #[cfg(feature = "yaml")]
        ManifestFormat::Yaml => serde_yaml::to_string(value)?,
    };

    debug!(format = %config.format, bytes = encoded.len(), "Encoded manifest");
    Ok(encoded)
}

/// Encodes `value` into `writer` and flushes it.
///
/// # Errors
///
/// Returns an error if encoding fails or the writer cannot be written to.
pub fn encode_to_writer<T, W>(value: &T, mut writer: W, config: &EncodingConfig) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match config.format {
        ManifestFormat::Json if config.pretty => serde_json::to_writer_pretty(&mut writer, value)?,
        ManifestFormat::Json => serde_json::to_writer(&mut writer, value)?,
        #[cfg(feature = "yaml")]
        ManifestFormat::Yaml => serde_yaml::to_writer(&mut writer, value)?,
    }
    writer.flush()?;

    debug!(format = %config.format, "Wrote manifest");
    Ok(())
}

/// Decodes a value from `input`.
///
/// Keys missing from the input decode as unset optional fields.
///
/// # Errors
///
/// Returns an error on malformed input, a wrong value type at a known key, or
/// an unknown stage type.
pub fn decode<T: DeserializeOwned>(input: &str, format: ManifestFormat) -> Result<T> {
    trace!(format = %format, bytes = input.len(), "Decoding manifest");
    match format {
        ManifestFormat::Json => Ok(serde_json::from_str(input)?),
        #[cfg(feature = "yaml")]
        ManifestFormat::Yaml => Ok(serde_yaml::from_str(input)?),
    }
}

/// Encodes `value` as compact JSON.
///
/// # Errors
///
/// See [`encode`].
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    encode(value, &EncodingConfig::new())
}

/// Encodes `value` as indented JSON.
///
/// # Errors
///
/// See [`encode`].
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    encode(value, &EncodingConfig::new().pretty())
}

/// Decodes `value` from JSON.
///
/// # Errors
///
/// See [`decode`].
pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    decode(input, ManifestFormat::Json)
}

/// Encodes `value` as YAML.
///
/// # Errors
///
/// See [`encode`].
#[cfg(feature = "yaml")]
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    encode(value, &EncodingConfig::new().with_format(ManifestFormat::Yaml))
}

/// Decodes `value` from YAML.
///
/// # Errors
///
/// See [`decode`].
#[cfg(feature = "yaml")]
pub fn from_yaml<T: DeserializeOwned>(input: &str) -> Result<T> {
    decode(input, ManifestFormat::Yaml)
}
