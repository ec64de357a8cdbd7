use crate::record_name::{normalize, validate_labels};
use crate::DomainError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A provider-hosted zone: an apex domain or a delegated sub-zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneName(Arc<str>);

impl ZoneName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = normalize(raw);
        validate_labels(name)?;
        Ok(Self(Arc::from(name.to_ascii_lowercase())))
    }

    /// Built from a suffix of an already validated `RecordName`.
    pub(crate) fn from_validated(suffix: &str) -> Self {
        Self(Arc::from(suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label_count(&self) -> usize {
        self.0.split('.').count()
    }
}

impl FromStr for ZoneName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZoneName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ZoneName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Answer of a single zone existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneProbe {
    Exists,
    NotFound,
}
