use crate::{DomainError, ZoneName};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Fully qualified DNS name a TXT record is published under,
/// e.g. `_acme-challenge.site1.sub1.example.com`.
///
/// Stored lowercased and without the trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordName(Arc<str>);

impl RecordName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = normalize(raw);
        validate_labels(name)?;
        Ok(Self(Arc::from(name.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label_count(&self) -> usize {
        self.0.split('.').count()
    }

    /// Zones that could own this record, most specific first.
    ///
    /// Yields every strict label suffix of the name that still has at least
    /// two labels: `a.b.example.com` yields `b.example.com` then
    /// `example.com`. A two-label name yields nothing.
    pub fn zone_candidates(&self) -> impl Iterator<Item = ZoneName> + '_ {
        self.0
            .match_indices('.')
            .map(move |(idx, _)| &self.0[idx + 1..])
            .take_while(|suffix| suffix.contains('.'))
            .map(ZoneName::from_validated)
    }

    /// Name of this record relative to `zone`, as the provider's record
    /// endpoints expect it. The zone apex maps to the empty string.
    pub fn relative_to(&self, zone: &ZoneName) -> Result<String, DomainError> {
        let name = self.as_str();
        let zone = zone.as_str();

        if name == zone {
            return Ok(String::new());
        }

        name.strip_suffix(zone)
            .and_then(|head| head.strip_suffix('.'))
            .filter(|head| !head.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::InvalidRecordName(format!("{} is not within zone {}", name, zone))
            })
    }
}

impl FromStr for RecordName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub(crate) fn normalize(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

pub(crate) fn validate_labels(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidRecordName(
            "Name cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidRecordName(format!(
            "{} exceeds {} characters",
            name, MAX_NAME_LEN
        )));
    }

    let mut labels = 0usize;
    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidRecordName(format!(
                "{} contains an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidRecordName(format!(
                "Label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            )));
        }
        if let Some(bad) = label
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::InvalidRecordName(format!(
                "{} contains invalid character '{}'",
                name, bad
            )));
        }
        labels += 1;
    }

    if labels < 2 {
        return Err(DomainError::InvalidRecordName(format!(
            "{} must have at least two labels",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str) -> ZoneName {
        ZoneName::parse(name).unwrap()
    }

    #[test]
    fn test_relative_to_strips_zone() {
        let record = RecordName::parse("_acme-challenge.site1.sub1.example.com").unwrap();

        assert_eq!(
            record.relative_to(&zone("sub1.example.com")).unwrap(),
            "_acme-challenge.site1"
        );
        assert_eq!(
            record.relative_to(&zone("example.com")).unwrap(),
            "_acme-challenge.site1.sub1"
        );
    }

    #[test]
    fn test_relative_to_apex_is_empty() {
        let record = RecordName::parse("example.com").unwrap();
        assert_eq!(record.relative_to(&zone("example.com")).unwrap(), "");
    }

    #[test]
    fn test_relative_to_requires_label_boundary() {
        let record = RecordName::parse("_acme-challenge.myexample.com").unwrap();
        let result = record.relative_to(&zone("example.com"));

        assert!(matches!(result, Err(DomainError::InvalidRecordName(_))));
    }

    #[test]
    fn test_relative_to_foreign_zone() {
        let record = RecordName::parse("_acme-challenge.example.com").unwrap();
        assert!(record.relative_to(&zone("example.org")).is_err());
    }
}
