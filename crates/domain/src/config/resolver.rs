use serde::{Deserialize, Serialize};

/// What a zone scan does when an existence probe fails for a reason other
/// than "zone not found" (bad token, network fault, provider 5xx).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeErrorPolicy {
    /// Log the failure and move on to the next shorter candidate.
    #[default]
    TreatAsAbsent,
    /// Stop the scan and return the failure.
    Abort,
}

/// Zone resolution configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub on_probe_error: ProbeErrorPolicy,
}
