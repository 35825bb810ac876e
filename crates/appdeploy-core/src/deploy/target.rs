//! Deploy target values: a literal or one of the reserved sentinels.

use std::fmt;

/// Read the value from the local gcloud configuration.
pub const GCLOUD_CONFIG: &str = "GCLOUD_CONFIG";

/// Read the value from appengine-web.xml.
pub const APPENGINE_CONFIG: &str = "APPENGINE_CONFIG";

/// A user-supplied project id or version, classified once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetValue {
    Literal(String),
    GcloudConfig,
    AppEngineConfig,
}

impl TargetValue {
    /// Classify a supplied value. Blank input is unset.
    pub fn parse(supplied: Option<&str>) -> Option<Self> {
        let value = supplied?;
        if value.trim().is_empty() {
            return None;
        }
        Some(match value {
            GCLOUD_CONFIG => TargetValue::GcloudConfig,
            APPENGINE_CONFIG => TargetValue::AppEngineConfig,
            literal => TargetValue::Literal(literal.to_string()),
        })
    }
}

impl fmt::Display for TargetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetValue::Literal(value) => f.write_str(value),
            TargetValue::GcloudConfig => f.write_str(GCLOUD_CONFIG),
            TargetValue::AppEngineConfig => f.write_str(APPENGINE_CONFIG),
        }
    }
}
