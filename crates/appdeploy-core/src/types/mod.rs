//! Shared core types used across configuration and deployment layers.

use serde::{Deserialize, Serialize};

/// App Engine runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Standard environment (appengine-web.xml, generated app.yaml).
    #[default]
    Standard,
    /// Flexible environment (hand-written app.yaml, no web descriptor).
    Flexible,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Standard => "standard",
            Environment::Flexible => "flexible",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
