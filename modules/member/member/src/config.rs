//! Configuration for the member module.

use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the member module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MemberConfig {
    /// Longest accepted text attribute, in characters.
    pub max_field_length: usize,

    /// Whether an empty string counts as "not supplied" in a patch.
    /// Default: `true`
    pub treat_empty_as_unset: bool,
}

impl Default for MemberConfig {
    fn default() -> Self {
        let service = ServiceConfig::default();
        Self {
            max_field_length: service.max_field_length,
            treat_empty_as_unset: service.treat_empty_as_unset,
        }
    }
}

impl MemberConfig {
    #[must_use]
    pub fn to_service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_field_length: self.max_field_length,
            treat_empty_as_unset: self.treat_empty_as_unset,
        }
    }
}
