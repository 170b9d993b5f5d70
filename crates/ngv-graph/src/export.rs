//! Exported analysis schema, the hand-off between analysis and graph building.

use serde::{Deserialize, Serialize};

use crate::usage::Usage;

/// One discovered action and the places it is referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionExport {
    pub name: String,
    pub file_path: String,
    pub line: u32,
    #[serde(default)]
    pub references: Vec<ReferenceExport>,
}

/// One occurrence of an action's type, with its classified usages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceExport {
    pub file_path: String,
    pub line: u32,
    #[serde(default)]
    pub usages: Vec<Usage>,
}

impl ReferenceExport {
    pub fn has_usage(&self, kind: crate::UsageKind) -> bool {
        self.usages.iter().any(|usage| usage.kind() == kind)
    }

    /// A bare `new Action()` with no other context, or nothing at all.
    pub fn is_noise(&self) -> bool {
        match self.usages.as_slice() {
            [] => true,
            [only] => matches!(only, Usage::Instantiate),
            _ => false,
        }
    }
}
