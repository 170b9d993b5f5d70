//! How a reference to an action is being used.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag attached to a reference.
///
/// Serialized internally tagged by `type` with upper-case kind names,
/// e.g. `{"type": "METHOD", "name": "dispatch"}`. PascalCase kind names are
/// accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Usage {
    #[serde(alias = "Unknown")]
    Unknown,
    #[serde(alias = "Instantiate")]
    Instantiate,
    /// Inside a member decorated with `@Effect(`, named after the member.
    #[serde(alias = "Effect")]
    Effect { name: String },
    /// Inside a method, named after the method.
    #[serde(alias = "Method")]
    Method { name: String },
    #[serde(alias = "Reducer")]
    Reducer,
    /// Inside a constructor, named after the class.
    #[serde(alias = "Constructor")]
    Constructor { name: String },
}

impl Usage {
    pub fn kind(&self) -> UsageKind {
        match self {
            Usage::Unknown => UsageKind::Unknown,
            Usage::Instantiate => UsageKind::Instantiate,
            Usage::Effect { .. } => UsageKind::Effect,
            Usage::Method { .. } => UsageKind::Method,
            Usage::Reducer => UsageKind::Reducer,
            Usage::Constructor { .. } => UsageKind::Constructor,
        }
    }

    /// The derived name, for the variants that carry one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Usage::Effect { name } | Usage::Method { name } | Usage::Constructor { name } => {
                Some(name)
            }
            Usage::Unknown | Usage::Instantiate | Usage::Reducer => None,
        }
    }
}

/// Fieldless mirror of [`Usage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageKind {
    Unknown,
    Instantiate,
    Effect,
    Method,
    Reducer,
    Constructor,
}

/// Order in which a reference's dominant usage is chosen; first present wins.
pub const USAGE_PRIORITY: [UsageKind; 5] = [
    UsageKind::Reducer,
    UsageKind::Effect,
    UsageKind::Method,
    UsageKind::Constructor,
    UsageKind::Unknown,
];

impl UsageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageKind::Unknown => "Unknown",
            UsageKind::Instantiate => "Instantiate",
            UsageKind::Effect => "Effect",
            UsageKind::Method => "Method",
            UsageKind::Reducer => "Reducer",
            UsageKind::Constructor => "Constructor",
        }
    }
}

impl fmt::Display for UsageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
