//! Usage classification of action references.

mod classification;

pub use classification::{Matcher, UNKNOWN_NAME, classify};
pub use ngv_graph::{Usage, UsageKind};
