// scrumlint-core/src/domain/catalog/mod.rs

pub mod builtin;
pub mod operator;
pub mod rule;

// Re-exports
pub use builtin::default_catalog;
pub use operator::OperatorKind;
pub use rule::{DetectionLogic, Rule, Severity, Threshold};

use serde::{Deserialize, Serialize};

/// The full set of configured detection rules, in the order they were
/// supplied. Rule order decides the order violations are emitted for the
/// same row, so it is preserved end to end.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RuleCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_info: Option<MetaInfo>,

    pub anti_patterns: Vec<Rule>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MetaInfo {
    pub version: String,
    pub last_updated: String,
}

impl RuleCatalog {
    pub fn rules(&self) -> &[Rule] {
        &self.anti_patterns
    }

    pub fn len(&self) -> usize {
        self.anti_patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anti_patterns.is_empty()
    }
}
