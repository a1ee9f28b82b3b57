// scrumlint-core/src/domain/catalog/operator.rs

use std::str::FromStr;

/// Closed enumeration of the matching semantics a rule can declare.
///
/// Catalogs carry the operator as a raw string; resolution happens here so
/// that an unrecognized operator makes one rule inert instead of failing
/// the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    OlderThanDays,
    IsEmpty,
    GreaterThan,
    CreatedAfterSprintStart,
    WordCountGreaterThan,
    WordCountLessThan,
    DaysSinceLastUpdate,
    ContainsText,
    FieldsAreIdentical,
    TextContainsRegex,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 10] = [
        Self::OlderThanDays,
        Self::IsEmpty,
        Self::GreaterThan,
        Self::CreatedAfterSprintStart,
        Self::WordCountGreaterThan,
        Self::WordCountLessThan,
        Self::DaysSinceLastUpdate,
        Self::ContainsText,
        Self::FieldsAreIdentical,
        Self::TextContainsRegex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OlderThanDays => "older_than_days",
            Self::IsEmpty => "is_empty",
            Self::GreaterThan => "greater_than",
            Self::CreatedAfterSprintStart => "created_after_sprint_start",
            Self::WordCountGreaterThan => "word_count_greater_than",
            Self::WordCountLessThan => "word_count_less_than",
            Self::DaysSinceLastUpdate => "days_since_last_update",
            Self::ContainsText => "contains_text",
            Self::FieldsAreIdentical => "fields_are_identical",
            Self::TextContainsRegex => "text_contains_regex",
        }
    }
}

impl FromStr for OperatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "older_than_days" => Ok(Self::OlderThanDays),
            "is_empty" => Ok(Self::IsEmpty),
            "greater_than" => Ok(Self::GreaterThan),
            "created_after_sprint_start" => Ok(Self::CreatedAfterSprintStart),
            "word_count_greater_than" => Ok(Self::WordCountGreaterThan),
            "word_count_less_than" => Ok(Self::WordCountLessThan),
            "days_since_last_update" => Ok(Self::DaysSinceLastUpdate),
            "contains_text" => Ok(Self::ContainsText),
            "fields_are_identical" => Ok(Self::FieldsAreIdentical),
            "text_contains_regex" => Ok(Self::TextContainsRegex),
            _ => Err(format!("Unknown operator: {}", s)),
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for op in OperatorKind::ALL {
            assert_eq!(op.as_str().parse::<OperatorKind>(), Ok(op));
        }
    }

    #[test]
    fn test_unknown_operator_is_an_error() {
        assert!("sentiment_is_negative".parse::<OperatorKind>().is_err());
        // Matching is exact: no case folding on the wire name
        assert!("Is_Empty".parse::<OperatorKind>().is_err());
    }
}
