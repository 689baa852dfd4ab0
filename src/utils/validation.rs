//! Per-field validation descriptors interpreted at submit time. Each field
//! declares its rules once; `validate` returns the message for the first
//! failing rule per field (required wins over max length).

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug)]
pub struct MaxLength {
    pub limit: usize,
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FieldRules {
    pub required: Option<&'static str>,
    pub max_length: Option<MaxLength>,
}

impl FieldRules {
    pub fn required(message: &'static str) -> Self {
        Self {
            required: Some(message),
            ..Self::default()
        }
    }

    pub fn max_length(mut self, limit: usize, message: &'static str) -> Self {
        self.max_length = Some(MaxLength { limit, message });
        self
    }

    pub fn check(&self, value: &str) -> Option<&'static str> {
        if let Some(message) = self.required {
            if value.is_empty() {
                return Some(message);
            }
        }
        if let Some(rule) = self.max_length {
            if value.chars().count() > rule.limit {
                return Some(rule.message);
            }
        }
        None
    }
}

pub fn validate<'a>(fields: &[(&'a str, &str, FieldRules)]) -> BTreeMap<&'a str, &'static str> {
    fields
        .iter()
        .filter_map(|(name, value, rules)| rules.check(value).map(|message| (*name, message)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: FieldRules =
        FieldRules {
            required: Some("RequesterEmail is required."),
            max_length: Some(MaxLength {
                limit: 50,
                message: "Max length 50 characters",
            }),
        };

    #[test]
    fn empty_required_field_fails_with_its_message() {
        assert_eq!(EMAIL.check(""), Some("RequesterEmail is required."));
    }

    #[test]
    fn value_at_the_limit_passes() {
        let value = "a".repeat(50);
        assert_eq!(EMAIL.check(&value), None);
    }

    #[test]
    fn one_over_the_limit_fails_with_the_length_message() {
        let value = "a".repeat(51);
        assert_eq!(EMAIL.check(&value), Some("Max length 50 characters"));
    }

    #[test]
    fn required_takes_precedence_over_max_length() {
        // empty can never exceed the limit, so only the required path fires
        assert_eq!(EMAIL.check(""), Some("RequesterEmail is required."));
    }

    #[test]
    fn optional_field_accepts_anything() {
        assert_eq!(FieldRules::default().check(""), None);
        assert_eq!(FieldRules::default().check(&"x".repeat(10_000)), None);
    }

    #[test]
    fn validate_collects_one_message_per_failing_field() {
        let required = FieldRules::required("Explanation is required.");
        let errors = validate(&[
            ("requesterEmail", "", EMAIL),
            ("explanation", "fine", required),
            ("professorEmail", "", FieldRules::required("ProfessorEmail is required.")),
        ]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["requesterEmail"], "RequesterEmail is required.");
        assert_eq!(errors["professorEmail"], "ProfessorEmail is required.");
        assert!(!errors.contains_key("explanation"));
    }
}
