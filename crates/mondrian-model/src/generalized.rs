use std::fmt;

use serde::{Deserialize, Serialize};

/// A generalized field value: the original scalar when the group is uniform
/// on the attribute, otherwise the sorted set of distinct values observed
/// within the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum GeneralizedValue {
    Scalar(String),
    Set(Vec<String>),
}

impl GeneralizedValue {
    /// True when the value still identifies a single original value.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

impl fmt::Display for GeneralizedValue {
    /// Renders a multi-value field as a bracketed list, a scalar as itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => f.write_str(value),
            Self::Set(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(value)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// One output row: the original record with each quasi-identifier field
/// replaced by its group's generalized value. Non-QID fields stay scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralizedRecord {
    fields: Vec<GeneralizedValue>,
}

impl GeneralizedRecord {
    pub fn new(fields: Vec<GeneralizedValue>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[GeneralizedValue] {
        &self.fields
    }

    /// Render every field to its textual serialization form.
    pub fn to_output_row(&self) -> Vec<String> {
        self.fields.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_renders_verbatim() {
        let value = GeneralizedValue::Scalar("30".to_string());
        assert_eq!(value.to_string(), "30");
        assert!(value.is_scalar());
    }

    #[test]
    fn set_renders_as_bracketed_list() {
        let value = GeneralizedValue::Set(vec!["30".to_string(), "40".to_string()]);
        assert_eq!(value.to_string(), "[30, 40]");
        assert!(!value.is_scalar());
    }

    #[test]
    fn record_renders_all_fields() {
        let record = GeneralizedRecord::new(vec![
            GeneralizedValue::Scalar("alice".to_string()),
            GeneralizedValue::Set(vec!["20".to_string(), "25".to_string()]),
        ]);
        assert_eq!(
            record.to_output_row(),
            vec!["alice".to_string(), "[20, 25]".to_string()]
        );
    }
}
