use crate::{IdService, RecordError};

/// Number of leading ID characters shown by [`Record::describe`].
const SHORT_ID_LEN: usize = 8;

/// A named value tagged with a generated ID.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub id: String,
    pub name: String,
    pub value: i64,
}

impl Record {
    /// Creates a record with a freshly generated ID.
    ///
    /// No validation happens here; call [`Record::validate`] before trusting
    /// the contents.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            id: IdService::global().generate().to_string(),
            name: name.into(),
            value,
        }
    }

    /// Returns a one-line summary with a truncated ID, e.g.
    /// `demo (ID: 01K7X2QH...) has value 42`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} (ID: {}...) has value {}",
            self.name,
            short_id(&self.id),
            self.value
        )
    }

    /// Checks the record's fields, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// In order of precedence: [`RecordError::EmptyId`],
    /// [`RecordError::InvalidId`], [`RecordError::EmptyName`],
    /// [`RecordError::NegativeValue`].
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.is_empty() {
            return Err(RecordError::EmptyId);
        }
        if !IdService::global().is_valid(&self.id) {
            return Err(RecordError::InvalidId(self.id.clone()));
        }
        if self.name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if self.value < 0 {
            return Err(RecordError::NegativeValue);
        }
        Ok(())
    }
}

/// The first [`SHORT_ID_LEN`] characters of `id`, or all of it if shorter.
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(end, _)| &id[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_generated_id() {
        let record = Record::new("test", 42);
        assert_eq!(record.name, "test");
        assert_eq!(record.value, 42);
        assert_eq!(record.id.len(), 26);
        assert!(IdService::global().is_valid(&record.id));
    }

    #[test]
    fn describe_truncates_id() {
        let record = Record::new("test", 42);
        let summary = record.describe();
        assert!(summary.starts_with("test (ID: "));
        assert!(summary.contains(&format!("{}...", &record.id[..8])));
        assert!(summary.ends_with("has value 42"));
        assert!(!summary.contains(&record.id));
    }

    #[test]
    fn short_id_handles_short_input() {
        assert_eq!(short_id("01ARZ3NDEKTSV4RRFFQ69G5FAV"), "01ARZ3ND");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        assert_eq!(Record::new("test", 42).validate(), Ok(()));
        assert_eq!(Record::new("zero", 0).validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let err = Record::new("", 42).validate().unwrap_err();
        assert_eq!(err, RecordError::EmptyName);
        assert!(err.to_string().contains("name cannot be empty"));
    }

    #[test]
    fn validate_rejects_negative_value() {
        let err = Record::new("test", -1).validate().unwrap_err();
        assert_eq!(err, RecordError::NegativeValue);
        assert!(err.to_string().contains("value cannot be negative"));
    }

    #[test]
    fn validate_rejects_bad_ids_first() {
        let mut record = Record::new("", -1);

        record.id = String::new();
        assert_eq!(record.validate(), Err(RecordError::EmptyId));
        assert_eq!(
            RecordError::EmptyId.to_string(),
            "ID cannot be empty"
        );

        record.id = "invalid-id".into();
        let err = record.validate().unwrap_err();
        assert_eq!(err, RecordError::InvalidId("invalid-id".into()));
        assert_eq!(err.to_string(), "ID is not a valid ULID: invalid-id");
    }
}
