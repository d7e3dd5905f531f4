//! Search criteria for the appointment list.
//!
//! A [`Filter`] is mutated one field at a time through [`Filter::set`], which
//! takes the field name and a loosely-typed [`FieldValue`] exactly as a form
//! widget emits them, and rejects values of the wrong kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel `statusId` meaning "no status selected".
///
/// Real status ids are never negative, so this cannot collide with one.
pub const STATUS_UNSET: i64 = -1;

/// User-specified search criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Lower bound on the appointment date, epoch milliseconds.
    pub start_date: Option<i64>,
    /// Upper bound on the appointment date, epoch milliseconds.
    pub end_date: Option<i64>,
    pub client_name: String,
    pub holder_name: String,
    pub compliences: String,
    /// Status id, or [`STATUS_UNSET`].
    pub status_id: i64,
    /// Only appointments held by the current user.
    pub only_me: bool,
}

/// The payload of a load request: a shallow copy of the filter at the time
/// the request was issued.
pub type FilterPayload = Filter;

impl Default for Filter {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            client_name: String::new(),
            holder_name: String::new(),
            compliences: String::new(),
            status_id: STATUS_UNSET,
            only_me: false,
        }
    }
}

/// Name of a single filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    StartDate,
    EndDate,
    ClientName,
    HolderName,
    Compliences,
    StatusId,
    OnlyMe,
}

impl FilterField {
    /// The wire name of the field (`startDate`, `clientName`, ...).
    pub fn name(self) -> &'static str {
        match self {
            FilterField::StartDate => "startDate",
            FilterField::EndDate => "endDate",
            FilterField::ClientName => "clientName",
            FilterField::HolderName => "holderName",
            FilterField::Compliences => "compliences",
            FilterField::StatusId => "statusId",
            FilterField::OnlyMe => "onlyMe",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value emitted by a form widget.
///
/// Serialized externally tagged (`{"key": 3}`); an instant and a key are
/// both bare integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    /// Epoch milliseconds, or cleared.
    Instant(Option<i64>),
    Text(String),
    Key(i64),
    Flag(bool),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Instant(_) => "instant",
            FieldValue::Text(_) => "text",
            FieldValue::Key(_) => "key",
            FieldValue::Flag(_) => "flag",
        }
    }
}

/// A value of the wrong kind was offered for a field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterError {
    pub field: FilterField,
    pub got: &'static str,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter error: field '{}' cannot take a {} value", self.field, self.got)
    }
}

impl std::error::Error for FilterError {}

impl Filter {
    /// Replace a single field. Every other field is left untouched.
    pub fn set(&mut self, field: FilterField, value: FieldValue) -> Result<(), FilterError> {
        match (field, value) {
            (FilterField::StartDate, FieldValue::Instant(v)) => self.start_date = v,
            (FilterField::EndDate, FieldValue::Instant(v)) => self.end_date = v,
            (FilterField::ClientName, FieldValue::Text(v)) => self.client_name = v,
            (FilterField::HolderName, FieldValue::Text(v)) => self.holder_name = v,
            (FilterField::Compliences, FieldValue::Text(v)) => self.compliences = v,
            (FilterField::StatusId, FieldValue::Key(v)) => self.status_id = v,
            (FilterField::OnlyMe, FieldValue::Flag(v)) => self.only_me = v,
            (field, other) => {
                return Err(FilterError {
                    field,
                    got: other.kind(),
                })
            }
        }
        Ok(())
    }

    /// Whether a status is selected.
    pub fn has_status(&self) -> bool {
        self.status_id != STATUS_UNSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_unset() {
        let filter = Filter::default();
        assert_eq!(filter.start_date, None);
        assert_eq!(filter.end_date, None);
        assert!(filter.client_name.is_empty());
        assert_eq!(filter.status_id, STATUS_UNSET);
        assert!(!filter.has_status());
        assert!(!filter.only_me);
    }

    #[test]
    fn set_changes_only_the_named_field() {
        let mut filter = Filter::default();
        filter
            .set(FilterField::ClientName, FieldValue::Text("Ivanov".into()))
            .unwrap();

        let expected = Filter {
            client_name: "Ivanov".into(),
            ..Filter::default()
        };
        assert_eq!(filter, expected);
    }

    #[test]
    fn set_rejects_mismatched_kind() {
        let mut filter = Filter::default();
        let err = filter
            .set(FilterField::OnlyMe, FieldValue::Text("yes".into()))
            .unwrap_err();
        assert_eq!(err.field, FilterField::OnlyMe);
        assert_eq!(err.got, "text");
        assert_eq!(filter, Filter::default(), "Filter must be untouched on error");
    }

    #[test]
    fn instant_fields_accept_clearing() {
        let mut filter = Filter::default();
        filter
            .set(FilterField::StartDate, FieldValue::Instant(Some(1_700_000_000_000)))
            .unwrap();
        assert_eq!(filter.start_date, Some(1_700_000_000_000));
        filter
            .set(FilterField::StartDate, FieldValue::Instant(None))
            .unwrap();
        assert_eq!(filter.start_date, None);
    }

    #[test]
    fn selecting_a_status() {
        let mut filter = Filter::default();
        filter.set(FilterField::StatusId, FieldValue::Key(3)).unwrap();
        assert_eq!(filter.status_id, 3);
        assert!(filter.has_status());
        filter.set(FilterField::StatusId, FieldValue::Key(STATUS_UNSET)).unwrap();
        assert!(!filter.has_status());
    }

    #[test]
    fn field_values_keep_their_kind_through_json() {
        let values = [
            FieldValue::Key(3),
            FieldValue::Instant(Some(3)),
            FieldValue::Instant(None),
            FieldValue::Text("3".into()),
            FieldValue::Flag(true),
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: FieldValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value, "{}", json);
        }
        assert_eq!(serde_json::to_string(&FieldValue::Key(3)).unwrap(), r#"{"key":3}"#);
    }

    #[test]
    fn field_names_match_wire_names() {
        let json = serde_json::to_string(&FilterField::ClientName).unwrap();
        assert_eq!(json, format!("\"{}\"", FilterField::ClientName));
    }

    #[test]
    fn filter_serializes_with_wire_names() {
        let json = serde_json::to_value(Filter::default()).unwrap();
        assert_eq!(json["statusId"], -1);
        assert_eq!(json["onlyMe"], false);
        assert!(json["startDate"].is_null());
        assert_eq!(json["compliences"], "");
    }
}
