//! Per-session form state for the screening page.
//!
//! Flat field-id to scalar storage with explicit clear semantics. The host
//! UI owns rendering and enforces the control-level constraints described by
//! [`form_fields`]; this store only holds current values and converts them
//! into a [`TransactionInput`] on submit.

use crate::error::PipelineError;
use crate::models::loader::ArtifactBundle;
use crate::types::transaction::TransactionInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Day choices offered by the form, Monday first
pub const DAY_CHOICES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month choices offered by the form, January first
pub const MONTH_CHOICES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Year choices offered by the form
pub const YEAR_CHOICES: [i32; 6] = [2020, 2021, 2022, 2023, 2024, 2025];

/// Minimum accepted user age
pub const MIN_AGE: i64 = 18;

/// Stable identifier of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Day,
    Month,
    Year,
    Category,
    UpiId,
    Age,
    Amount,
    State,
    Zip,
}

impl FieldId {
    /// All nine fields in feature order
    pub const ALL: [FieldId; 9] = [
        FieldId::Day,
        FieldId::Month,
        FieldId::Year,
        FieldId::Category,
        FieldId::UpiId,
        FieldId::Age,
        FieldId::Amount,
        FieldId::State,
        FieldId::Zip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Day => "day",
            FieldId::Month => "month",
            FieldId::Year => "year",
            FieldId::Category => "category",
            FieldId::UpiId => "upi_id",
            FieldId::Age => "age",
            FieldId::Amount => "amount",
            FieldId::State => "state",
            FieldId::Zip => "zip",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value held by one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Real(f64),
}

/// Control kind a host UI renders for a field
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Dropdown over a fixed choice set
    Choice(Vec<String>),
    /// Integer input, optionally bounded below
    IntInput { min: Option<i64> },
    /// Real input, optionally bounded below
    RealInput { min: Option<f64> },
}

/// Description of one input control on the screening form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub id: FieldId,
    /// Label shown next to the control
    pub label: &'static str,
    pub kind: ControlKind,
}

/// The nine controls of the screening form, in feature order.
///
/// Merchant category choices come from the trained encoder's class list, so
/// the dropdown can only offer labels the classifier was fitted on. State
/// and ZIP stay unbounded: the model consumes them as opaque numerics.
pub fn form_fields(bundle: &ArtifactBundle) -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            id: FieldId::Day,
            label: "Day",
            kind: ControlKind::Choice(DAY_CHOICES.iter().map(|d| d.to_string()).collect()),
        },
        FieldSpec {
            id: FieldId::Month,
            label: "Month",
            kind: ControlKind::Choice(MONTH_CHOICES.iter().map(|m| m.to_string()).collect()),
        },
        FieldSpec {
            id: FieldId::Year,
            label: "Year",
            kind: ControlKind::Choice(YEAR_CHOICES.iter().map(|y| y.to_string()).collect()),
        },
        FieldSpec {
            id: FieldId::Category,
            label: "Merchant Type",
            kind: ControlKind::Choice(bundle.category_encoder.classes().to_vec()),
        },
        FieldSpec {
            id: FieldId::UpiId,
            label: "UPI ID",
            kind: ControlKind::IntInput { min: Some(0) },
        },
        FieldSpec {
            id: FieldId::Age,
            label: "User Age",
            kind: ControlKind::IntInput { min: Some(MIN_AGE) },
        },
        FieldSpec {
            id: FieldId::Amount,
            label: "Amount (₹)",
            kind: ControlKind::RealInput { min: Some(0.0) },
        },
        FieldSpec {
            id: FieldId::State,
            label: "State Code",
            kind: ControlKind::IntInput { min: None },
        },
        FieldSpec {
            id: FieldId::Zip,
            label: "ZIP Code",
            kind: ControlKind::IntInput { min: None },
        },
    ]
}

/// Mutable form state for one user session.
///
/// Lifecycle: created blank, populated field by field, consumed on submit,
/// emptied on reset. Submit never mutates the stored values, so a failed
/// submission leaves the form populated for correction.
#[derive(Debug, Clone)]
pub struct FormSession {
    session_id: Uuid,
    fields: HashMap<FieldId, FieldValue>,
}

impl FormSession {
    /// Create a blank session
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(session = %session_id, "form session created");
        Self {
            session_id,
            fields: HashMap::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Overwrite the stored value of one field
    pub fn set_field(&mut self, id: FieldId, value: FieldValue) {
        debug!(session = %self.session_id, field = %id, "field updated");
        self.fields.insert(id, value);
    }

    /// Current value of a field, if set
    pub fn field(&self, id: FieldId) -> Option<&FieldValue> {
        self.fields.get(&id)
    }

    /// Whether no field holds a value
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }

    /// Delete all stored fields, returning the form to its pristine state.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.fields.clear();
        debug!(session = %self.session_id, "form reset");
    }

    /// Read all nine fields into a [`TransactionInput`] without mutating them.
    ///
    /// An unset field, or one holding a value the declared type cannot
    /// represent, is reported as [`PipelineError::MissingField`].
    pub fn submit(&self) -> Result<TransactionInput, PipelineError> {
        Ok(TransactionInput {
            day: self.text(FieldId::Day)?,
            month: self.text(FieldId::Month)?,
            year: self.bounded_int(FieldId::Year)?,
            category: self.text(FieldId::Category)?,
            upi_id: self.unsigned(FieldId::UpiId)?,
            age: self.bounded_int(FieldId::Age)?,
            amount: self.real(FieldId::Amount)?,
            state: self.int(FieldId::State)?,
            zip: self.int(FieldId::Zip)?,
        })
    }

    fn text(&self, id: FieldId) -> Result<String, PipelineError> {
        match self.fields.get(&id) {
            Some(FieldValue::Text(s)) => Ok(s.clone()),
            _ => Err(PipelineError::MissingField(id)),
        }
    }

    fn int(&self, id: FieldId) -> Result<i64, PipelineError> {
        match self.fields.get(&id) {
            Some(FieldValue::Int(v)) => Ok(*v),
            _ => Err(PipelineError::MissingField(id)),
        }
    }

    fn unsigned(&self, id: FieldId) -> Result<u64, PipelineError> {
        u64::try_from(self.int(id)?).map_err(|_| PipelineError::MissingField(id))
    }

    fn bounded_int<T: TryFrom<i64>>(&self, id: FieldId) -> Result<T, PipelineError> {
        T::try_from(self.int(id)?).map_err(|_| PipelineError::MissingField(id))
    }

    fn real(&self, id: FieldId) -> Result<f64, PipelineError> {
        match self.fields.get(&id) {
            Some(FieldValue::Real(v)) => Ok(*v),
            Some(FieldValue::Int(v)) => Ok(*v as f64),
            _ => Err(PipelineError::MissingField(id)),
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_session() -> FormSession {
        let mut session = FormSession::new();
        session.set_field(FieldId::Day, FieldValue::Text("Monday".to_string()));
        session.set_field(FieldId::Month, FieldValue::Text("January".to_string()));
        session.set_field(FieldId::Year, FieldValue::Int(2023));
        session.set_field(
            FieldId::Category,
            FieldValue::Text("Entertainment".to_string()),
        );
        session.set_field(FieldId::UpiId, FieldValue::Int(1));
        session.set_field(FieldId::Age, FieldValue::Int(25));
        session.set_field(FieldId::Amount, FieldValue::Real(500.0));
        session.set_field(FieldId::State, FieldValue::Int(10));
        session.set_field(FieldId::Zip, FieldValue::Int(110001));
        session
    }

    #[test]
    fn test_set_field_overwrites() {
        let mut session = FormSession::new();
        session.set_field(FieldId::Age, FieldValue::Int(25));
        session.set_field(FieldId::Age, FieldValue::Int(40));

        assert_eq!(session.field(FieldId::Age), Some(&FieldValue::Int(40)));
    }

    #[test]
    fn test_submit_reads_all_fields() {
        let session = populated_session();
        let input = session.submit().unwrap();

        assert_eq!(input.day, "Monday");
        assert_eq!(input.month, "January");
        assert_eq!(input.year, 2023);
        assert_eq!(input.category, "Entertainment");
        assert_eq!(input.upi_id, 1);
        assert_eq!(input.age, 25);
        assert_eq!(input.amount, 500.0);
        assert_eq!(input.state, 10);
        assert_eq!(input.zip, 110001);

        // Submit does not consume the stored values
        assert!(!session.is_blank());
        assert!(session.submit().is_ok());
    }

    #[test]
    fn test_submit_accepts_integer_amount() {
        let mut session = populated_session();
        session.set_field(FieldId::Amount, FieldValue::Int(500));

        assert_eq!(session.submit().unwrap().amount, 500.0);
    }

    #[test]
    fn test_submit_missing_field() {
        let mut session = populated_session();
        session.set_field(FieldId::Month, FieldValue::Int(1));

        assert_eq!(
            session.submit(),
            Err(PipelineError::MissingField(FieldId::Month))
        );
    }

    #[test]
    fn test_submit_rejects_negative_upi() {
        let mut session = populated_session();
        session.set_field(FieldId::UpiId, FieldValue::Int(-1));

        assert_eq!(
            session.submit(),
            Err(PipelineError::MissingField(FieldId::UpiId))
        );
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut session = populated_session();
        session.reset();

        assert!(session.is_blank());
        for id in FieldId::ALL {
            assert_eq!(session.field(id), None);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = populated_session();
        session.reset();
        session.reset();

        assert!(session.is_blank());
        assert_eq!(
            session.submit(),
            Err(PipelineError::MissingField(FieldId::Day))
        );
    }

    #[test]
    fn test_field_value_untagged_deserialization() {
        let values: HashMap<FieldId, FieldValue> = serde_json::from_str(
            r#"{"day": "Monday", "year": 2023, "amount": 500.5}"#,
        )
        .unwrap();

        assert_eq!(
            values.get(&FieldId::Day),
            Some(&FieldValue::Text("Monday".to_string()))
        );
        assert_eq!(values.get(&FieldId::Year), Some(&FieldValue::Int(2023)));
        assert_eq!(values.get(&FieldId::Amount), Some(&FieldValue::Real(500.5)));
    }
}
