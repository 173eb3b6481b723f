//! Extracted claim model
//!
//! The field extractor hands over a JSON object keyed by the FNOL field
//! labels. Its format is trusted but its content is not, so deserialization
//! here is tolerant: absent keys become empty strings, values of the wrong
//! type are kept as [`FieldText::Other`] so the classifiers can reject them,
//! and a malformed `Contact Details` collapses to empty phone and email.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use core_kernel::FnolField;
use crate::error::ClaimError;

/// Contact details nested under the `Contact Details` field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
}

impl ContactDetails {
    /// Builds contact details from an arbitrary JSON value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                phone: map.get("phone").map(value_to_text).unwrap_or_default(),
                email: map.get("email").map(value_to_text).unwrap_or_default(),
            },
            _ => Self::default(),
        }
    }
}

/// Value of a text field as the extractor delivered it
///
/// Serializes back to exactly what came in: a string stays a string, a
/// number stays a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldText {
    Text(String),
    /// Anything that was not a JSON string
    Other(Value),
}

impl FieldText {
    /// Returns the string, or `None` for a non-string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldText::Text(text) => Some(text),
            FieldText::Other(_) => None,
        }
    }
}

impl Default for FieldText {
    fn default() -> Self {
        FieldText::Text(String::new())
    }
}

impl From<String> for FieldText {
    fn from(text: String) -> Self {
        FieldText::Text(text)
    }
}

impl From<&str> for FieldText {
    fn from(text: &str) -> Self {
        FieldText::Text(text.to_string())
    }
}

impl From<Value> for FieldText {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => FieldText::Text(text),
            other => FieldText::Other(other),
        }
    }
}

impl PartialEq<&str> for FieldText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl<'de> Deserialize<'de> for FieldText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FieldText::from)
    }
}

/// Borrowed view of a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// A text field holding a number, boolean, array, object or null
    NonText(&'a Value),
    Contact(&'a ContactDetails),
}

impl<'a> FieldValue<'a> {
    /// Returns the text, if this is a string-valued text field
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => Some(*text),
            FieldValue::NonText(_) | FieldValue::Contact(_) => None,
        }
    }

    /// Returns true for an empty string or a null.
    ///
    /// Contact details always carry both keys and never count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::NonText(value) => value.is_null(),
            FieldValue::Contact(_) => false,
        }
    }
}

/// The sixteen fields extracted from an FNOL document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedClaim {
    #[serde(rename = "Policy Number", default)]
    pub policy_number: FieldText,
    #[serde(rename = "Policyholder Name", default)]
    pub policyholder_name: FieldText,
    #[serde(rename = "Effective Dates", default)]
    pub effective_dates: FieldText,
    #[serde(rename = "Date", default)]
    pub date: FieldText,
    #[serde(rename = "Time", default)]
    pub time: FieldText,
    #[serde(rename = "Location", default)]
    pub location: FieldText,
    #[serde(rename = "Description", default)]
    pub description: FieldText,
    #[serde(rename = "Claimant", default)]
    pub claimant: FieldText,
    #[serde(rename = "Third Parties", default)]
    pub third_parties: FieldText,
    #[serde(rename = "Contact Details", default, deserialize_with = "lenient_contact")]
    pub contact_details: ContactDetails,
    #[serde(rename = "Asset Type", default)]
    pub asset_type: FieldText,
    #[serde(rename = "Asset ID", default)]
    pub asset_id: FieldText,
    #[serde(rename = "Estimated Damage", default)]
    pub estimated_damage: FieldText,
    #[serde(rename = "Claim Type", default)]
    pub claim_type: FieldText,
    #[serde(rename = "Attachments", default)]
    pub attachments: FieldText,
    #[serde(rename = "Initial Estimate", default)]
    pub initial_estimate: FieldText,
}

impl ExtractedClaim {
    /// Creates a claim with every field empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a claim from any JSON value.
    ///
    /// Anything other than an object yields an empty claim.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Returns the value of a field
    pub fn get(&self, field: FnolField) -> FieldValue<'_> {
        match field {
            FnolField::ContactDetails => FieldValue::Contact(&self.contact_details),
            _ => match self.text_slot(field) {
                Some(FieldText::Text(text)) => FieldValue::Text(text),
                Some(FieldText::Other(value)) => FieldValue::NonText(value),
                None => FieldValue::Text(""),
            },
        }
    }

    /// Returns the text of a field.
    ///
    /// `None` for `Contact Details` and for fields that hold a non-string value.
    pub fn text(&self, field: FnolField) -> Option<&str> {
        self.get(field).as_text()
    }

    /// Overwrites a text field
    pub fn set_text(&mut self, field: FnolField, value: impl Into<String>) -> Result<(), ClaimError> {
        match self.text_slot_mut(field) {
            Some(slot) => {
                *slot = FieldText::Text(value.into());
                Ok(())
            }
            None => Err(ClaimError::NotATextField(field.to_string())),
        }
    }

    /// Iterates over all sixteen fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (FnolField, FieldValue<'_>)> + '_ {
        FnolField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    fn text_slot(&self, field: FnolField) -> Option<&FieldText> {
        let slot = match field {
            FnolField::PolicyNumber => &self.policy_number,
            FnolField::PolicyholderName => &self.policyholder_name,
            FnolField::EffectiveDates => &self.effective_dates,
            FnolField::Date => &self.date,
            FnolField::Time => &self.time,
            FnolField::Location => &self.location,
            FnolField::Description => &self.description,
            FnolField::Claimant => &self.claimant,
            FnolField::ThirdParties => &self.third_parties,
            FnolField::ContactDetails => return None,
            FnolField::AssetType => &self.asset_type,
            FnolField::AssetId => &self.asset_id,
            FnolField::EstimatedDamage => &self.estimated_damage,
            FnolField::ClaimType => &self.claim_type,
            FnolField::Attachments => &self.attachments,
            FnolField::InitialEstimate => &self.initial_estimate,
        };
        Some(slot)
    }

    fn text_slot_mut(&mut self, field: FnolField) -> Option<&mut FieldText> {
        let slot = match field {
            FnolField::PolicyNumber => &mut self.policy_number,
            FnolField::PolicyholderName => &mut self.policyholder_name,
            FnolField::EffectiveDates => &mut self.effective_dates,
            FnolField::Date => &mut self.date,
            FnolField::Time => &mut self.time,
            FnolField::Location => &mut self.location,
            FnolField::Description => &mut self.description,
            FnolField::Claimant => &mut self.claimant,
            FnolField::ThirdParties => &mut self.third_parties,
            FnolField::ContactDetails => return None,
            FnolField::AssetType => &mut self.asset_type,
            FnolField::AssetId => &mut self.asset_id,
            FnolField::EstimatedDamage => &mut self.estimated_damage,
            FnolField::ClaimType => &mut self.claim_type,
            FnolField::Attachments => &mut self.attachments,
            FnolField::InitialEstimate => &mut self.initial_estimate,
        };
        Some(slot)
    }
}

/// Renders a JSON value as contact text.
///
/// Numbers keep their plain decimal form (`5550100`); arrays of scalars
/// are joined with `", "`; objects carry no usable text.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_to_text(number),
        Value::Array(items) => items
            .iter()
            .filter(|item| !matches!(item, Value::Null | Value::Array(_) | Value::Object(_)))
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => String::new(),
    }
}

fn number_to_text(number: &serde_json::Number) -> String {
    if let Some(integer) = number.as_i64() {
        integer.to_string()
    } else if let Some(integer) = number.as_u64() {
        integer.to_string()
    } else {
        number.as_f64().map(|float| float.to_string()).unwrap_or_default()
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

fn lenient_contact<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ContactDetails, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(ContactDetails::from_value(&value))
}
