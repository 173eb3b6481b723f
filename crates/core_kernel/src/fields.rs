//! FNOL field names
//!
//! Every extracted claim carries exactly these sixteen fields, keyed by
//! the labels below. The labels double as the JSON keys exchanged with the
//! extraction model and returned to API clients.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A named field of a First Notice of Loss document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FnolField {
    PolicyNumber,
    PolicyholderName,
    EffectiveDates,
    Date,
    Time,
    Location,
    Description,
    Claimant,
    ThirdParties,
    ContactDetails,
    AssetType,
    AssetId,
    EstimatedDamage,
    ClaimType,
    Attachments,
    InitialEstimate,
}

impl FnolField {
    /// All fields, in declaration order
    pub const ALL: [FnolField; 16] = [
        FnolField::PolicyNumber,
        FnolField::PolicyholderName,
        FnolField::EffectiveDates,
        FnolField::Date,
        FnolField::Time,
        FnolField::Location,
        FnolField::Description,
        FnolField::Claimant,
        FnolField::ThirdParties,
        FnolField::ContactDetails,
        FnolField::AssetType,
        FnolField::AssetId,
        FnolField::EstimatedDamage,
        FnolField::ClaimType,
        FnolField::Attachments,
        FnolField::InitialEstimate,
    ];

    /// Fields that must hold real data before a claim can be auto-routed.
    ///
    /// The order is significant: missing fields are reported in this order.
    pub const ROUTING_REQUIRED: [FnolField; 6] = [
        FnolField::PolicyNumber,
        FnolField::PolicyholderName,
        FnolField::Date,
        FnolField::Description,
        FnolField::EstimatedDamage,
        FnolField::Location,
    ];

    /// Returns the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            FnolField::PolicyNumber => "Policy Number",
            FnolField::PolicyholderName => "Policyholder Name",
            FnolField::EffectiveDates => "Effective Dates",
            FnolField::Date => "Date",
            FnolField::Time => "Time",
            FnolField::Location => "Location",
            FnolField::Description => "Description",
            FnolField::Claimant => "Claimant",
            FnolField::ThirdParties => "Third Parties",
            FnolField::ContactDetails => "Contact Details",
            FnolField::AssetType => "Asset Type",
            FnolField::AssetId => "Asset ID",
            FnolField::EstimatedDamage => "Estimated Damage",
            FnolField::ClaimType => "Claim Type",
            FnolField::Attachments => "Attachments",
            FnolField::InitialEstimate => "Initial Estimate",
        }
    }

    /// Returns true if the field holds a nested mapping rather than text
    pub fn is_structured(&self) -> bool {
        matches!(self, FnolField::ContactDetails)
    }

    /// Returns true if the field takes part in the missing-field check
    pub fn is_routing_required(&self) -> bool {
        Self::ROUTING_REQUIRED.contains(self)
    }
}

impl fmt::Display for FnolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FnolField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::unknown_field(s))
    }
}

impl Serialize for FnolField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FnolField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
