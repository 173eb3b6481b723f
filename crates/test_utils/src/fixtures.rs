//! Pre-built Test Fixtures
//!
//! Ready-to-use claims and raw extraction payloads. Values are taken from
//! realistic FNOL documents so that they pass the placeholder checks.

use domain_claims::{ContactDetails, ExtractedClaim};
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

/// Fixture for extracted claims
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A claim with every field filled and a low damage estimate
    pub fn complete() -> ExtractedClaim {
        ExtractedClaim {
            policy_number: StringFixtures::policy_number().into(),
            policyholder_name: "John Michael Smith".into(),
            effective_dates: "2024-01-01 to 2024-12-31".into(),
            date: "2024-03-15".into(),
            time: "14:30".into(),
            location: StringFixtures::location().into(),
            description: "Vehicle was rear-ended while stopped at a traffic light".into(),
            claimant: "John Michael Smith".into(),
            third_parties: "Sarah Connor, driver of the other vehicle".into(),
            contact_details: ContactDetails {
                phone: "+1-555-123-4567".into(),
                email: "john.smith@example.com".into(),
            },
            asset_type: "Vehicle".into(),
            asset_id: "1HGCM82633A004352".into(),
            estimated_damage: "3200".into(),
            claim_type: "Auto Collision".into(),
            attachments: "Photos of rear bumper, police report".into(),
            initial_estimate: "3000".into(),
        }
    }

    /// A commercial auto claim filed by a business
    pub fn business_policyholder() -> ExtractedClaim {
        ExtractedClaim {
            policyholder_name: "QUICK DELIVERY SERVICES LLC".into(),
            asset_type: "Commercial Van".into(),
            estimated_damage: "$18,500".into(),
            ..Self::complete()
        }
    }

    /// A claim whose required fields echo the labels of a blank form
    pub fn blank_form() -> ExtractedClaim {
        ExtractedClaim {
            policy_number: "POLICY NUMBER".into(),
            policyholder_name: "NAME OF INSURED (FIRST, MIDDLE, LAST)".into(),
            date: "DATE OF LOSS".into(),
            description: "DESCRIPTION OF ACCIDENT".into(),
            estimated_damage: "ESTIMATE AMOUNT".into(),
            location: "LOCATION OF LOSS".into(),
            ..ExtractedClaim::empty()
        }
    }

    /// A complete claim with a randomly generated policyholder name
    pub fn with_random_policyholder() -> ExtractedClaim {
        ExtractedClaim {
            policyholder_name: Name().fake::<String>().into(),
            ..Self::complete()
        }
    }
}

/// Fixture for raw extraction model output
pub struct ExtractionFixtures;

impl ExtractionFixtures {
    /// The JSON object an extraction model returns for [`ClaimFixtures::complete`]
    pub fn complete_json() -> Value {
        json!({
            "Policy Number": "AUTO-PL-45879231",
            "Policyholder Name": "John Michael Smith",
            "Effective Dates": "2024-01-01 to 2024-12-31",
            "Date": "2024-03-15",
            "Time": "14:30",
            "Location": "123 Main Street, Springfield, IL 62701",
            "Description": "Vehicle was rear-ended while stopped at a traffic light",
            "Claimant": "John Michael Smith",
            "Third Parties": "Sarah Connor, driver of the other vehicle",
            "Contact Details": { "phone": "+1-555-123-4567", "email": "john.smith@example.com" },
            "Asset Type": "Vehicle",
            "Asset ID": "1HGCM82633A004352",
            "Estimated Damage": "3200",
            "Claim Type": "Auto Collision",
            "Attachments": "Photos of rear bumper, police report",
            "Initial Estimate": "3000"
        })
    }

    /// A chatty model response wrapping the JSON in a fenced block
    pub fn fenced_response() -> String {
        format!(
            "Here is the extracted data:\n\n```json\n{}\n```\n\nLet me know if you need anything else.",
            serde_json::to_string_pretty(&Self::complete_json()).unwrap_or_default()
        )
    }

    /// A plain-text FNOL document
    pub fn fnol_text() -> &'static str {
        "FIRST NOTICE OF LOSS\n\
         Policy Number: AUTO-PL-45879231\n\
         Name of Insured: John Michael Smith\n\
         Date of Loss: 03/15/2024  Time: 2:30 PM\n\
         Location of Loss: 123 Main Street, Springfield, IL 62701\n\
         Description of Accident: Vehicle was rear-ended while stopped at a traffic light.\n\
         Estimate Amount: $3,200\n"
    }
}

/// Fixture for individual string values
pub struct StringFixtures;

impl StringFixtures {
    pub fn policy_number() -> &'static str {
        "AUTO-PL-45879231"
    }

    pub fn location() -> &'static str {
        "123 Main Street, Springfield, IL 62701"
    }
}
