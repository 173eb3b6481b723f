//! Test Data Builders
//!
//! Builds extracted claims starting from [`ClaimFixtures::complete`], so
//! tests only spell out the fields they care about.

use core_kernel::FnolField;
use domain_claims::{ContactDetails, ExtractedClaim};

use crate::fixtures::ClaimFixtures;

/// Builder for extracted claims
pub struct ExtractedClaimBuilder {
    claim: ExtractedClaim,
}

impl Default for ExtractedClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractedClaimBuilder {
    /// Starts from a complete, valid claim
    pub fn new() -> Self {
        Self {
            claim: ClaimFixtures::complete(),
        }
    }

    /// Starts from a claim with every field empty
    pub fn empty() -> Self {
        Self {
            claim: ExtractedClaim::empty(),
        }
    }

    /// Sets any text field
    ///
    /// # Panics
    ///
    /// Panics if `field` is `Contact Details`
    pub fn with(mut self, field: FnolField, value: impl Into<String>) -> Self {
        if let Err(e) = self.claim.set_text(field, value) {
            panic!("ExtractedClaimBuilder::with: {}", e);
        }
        self
    }

    /// Clears a text field
    pub fn without(self, field: FnolField) -> Self {
        self.with(field, "")
    }

    pub fn with_policy_number(self, value: impl Into<String>) -> Self {
        self.with(FnolField::PolicyNumber, value)
    }

    pub fn with_policyholder_name(self, value: impl Into<String>) -> Self {
        self.with(FnolField::PolicyholderName, value)
    }

    pub fn with_description(self, value: impl Into<String>) -> Self {
        self.with(FnolField::Description, value)
    }

    pub fn with_estimated_damage(self, value: impl Into<String>) -> Self {
        self.with(FnolField::EstimatedDamage, value)
    }

    pub fn with_claim_type(self, value: impl Into<String>) -> Self {
        self.with(FnolField::ClaimType, value)
    }

    /// Sets the contact details
    pub fn with_contact(mut self, phone: impl Into<String>, email: impl Into<String>) -> Self {
        self.claim.contact_details = ContactDetails {
            phone: phone.into(),
            email: email.into(),
        };
        self
    }

    /// Builds the claim
    pub fn build(self) -> ExtractedClaim {
        self.claim
    }
}
