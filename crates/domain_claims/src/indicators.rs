//! Keyword indicators in claim text
//!
//! Case-insensitive substring checks. The one exception is the
//! emergency-room keyword `"er "`: it must start a word, so "fender bender"
//! and "the other driver left" do not count as medical, while "taken to
//! the ER for..." does. The trailing space stays significant ("ER." does
//! not match).

/// Keywords that flag a claim for fraud investigation
pub const FRAUD_KEYWORDS: &[&str] = &["fraud", "staged", "inconsistent", "suspicious", "fake"];

/// Keywords in the description that indicate injury or medical treatment
pub const INJURY_KEYWORDS: &[&str] = &[
    "injury",
    "medical",
    "hospital",
    "doctor",
    "pain",
    "whiplash",
    "treatment",
    "ambulance",
    EMERGENCY_ROOM,
    "x-ray",
];

/// Keywords in the claim type that indicate injury or medical treatment
pub const INJURY_CLAIM_TYPES: &[&str] = &["injury", "medical"];

// Word-start only. As a bare substring "fender bender, no injuries" would
// match and the minor collision in the Fast-track example would route to
// Specialist Queue.
const EMERGENCY_ROOM: &str = "er ";

/// Returns true if the description mentions a fraud indicator
pub fn has_fraud_indicators(description: &str) -> bool {
    let description = description.to_lowercase();
    FRAUD_KEYWORDS.iter().any(|keyword| description.contains(keyword))
}

/// Returns true if the claim type or description points to an injury
pub fn has_injury_indicators(description: &str, claim_type: &str) -> bool {
    let claim_type = claim_type.to_lowercase();
    if INJURY_CLAIM_TYPES.iter().any(|keyword| claim_type.contains(keyword)) {
        return true;
    }

    let description = description.to_lowercase();
    INJURY_KEYWORDS.iter().any(|keyword| match *keyword {
        EMERGENCY_ROOM => starts_word(&description, keyword),
        _ => description.contains(keyword),
    })
}

/// Returns true if `keyword` occurs at the start of a word in `text`
fn starts_word(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(index, _)| {
        text[..index]
            .chars()
            .next_back()
            .map_or(true, |previous| !previous.is_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraud_keywords() {
        assert!(has_fraud_indicators("Staged collision suspected"));
        assert!(has_fraud_indicators("statements were INCONSISTENT"));
        assert!(has_fraud_indicators("possibly fraudulent"));
        assert!(!has_fraud_indicators("minor fender bender"));
    }

    #[test]
    fn test_injury_from_claim_type() {
        assert!(has_injury_indicators("", "Bodily Injury"));
        assert!(has_injury_indicators("", "medical payments"));
        assert!(!has_injury_indicators("", "Auto Collision"));
    }

    #[test]
    fn test_injury_from_description() {
        assert!(has_injury_indicators("Driver taken to hospital", "Auto Collision"));
        assert!(has_injury_indicators("complained of neck pain", ""));
        assert!(has_injury_indicators("x-ray of left arm", ""));
        assert!(has_injury_indicators("painted fence scratched", ""));
    }

    #[test]
    fn test_emergency_room_keyword() {
        assert!(has_injury_indicators("went to the ER for a checkup", ""));
        assert!(has_injury_indicators("er visit afterwards", ""));
        assert!(!has_injury_indicators("the ER.", ""));
        assert!(!has_injury_indicators("there", ""));
        assert!(!has_injury_indicators("minor fender bender, no injuries", ""));
        assert!(!has_injury_indicators("the other driver left", ""));
    }
}
