//! Extraction prompt
//!
//! The prompt lists every FNOL field with a short hint, embeds the document
//! text, and ends with the exact JSON template the model must fill in.

use core_kernel::FnolField;

/// Documents are cut to this many characters before prompting
pub const MAX_DOCUMENT_CHARS: usize = 10_000;

const INSTRUCTIONS: &str = "\
You are an insurance claims processor extracting structured data from a First Notice of Loss (FNOL) document.

RULES:
1. Extract only values actually filled in on the document, never field labels or template text.
2. Use an empty string \"\" for any field that is missing or unclear (not null, not \"N/A\").
3. Normalize values:
   - Dates as YYYY-MM-DD where possible
   - Amounts as digits only, e.g. \"8500\" rather than \"$8,500\"
   - Names in proper case, e.g. \"John Smith\"
   - Phone numbers like \"+1-555-123-4567\"
4. Answer with valid JSON only, without any other text.
5. If a field only holds placeholder text such as \"ENTER NAME HERE\" or a form label such as \"POLICY NUMBER\", return \"\".";

/// Returns the extraction hint for a field
fn field_hint(field: FnolField) -> &'static str {
    match field {
        FnolField::PolicyNumber => "alphanumeric policy identifier, e.g. \"AUTO-PL-45879231\"",
        FnolField::PolicyholderName => "full legal name of the insured person or business",
        FnolField::EffectiveDates => "policy period as \"YYYY-MM-DD to YYYY-MM-DD\"",
        FnolField::Date => "date of the incident as YYYY-MM-DD",
        FnolField::Time => "time of the incident, 24-hour or AM/PM",
        FnolField::Location => "full address of the loss including city, state and zip",
        FnolField::Description => "detailed description of what happened",
        FnolField::Claimant => "name of the claimant if different from the policyholder",
        FnolField::ThirdParties => "names and details of other parties involved",
        FnolField::ContactDetails => "object with \"phone\" and \"email\" keys",
        FnolField::AssetType => "kind of asset, e.g. \"Vehicle\", \"Property\", \"Home\"",
        FnolField::AssetId => "VIN, license plate or property identifier",
        FnolField::EstimatedDamage => "estimated damage as a number, e.g. 18500",
        FnolField::ClaimType => "e.g. \"Auto Collision\", \"Property Damage\", \"Injury\", \"Theft\"",
        FnolField::Attachments => "documents or photos mentioned",
        FnolField::InitialEstimate => "initial assessment amount as a number",
    }
}

/// Builds the prompt for one document
pub fn build_extraction_prompt(document: &str) -> String {
    let document = truncate_chars(document.trim(), MAX_DOCUMENT_CHARS);

    let fields: String = FnolField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{}. {}: {}\n", i + 1, field, field_hint(*field)))
        .collect();

    format!(
        "{INSTRUCTIONS}\n\nFIELDS TO EXTRACT:\n{fields}\nDOCUMENT TEXT:\n{document}\n\n\
         Return exactly this JSON structure and nothing else:\n{}",
        response_template()
    )
}

/// The JSON object the model is asked to return
pub fn response_template() -> String {
    let lines: Vec<String> = FnolField::ALL
        .iter()
        .map(|field| match field {
            FnolField::ContactDetails => format!(
                "  \"{}\": {{\"phone\": \"value or empty string\", \"email\": \"value or empty string\"}}",
                field
            ),
            _ => format!("  \"{}\": \"value or empty string\"", field),
        })
        .collect();

    format!("{{\n{}\n}}", lines.join(",\n"))
}

/// Returns at most `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
