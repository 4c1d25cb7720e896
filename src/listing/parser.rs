use super::types::{ListingField, ListingRecord};
use once_cell::sync::Lazy;
use regex::Regex;

// One pattern per field: a line that starts with the label, optionally behind
// a BOM, a list marker, numbering or a markdown heading, with optional bold
// around the label.
static FIELD_PATTERNS: Lazy<Vec<(ListingField, Regex)>> = Lazy::new(|| {
    ListingField::ALL
        .iter()
        .map(|&field| {
            let pattern = format!(
                r"(?im)^[ \t\x{{FEFF}}]*(?:(?:[-*•]|\d+[.)]|#{{1,6}})[ \t]*)?(?:\*\*)?{}(?:\*\*)?[ \t]*:(?:\*\*)?(.*)$",
                field.label()
            );
            let re = Regex::new(&pattern).expect("listing field pattern is valid");
            (field, re)
        })
        .collect()
});

/// Extracts the five listing fields from the model's free-text reply.
///
/// Each field is located by its label, independent of line position and of
/// the other fields. A field with no matching line is left empty; the first
/// matching line wins.
pub fn parse_listing(text: &str) -> ListingRecord {
    let mut record = ListingRecord::default();

    for (field, re) in FIELD_PATTERNS.iter() {
        if let Some(value) = re.captures(text).and_then(|caps| caps.get(1)) {
            *record.field_mut(*field) = clean_value(value.as_str());
        }
    }

    record
}

fn clean_value(raw: &str) -> String {
    let mut value = raw.trim();
    // Bold value, or the tail of a fully bolded line.
    if let Some(inner) = value.strip_suffix("**") {
        value = inner.strip_prefix("**").unwrap_or(inner).trim();
    }
    value.to_string()
}
