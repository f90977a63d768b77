#[cfg(feature = "serde")]
use serde::Serialize;

/// Presentation metadata for one supported marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Placeholder {
    pub display_name: &'static str,
    pub description: &'static str,
}

const fn entry(display_name: &'static str, description: &'static str) -> Placeholder {
    Placeholder {
        display_name,
        description,
    }
}

pub(crate) const PLACEHOLDERS: &[Placeholder] = &[
    entry("{{name}}", "Random full name (e.g., John Smith)"),
    entry("{{firstname}}", "Random first name (e.g., John)"),
    entry("{{lastname}}", "Random last name (e.g., Smith)"),
    entry("{{email}}", "Random email address"),
    entry("{{phone}}", "Random phone number"),
    entry("{{number}}", "Random number (1-100)"),
    entry("{{number:1:50}}", "Random number with custom range"),
    entry("{{float}}", "Random float (0-100, 2 decimals)"),
    entry("{{float:1:50:3}}", "Random float with range and decimals"),
    entry("{{price}}", "Random price ending in .99 (1-100)"),
    entry("{{price:5:50}}", "Random price with custom range"),
    entry("{{text}}", "Random paragraph"),
    entry("{{sentence}}", "Random sentence"),
    entry("{{uuid}}", "Random UUID"),
    entry("{{bool}}", "Random boolean (true/false)"),
    entry("{{date}}", "Random date (YYYY-MM-DD)"),
    entry("{{word}}", "Random lorem word"),
];
