//! Value generators, one per directive kind.
//!
//! Every generator draws exclusively from the [`RandomSource`] it is handed
//! and always produces a string. Numeric parameters arrive already parsed;
//! `None` means "use the default".

use chrono::{Days, NaiveDate};
use uuid::Builder;

use crate::random::RandomSource;

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "William", "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
    "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
];

pub const DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "example.com",
    "test.com", "demo.com", "mail.com", "email.com", "inbox.com",
];

pub const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
    "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud",
];

pub const SENTENCES: &[&str] = &[
    "This is a test message.",
    "Thank you for your assistance.",
    "Please review the attached document.",
    "Looking forward to your response.",
    "I hope this message finds you well.",
    "Could you please provide more information?",
    "I appreciate your help with this matter.",
    "Let me know if you need anything else.",
];

/// Resolution of the fraction used by [`float`].
const FLOAT_STEPS: u64 = 10_000;

/// Magnitude above which a price bound no longer floors to an `i64`.
const WHOLE_LIMIT: f64 = 9.0e18;

/// Days before today a generated date may fall, today included.
const DATE_WINDOW_DAYS: u64 = 365;

pub fn full_name(rng: &mut dyn RandomSource) -> String {
    let first = rng.pick(FIRST_NAMES);
    let last = rng.pick(LAST_NAMES);
    format!("{first} {last}")
}

pub fn first_name(rng: &mut dyn RandomSource) -> String {
    rng.pick(FIRST_NAMES).to_string()
}

pub fn last_name(rng: &mut dyn RandomSource) -> String {
    rng.pick(LAST_NAMES).to_string()
}

pub fn email(rng: &mut dyn RandomSource) -> String {
    let first = rng.pick(FIRST_NAMES);
    let last = rng.pick(LAST_NAMES);
    let domain = rng.pick(DOMAINS);
    format!("{}{}@{domain}", first.to_lowercase(), last.to_lowercase())
}

/// `+1-AAA-EEE-SSSS`
pub fn phone(rng: &mut dyn RandomSource) -> String {
    let area = rng.below(900) + 100;
    let exchange = rng.below(900) + 100;
    let subscriber = rng.below(9000) + 1000;
    format!("+1-{area:03}-{exchange:03}-{subscriber:04}")
}

/// Integer in `[min, max)`, defaults 1 and 100. When `max <= min` the range
/// collapses to `[min, min + 1)`.
pub fn number(rng: &mut dyn RandomSource, min: Option<i64>, max: Option<i64>) -> String {
    // i128 keeps `min + 1` and `max - min` in range for every i64 input
    let min = i128::from(min.unwrap_or(1));
    let mut max = i128::from(max.unwrap_or(100));
    if max <= min {
        max = min + 1;
    }

    let span = (max - min) as u64;
    (min + i128::from(rng.below(span))).to_string()
}

/// Real in `[min, max)` with `decimals` fixed places, defaults 0, 100 and 2.
pub fn float(
    rng: &mut dyn RandomSource,
    min: Option<f64>,
    max: Option<f64>,
    decimals: Option<usize>,
) -> String {
    let min = min.unwrap_or(0.0);
    let mut max = max.unwrap_or(100.0);
    if max <= min {
        max = min + 1.0;
    }

    let fraction = rng.below(FLOAT_STEPS) as f64 / FLOAT_STEPS as f64;
    // Weighted sum stays finite where `max - min` would overflow
    let value = min * (1.0 - fraction) + max * fraction;
    format!("{:.*}", decimals.unwrap_or(2), value)
}

/// Whole number in `[floor(min), floor(max))` followed by `.99`, defaults 1
/// and 100. Bounds that do not floor to an `i64` count as unspecified.
pub fn price(rng: &mut dyn RandomSource, min: Option<f64>, max: Option<f64>) -> String {
    let min = min.filter(|v| fits_whole(*v)).unwrap_or(1.0);
    let mut max = max.filter(|v| fits_whole(*v)).unwrap_or(100.0);
    if max <= min {
        max = min + 1.0;
    }

    let low = min.floor();
    let span = (max.floor() - low) as u64;
    let whole = low as i128 + i128::from(rng.below(span));
    format!("{whole}.99")
}

/// Finite and small enough that its floor is an exact `i64`.
pub fn fits_whole(value: f64) -> bool {
    value.is_finite() && value.abs() < WHOLE_LIMIT
}

/// 30 to 49 pool words, capitalised and closed with a period.
pub fn paragraph(rng: &mut dyn RandomSource) -> String {
    let count = rng.below(20) + 30;
    let words: Vec<&str> = (0..count).map(|_| rng.pick(WORDS)).collect();
    let text = words.join(" ");

    let mut chars = text.chars();
    let mut out = String::with_capacity(text.len() + 1);
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out.push('.');
    out
}

pub fn sentence(rng: &mut dyn RandomSource) -> String {
    rng.pick(SENTENCES).to_string()
}

/// Version 4 UUID built from bytes drawn through `rng`.
pub fn uuid(rng: &mut dyn RandomSource) -> String {
    let mut bytes = [0u8; 16];
    for byte in &mut bytes {
        *byte = rng.below(256) as u8;
    }
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

pub fn boolean(rng: &mut dyn RandomSource) -> String {
    let value = if rng.below(2) == 0 { "false" } else { "true" };
    value.to_string()
}

/// `today` minus 0 to 364 days, as `YYYY-MM-DD`.
pub fn date(rng: &mut dyn RandomSource, today: NaiveDate) -> String {
    let offset = rng.below(DATE_WINDOW_DAYS);
    today
        .checked_sub_days(Days::new(offset))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

pub fn word(rng: &mut dyn RandomSource) -> String {
    rng.pick(WORDS).to_string()
}
