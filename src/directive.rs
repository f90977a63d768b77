use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::generators;

/// Every generator a directive can select. Synonymous keywords collapse onto
/// one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Number,
    Float,
    Price,
    Paragraph,
    Sentence,
    Uuid,
    Bool,
    Date,
    Word,
}

impl Kind {
    pub const ALL: [Kind; 14] = [
        Kind::Name,
        Kind::FirstName,
        Kind::LastName,
        Kind::Email,
        Kind::Phone,
        Kind::Number,
        Kind::Float,
        Kind::Price,
        Kind::Paragraph,
        Kind::Sentence,
        Kind::Uuid,
        Kind::Bool,
        Kind::Date,
        Kind::Word,
    ];

    /// Exact, case-sensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "name" | "fullname" => Kind::Name,
            "firstname" => Kind::FirstName,
            "lastname" => Kind::LastName,
            "email" => Kind::Email,
            "phone" | "mobile" => Kind::Phone,
            "number" | "int" => Kind::Number,
            "float" | "decimal" => Kind::Float,
            "price" => Kind::Price,
            "text" | "paragraph" => Kind::Paragraph,
            "sentence" => Kind::Sentence,
            "uuid" => Kind::Uuid,
            "bool" | "boolean" => Kind::Bool,
            "date" => Kind::Date,
            "word" => Kind::Word,
            _ => return None,
        };
        Some(kind)
    }

    /// Primary keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Kind::Name => "name",
            Kind::FirstName => "firstname",
            Kind::LastName => "lastname",
            Kind::Email => "email",
            Kind::Phone => "phone",
            Kind::Number => "number",
            Kind::Float => "float",
            Kind::Price => "price",
            Kind::Paragraph => "text",
            Kind::Sentence => "sentence",
            Kind::Uuid => "uuid",
            Kind::Bool => "bool",
            Kind::Date => "date",
            Kind::Word => "word",
        }
    }

    /// How each positional parameter is read, in order. Parameters beyond
    /// this list are ignored.
    pub fn params(self) -> &'static [ParamKind] {
        match self {
            Kind::Number => &[ParamKind::Integer, ParamKind::Integer],
            Kind::Float => &[ParamKind::Real, ParamKind::Real, ParamKind::Count],
            Kind::Price => &[ParamKind::Whole, ParamKind::Whole],
            _ => &[],
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_keyword(s).ok_or_else(|| Error::UnknownKeyword(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Signed 64-bit integer
    Integer,
    /// Finite floating point number
    Real,
    /// Non-negative integer
    Count,
    /// Finite float whose floor fits in an `i64`
    Whole,
}

/// A marker interior split into its kind keyword and raw parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub kind: &'a str,
    pub params: Vec<&'a str>,
}

impl<'a> Directive<'a> {
    /// Trim the interior and split it on `:`. Empty segments are kept.
    pub fn parse(interior: &'a str) -> Self {
        let mut segments = interior.trim().split(':');
        let kind = segments.next().unwrap_or_default();

        Self {
            kind,
            params: segments.collect(),
        }
    }

    pub fn resolve_kind(&self) -> Option<Kind> {
        Kind::from_keyword(self.kind)
    }

    /// Parameter `index` as an integer, `None` when absent, empty or unparsable.
    pub fn int(&self, index: usize) -> Option<i64> {
        self.param(index).and_then(|raw| parse_logged(raw, index, |s| s.parse().ok()))
    }

    /// Parameter `index` as a finite float.
    pub fn real(&self, index: usize) -> Option<f64> {
        self.param(index).and_then(|raw| {
            parse_logged(raw, index, |s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
        })
    }

    /// Parameter `index` as a float usable as a whole-number bound.
    pub fn whole(&self, index: usize) -> Option<f64> {
        self.param(index).and_then(|raw| {
            parse_logged(raw, index, |s| s.parse::<f64>().ok().filter(|v| generators::fits_whole(*v)))
        })
    }

    /// Parameter `index` as a non-negative integer.
    pub fn count(&self, index: usize) -> Option<usize> {
        self.param(index).and_then(|raw| parse_logged(raw, index, |s| s.parse().ok()))
    }

    /// Parameters that are present but would fall back to a default.
    pub fn invalid_params(&self) -> Vec<(usize, &'a str)> {
        let Some(kind) = self.resolve_kind() else {
            return Vec::new();
        };

        kind.params()
            .iter()
            .enumerate()
            .filter_map(|(index, param_kind)| {
                let raw = self.param(index)?;
                let ok = match param_kind {
                    ParamKind::Integer => raw.parse::<i64>().is_ok(),
                    ParamKind::Real => raw.parse::<f64>().is_ok_and(f64::is_finite),
                    ParamKind::Count => raw.parse::<usize>().is_ok(),
                    ParamKind::Whole => raw.parse::<f64>().is_ok_and(generators::fits_whole),
                };
                (!ok).then(|| (index, self.params[index]))
            })
            .collect()
    }

    /// Trimmed parameter, `None` when missing or empty.
    fn param(&self, index: usize) -> Option<&'a str> {
        self.params
            .get(index)
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }
}

fn parse_logged<T>(raw: &str, index: usize, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::debug!(index, value = raw, "unparsable parameter, using default");
    }
    parsed
}
