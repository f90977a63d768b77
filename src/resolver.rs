use std::borrow::Cow;

use chrono::Local;

use crate::config::{Config, UnknownDirective};
use crate::directive::{Directive, Kind};
use crate::error::Error;
use crate::generators;
use crate::random::RandomSource;
use crate::scanner::{Scanner, Token};

pub struct Resolver<'a> {
    config: &'a Config,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Replace every marker in `input` in a single left-to-right pass.
    ///
    /// Returns `Cow::Borrowed` if no marker changed, or `Cow::Owned` otherwise.
    pub fn substitute<'b>(&self, input: &'b str, rng: &mut dyn RandomSource) -> Cow<'b, str> {
        let mut scanner = Scanner::new(input);
        let mut result: Option<String> = None;

        while let Some((token, range)) = scanner.scan_next() {
            match token {
                Token::Literal(text) => {
                    if let Some(res) = &mut result {
                        res.push_str(text);
                    }
                }
                Token::Marker { raw, directive } => {
                    let value = self.resolve(raw, directive, rng);

                    // First marker that changes anything switches to owned
                    if result.is_none() && value != raw {
                        let mut res = String::with_capacity(input.len() + 32);
                        res.push_str(&input[..range.start]);
                        result = Some(res);
                    }

                    if let Some(res) = &mut result {
                        res.push_str(&value);
                    }
                }
            }
        }

        match result {
            Some(res) => Cow::Owned(res),
            None => Cow::Borrowed(input),
        }
    }

    /// Report unknown kinds, parameters that will be defaulted and openers
    /// that never became markers, in source order. Draws no random values.
    pub fn diagnose(&self, input: &str) -> Vec<Error> {
        let mut errors = Vec::new();
        let mut openers = Scanner::skipped_openers(input).into_iter().peekable();

        for (token, range) in Scanner::new(input) {
            while let Some((pos, closed)) = openers.next_if(|(pos, _)| *pos < range.end) {
                errors.push(if closed {
                    Error::MalformedMarker(pos)
                } else {
                    Error::UnclosedMarker(pos)
                });
            }

            let Token::Marker { directive, .. } = token else {
                continue;
            };

            let directive = Directive::parse(directive);
            if directive.resolve_kind().is_none() {
                errors.push(Error::UnknownKind {
                    kind: directive.kind.to_string(),
                    position: range.start,
                });
                continue;
            }

            for (index, value) in directive.invalid_params() {
                errors.push(Error::InvalidParameter {
                    kind: directive.kind.to_string(),
                    index,
                    value: value.to_string(),
                    position: range.start,
                });
            }
        }

        errors
    }

    fn resolve<'b>(&self, raw: &'b str, interior: &'b str, rng: &mut dyn RandomSource) -> Cow<'b, str> {
        let directive = Directive::parse(interior);

        let Some(kind) = directive.resolve_kind() else {
            tracing::debug!(kind = directive.kind, "unknown placeholder type, passing through");
            return match self.config.unknown {
                UnknownDirective::Kind => Cow::Owned(format!("{{{{{}}}}}", directive.kind)),
                UnknownDirective::Verbatim => Cow::Borrowed(raw),
            };
        };

        let value = self.generate(kind, &directive, rng);
        tracing::trace!(%kind, %value, "resolved placeholder");
        Cow::Owned(value)
    }

    fn generate(&self, kind: Kind, directive: &Directive<'_>, rng: &mut dyn RandomSource) -> String {
        match kind {
            Kind::Name => generators::full_name(rng),
            Kind::FirstName => generators::first_name(rng),
            Kind::LastName => generators::last_name(rng),
            Kind::Email => generators::email(rng),
            Kind::Phone => generators::phone(rng),
            Kind::Number => generators::number(rng, directive.int(0), directive.int(1)),
            Kind::Float => {
                let decimals = directive.count(2).map(|d| d.min(self.config.max_decimals));
                generators::float(rng, directive.real(0), directive.real(1), decimals)
            }
            Kind::Price => generators::price(rng, directive.whole(0), directive.whole(1)),
            Kind::Paragraph => generators::paragraph(rng),
            Kind::Sentence => generators::sentence(rng),
            Kind::Uuid => generators::uuid(rng),
            Kind::Bool => generators::boolean(rng),
            Kind::Date => generators::date(rng, Local::now().date_naive()),
            Kind::Word => generators::word(rng),
        }
    }
}
