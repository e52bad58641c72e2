//! Mad-libs template engine.
//!
//! Builds short human-readable strings by substituting random word-bank
//! fragments into one of a fixed set of sentence templates. Generation is a
//! pure function of the injected random source, so a seeded RNG reproduces
//! the same output.

use crate::error::TemplateError;
use rand::Rng;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

pub mod banks;

/// Matches `{{bank}}` and `{{bank.lower}}` placeholder occurrences.
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([a-z_]+(?:\.lower)?)\}\}").unwrap())
}

/// A named, ordered, immutable list of candidate fragments
#[derive(Debug, Clone)]
pub struct WordBank {
    name: String,
    entries: Vec<String>,
}

impl WordBank {
    pub fn new<I, S>(name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Draw one fragment uniformly at random, with replacement.
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-emptiness is validated at Generator construction.
        if self.entries.is_empty() {
            return "";
        }
        let idx = rng.gen_range(0..self.entries.len());
        &self.entries[idx]
    }
}

/// A set of templates plus the word banks their placeholders resolve against
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: Vec<String>,
    banks: HashMap<String, WordBank>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: &str) -> Self {
        self.templates.push(template.to_string());
        self
    }

    pub fn with_templates<'a, I: IntoIterator<Item = &'a str>>(mut self, templates: I) -> Self {
        self.templates
            .extend(templates.into_iter().map(String::from));
        self
    }

    pub fn with_bank(mut self, bank: WordBank) -> Self {
        self.banks.insert(bank.name().to_string(), bank);
        self
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }
}

/// Template-based text generator.
///
/// Construction validates the configuration invariant the scripts left
/// implicit: every placeholder referenced by any template must resolve to a
/// non-empty word bank.
#[derive(Debug, Clone)]
pub struct Generator {
    set: TemplateSet,
}

impl Generator {
    pub fn new(set: TemplateSet) -> Result<Self, TemplateError> {
        if set.templates.is_empty() {
            return Err(TemplateError::NoTemplates);
        }

        for template in &set.templates {
            for caps in placeholder_re().captures_iter(template) {
                let bank_name = bank_name_of(&caps[1]);
                match set.banks.get(bank_name) {
                    None => {
                        return Err(TemplateError::UnknownBank {
                            placeholder: caps[1].to_string(),
                            template: template.clone(),
                        })
                    }
                    Some(bank) if bank.is_empty() => {
                        return Err(TemplateError::EmptyBank(bank_name.to_string()))
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self { set })
    }

    /// Generate one string from a uniformly chosen template.
    ///
    /// Each placeholder occurrence draws independently, so the same
    /// placeholder appearing twice may resolve to two different fragments.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let idx = rng.gen_range(0..self.set.templates.len());
        let template = &self.set.templates[idx];

        let substituted = placeholder_re().replace_all(template, |caps: &Captures| {
            let raw = &caps[1];
            let bank = &self.set.banks[bank_name_of(raw)];
            let fragment = bank.draw(rng);
            if raw.ends_with(".lower") {
                fragment.to_lowercase()
            } else {
                fragment.to_string()
            }
        });

        tidy(&substituted)
    }
}

fn bank_name_of(placeholder: &str) -> &str {
    placeholder.strip_suffix(".lower").unwrap_or(placeholder)
}

/// Normalize spacing and punctuation of substituted text and capitalize the
/// first letter.
fn tidy(text: &str) -> String {
    let mut out = text.split_whitespace().collect::<Vec<_>>().join(" ");
    for (from, to) in [(" ,", ","), (" .", "."), (" !", "!"), (" ?", "?")] {
        out = out.replace(from, to);
    }

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => out,
    }
}
