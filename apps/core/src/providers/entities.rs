//! Capitalisation-based named-entity recognition.
//!
//! Groups adjacent capitalised words into spans and tags them with a small
//! set of rules: corporate suffixes mark organisations, a gazetteer marks
//! places, honorifics and bare multi-word names mark people, and spans
//! carrying a model number mark products. Anything else is tagged `Other`.

use crate::error::AppError;
use crate::providers::traits::{Entity, EntityKind, EntityRecognizer};
use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable on compile-time constant patterns
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}&'-]*").expect("Invalid regex: word pattern")
});

const ORG_SUFFIXES: &[&str] = &[
    "corp", "corporation", "inc", "incorporated", "ltd", "llc", "plc", "gmbh", "co", "company",
    "group", "bank", "university", "institute", "foundation", "labs", "technologies", "systems",
];

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof", "sir"];

const PLACES: &[&str] = &[
    "united states", "united kingdom", "usa", "uk", "canada", "mexico", "france", "germany",
    "spain", "italy", "china", "japan", "india", "brazil", "australia", "russia", "london",
    "paris", "berlin", "tokyo", "new york", "san francisco", "los angeles", "chicago", "beijing",
    "madrid", "rome", "toronto", "sydney", "california", "texas",
];

/// A word with the layout facts needed to group it into spans.
#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    sentence_start: bool,
    joins_previous: bool,
}

impl Word<'_> {
    fn is_capitalized(&self) -> bool {
        self.text.chars().any(char::is_uppercase)
    }

    fn is_numeric(&self) -> bool {
        self.text.chars().all(|c| c.is_ascii_digit())
    }

    fn is_honorific(&self) -> bool {
        HONORIFICS.contains(&self.text.to_lowercase().as_str())
    }
}

/// Rule-based recogniser requiring no model files.
#[derive(Debug, Default, Clone)]
pub struct HeuristicEntityRecognizer;

impl HeuristicEntityRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn words<'a>(&self, text: &'a str) -> Vec<Word<'a>> {
        let mut words: Vec<Word<'a>> = Vec::new();
        let mut prev_end = 0;

        for m in WORD_PATTERN.find_iter(text) {
            let gap = &text[prev_end..m.start()];
            let after_honorific = words.last().is_some_and(|w| w.is_honorific());
            let breaks_sentence = gap.contains(['.', '!', '?', '\n']);

            words.push(Word {
                text: m.as_str(),
                sentence_start: words.is_empty() || (breaks_sentence && !after_honorific),
                joins_previous: gap.trim().is_empty() || (after_honorific && gap.trim() == "."),
            });
            prev_end = m.end();
        }

        words
    }

    fn classify(&self, run: &[&Word<'_>]) -> Option<Entity> {
        let first = run.first()?;

        // Sentence-initial capitals are usually just grammar, unless dropping
        // the word would leave a bare corporate suffix ("Acme Corp needs ...").
        let mut span = run;
        if first.sentence_start
            && !first.is_honorific()
            && !PLACES.contains(&join_words(run).to_lowercase().as_str())
            && !(run.len() == 2 && is_org_suffix(run[1]))
        {
            span = &run[1..];
        }

        let (head, rest) = span.split_first()?;
        if head.is_honorific() {
            return (!rest.is_empty()).then(|| Entity::new(join_words(rest), EntityKind::Person));
        }

        let text = join_words(span);
        let lower = text.to_lowercase();
        let last = lower.rsplit(' ').next().unwrap_or(lower.as_str());

        let kind = if ORG_SUFFIXES.contains(&last) && span.len() > 1 {
            EntityKind::Org
        } else if PLACES.contains(&lower.as_str()) {
            EntityKind::Gpe
        } else if span.iter().any(|w| w.text.chars().any(|c| c.is_ascii_digit())) {
            EntityKind::Product
        } else if span.len() > 1 {
            EntityKind::Person
        } else {
            EntityKind::Other
        };

        Some(Entity::new(text, kind))
    }
}

fn is_org_suffix(word: &Word<'_>) -> bool {
    let lower = word.text.to_lowercase();
    ORG_SUFFIXES.contains(&lower.strip_suffix("'s").unwrap_or(&lower))
}

fn join_words(words: &[&Word<'_>]) -> String {
    let joined = words.iter().map(|w| w.text).collect::<Vec<_>>().join(" ");
    joined
        .strip_suffix("'s")
        .map(str::to_string)
        .unwrap_or(joined)
}

impl EntityRecognizer for HeuristicEntityRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, AppError> {
        let words = self.words(text);
        let mut entities = Vec::new();
        let mut run: Vec<&Word<'_>> = Vec::new();

        for word in &words {
            let continues = !run.is_empty() && word.joins_previous;
            if word.is_capitalized() || (continues && word.is_numeric()) {
                if !continues {
                    entities.extend(self.classify(&run));
                    run.clear();
                }
                run.push(word);
            } else {
                entities.extend(self.classify(&run));
                run.clear();
            }
        }
        entities.extend(self.classify(&run));

        Ok(entities)
    }
}
