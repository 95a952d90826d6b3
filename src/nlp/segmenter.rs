//! Sentence segmentation
//!
//! Splits raw article text into trimmed sentences on terminal punctuation,
//! guarding against abbreviation and initial false positives.

use super::stopwords::StopwordFilter;
use crate::errors::{Result, SummarizerError};
use crate::types::{Sentence, SummarizerConfig};
use rustc_hash::FxHashSet;

/// Rule-based sentence splitter
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Lowercase abbreviations without their trailing period
    abbreviations: FxHashSet<String>,
    /// Whether a line break always ends a sentence
    split_on_newlines: bool,
    /// Whether "X." may continue a name instead of ending the sentence
    guard_initials: bool,
    /// Function words that open a new sentence rather than continue a name
    openers: StopwordFilter,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl SentenceSegmenter {
    /// Create a segmenter with the given abbreviation list
    pub fn new<S: AsRef<str>>(abbreviations: &[S]) -> Self {
        Self {
            abbreviations: abbreviations
                .iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
            split_on_newlines: true,
            guard_initials: true,
            openers: StopwordFilter::new("en"),
        }
    }

    /// Build the segmenter described by a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(&config.abbreviations)
            .with_split_on_newlines(config.split_on_newlines)
            .with_guard_initials(config.guard_initials)
            .with_openers(StopwordFilter::new(&config.language))
    }

    /// Set whether initials may sit before a period mid-sentence
    pub fn with_guard_initials(mut self, guard: bool) -> Self {
        self.guard_initials = guard;
        self
    }

    /// Set the function words that always start a new sentence after an initial
    pub fn with_openers(mut self, openers: StopwordFilter) -> Self {
        self.openers = openers;
        self
    }

    /// Set whether line breaks end sentences
    pub fn with_split_on_newlines(mut self, split: bool) -> Self {
        self.split_on_newlines = split;
        self
    }

    /// Split `text` into sentences
    ///
    /// Fails with [`SummarizerError::EmptyDocument`] when no fragment holds
    /// any alphanumeric content.
    pub fn segment(&self, text: &str) -> Result<Vec<Sentence>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if c == '\n' && self.split_on_newlines {
                push_sentence(text, start, pos, &mut sentences);
                start = pos + c.len_utf8();
                i += 1;
                continue;
            }

            if is_terminal(c) {
                // Absorb "?!", "..." and closing quotes or brackets
                let mut j = i + 1;
                while j < chars.len() && (is_terminal(chars[j].1) || is_closing(chars[j].1)) {
                    j += 1;
                }
                let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
                let at_boundary = chars.get(j).map_or(true, |&(_, next)| next.is_whitespace());
                let guarded = c == '.'
                    && j == i + 1
                    && self.is_guarded_period(&text[start..pos], &text[end..]);

                if at_boundary && !guarded {
                    push_sentence(text, start, end, &mut sentences);
                    start = end;
                }
                i = j;
                continue;
            }

            i += 1;
        }
        push_sentence(text, start, text.len(), &mut sentences);

        if sentences.is_empty() {
            return Err(SummarizerError::EmptyDocument);
        }
        Ok(sentences)
    }

    /// Whether the period after `prefix` belongs to an abbreviation or an
    /// initial rather than ending the sentence
    fn is_guarded_period(&self, prefix: &str, rest: &str) -> bool {
        let word = prefix
            .split_whitespace()
            .last()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return false;
        }

        if self.abbreviations.contains(&word.to_lowercase()) {
            return true;
        }

        self.guard_initials && is_initial(word) && self.continues_name(rest)
    }

    /// Whether the next word is another initial or a capitalized name
    fn continues_name(&self, rest: &str) -> bool {
        let Some(next) = rest.split_whitespace().next() else {
            return false;
        };
        let next = next.trim_start_matches(|c: char| !c.is_alphanumeric());
        let bare = next.trim_end_matches(|c: char| !c.is_alphanumeric());

        if is_initial(bare) && next.len() > bare.len() && next[bare.len()..].starts_with('.') {
            return true;
        }
        bare.chars().next().is_some_and(char::is_uppercase)
            && !self.openers.is_stopword(&bare.to_lowercase())
    }
}

/// A single uppercase letter
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(first), None) if first.is_uppercase())
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '’' | '”' | '»')
}

/// Trim `text[start..end]` and append it if it holds real content
fn push_sentence(text: &str, start: usize, end: usize, sentences: &mut Vec<Sentence>) {
    let span = &text[start..end];
    let trimmed = span.trim();
    if !trimmed.chars().any(char::is_alphanumeric) {
        return;
    }

    let lead = span.len() - span.trim_start().len();
    let begin = start + lead;
    let index = sentences.len();
    sentences.push(Sentence::new(trimmed, begin, begin + trimmed.len(), index));
}
