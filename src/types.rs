// Furigana Merger Type Definitions
// Core types for segmentation, alignment and error reporting

use std::path::PathBuf;
use thiserror::Error;

/// Character classes used to segment a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Kanji plus the iteration mark 々
    Ideographic,
    /// Hiragana: native readings and grammatical particles
    PhoneticPrimary,
    /// Katakana: loanwords and emphasis
    PhoneticSecondary,
    /// Punctuation, digits, Latin text and anything else
    Other,
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharClass::Ideographic => write!(f, "Ideographic"),
            CharClass::PhoneticPrimary => write!(f, "PhoneticPrimary"),
            CharClass::PhoneticSecondary => write!(f, "PhoneticSecondary"),
            CharClass::Other => write!(f, "Other"),
        }
    }
}

/// A maximal run of same-class characters borrowed from a cleaned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    /// The run's text
    pub text: &'a str,

    /// Class shared by every character of `text`
    pub class: CharClass,
}

impl<'a> Run<'a> {
    /// Create a new run
    pub fn new(text: &'a str, class: CharClass) -> Self {
        Self { text, class }
    }

    /// Length of the run in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Successful alignment: one reading per ideographic run, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Captured readings taken from the transcription line
    pub readings: Vec<String>,
}

impl Alignment {
    /// Number of captured readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when the line had no ideographic runs
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// What to do when a line cannot be aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Write the cleaned source line behind `FAILURE_MARKER` and continue
    #[default]
    Mark,
    /// Stop the merge with a line-numbered error
    Abort,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Mark => write!(f, "mark"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

/// Pattern compilation errors
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("Regex compilation failed: {0}")]
    RegexError(String),
}

/// Alignment errors reported by the aligner
#[derive(Debug, Clone, Error)]
pub enum AlignError {
    #[error("transcription does not match pattern '{pattern}'")]
    NoMatch { pattern: String },

    #[error("alignment has {actual} readings for {expected} kanji runs")]
    ReadingCount { expected: usize, actual: usize },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Template parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unterminated placeholder starting at byte {offset} in template '{template}'")]
    Unterminated { template: String, offset: usize },
}

/// Errors surfaced by a merge
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Line count mismatch: source has {source_lines} lines, transcription has {transcription_lines}"
    )]
    LineCountMismatch {
        source_lines: usize,
        transcription_lines: usize,
    },

    #[error("Line {line}: {reason}\n  source:        {source_line}\n  transcription: {transcription_line}")]
    Alignment {
        line: usize,
        source_line: String,
        transcription_line: String,
        reason: AlignError,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// A line that could not be aligned under `FailurePolicy::Mark`
#[derive(Debug, Clone)]
pub struct LineFailure {
    /// 1-based line number
    pub line: usize,

    /// Raw source line
    pub source_line: String,

    /// Raw transcription line
    pub transcription_line: String,

    /// Why alignment failed
    pub reason: AlignError,
}

/// Summary of a merge
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// Lines read from each input
    pub total_lines: usize,

    /// Blank source lines passed through without alignment
    pub blank_lines: usize,

    /// Lines aligned successfully
    pub aligned_lines: usize,

    /// Lines that failed to align
    pub failures: Vec<LineFailure>,
}

impl MergeReport {
    /// True when every non-blank line aligned
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
