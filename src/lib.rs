//! # Furigana Merger: Kanji/Kana Line Aligner
//!
//! Aligns a line of mixed-script Japanese with its full hiragana
//! transcription and produces two renditions of it: the source annotated
//! with the reading of every kanji run, and a reading-only line with the
//! kanji-derived portions marked.
//!
//! ## Pipeline
//!
//! 1. **Clean** - strip all whitespace from both lines
//! 2. **Segment** - split the source into maximal runs of one character class
//! 3. **Build pattern** - turn the runs into a regex with one capture per kanji run
//! 4. **Align** - match the pattern at the start of the transcription
//! 5. **Render** - substitute each kanji run and its reading into the templates
//!
//! ## Pattern Rules
//!
//! - Kanji run: `([hiragana]+)` (captured)
//! - Hiragana run: literal, with は → `[はわ]` and を → `[をお]`
//! - Katakana run: `[kana]{0,n}`
//! - Anything else: `.{0,n}`
//!
//! where `n` is the run's length in characters.
//!
//! ## Example Usage
//!
//! ```
//! use furigana_merger::FuriganaMerger;
//!
//! let merger = FuriganaMerger::new()?;
//! let out = merger.merge_line("漢字です。カタカナ", "かんじです。カタカナ")?;
//!
//! assert_eq!(out.annotated, "{かんじ|漢字}です。カタカナ");
//! assert_eq!(out.reading, "**かんじ**です。カタカナ");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Classifier** - maps each character to a `CharClass` by code-point range
//! - **Segmenter** - partitions a cleaned line into `Run`s
//! - **Pattern Builder** - converts runs to a regex string
//! - **Aligner** - anchored, linear-time match exposing captures as an `Alignment`
//! - **Renderer** - walks runs and alignment through the output templates
//! - **FuriganaMerger** - main entry point, per line and over whole files

pub mod classify;
pub mod matcher;
pub mod merge;
pub mod pattern;
pub mod render;
pub mod segment;
pub mod types;

// Re-export main types and functions for convenience
pub use classify::{classify, clean_string};
pub use matcher::Aligner;
pub use merge::{clean_file, FuriganaMerger, MergeOutput, FAILURE_MARKER};
pub use pattern::build_pattern;
pub use render::{
    render, Rendered, Template, DEFAULT_FURIGANA_TEMPLATE, DEFAULT_READING_TEMPLATE,
};
pub use segment::segment;
pub use types::{
    AlignError, Alignment, CharClass, FailurePolicy, LineFailure, MergeError, MergeReport,
    PatternError, Run, TemplateError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
