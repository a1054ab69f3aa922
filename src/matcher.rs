// Furigana Merger Aligner
// Matches a built pattern against a transcription line

use crate::types::{AlignError, Alignment, PatternError};
use regex::{Regex, RegexBuilder};
use tracing::trace;

/// Default cap on the compiled size of one line's pattern (10 MiB)
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Anchored matcher for per-line patterns
///
/// The regex engine runs in time linear in the transcription length, so
/// pathological lines cannot hang a merge. Patterns whose compiled form
/// exceeds the size limit are rejected as `PatternError`.
#[derive(Debug, Clone)]
pub struct Aligner {
    size_limit: usize,
}

impl Aligner {
    /// Create an aligner with the default size limit
    pub fn new() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// Set the compiled-pattern size limit in bytes
    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Compile an unanchored pattern body, anchoring it at position zero
    ///
    /// # Example
    /// ```
    /// # use furigana_merger::matcher::Aligner;
    /// let re = Aligner::new().compile("か").unwrap();
    /// assert_eq!(re.as_str(), "^(?:か)");
    /// ```
    pub fn compile(&self, pattern: &str) -> Result<Regex, PatternError> {
        RegexBuilder::new(&format!("^(?:{})", pattern))
            .size_limit(self.size_limit)
            .build()
            .map_err(|e| PatternError::RegexError(e.to_string()))
    }

    /// Match `pattern` at the start of `transcription`
    ///
    /// # Returns
    /// The captured readings in group order, or `AlignError::NoMatch` when no
    /// prefix of the transcription satisfies the pattern.
    ///
    /// # Example
    /// ```
    /// # use furigana_merger::matcher::Aligner;
    /// let aligner = Aligner::new();
    /// let alignment = aligner.align(r"([\x{3041}-\x{309F}]+)です", "かんじです").unwrap();
    /// assert_eq!(alignment.readings, vec!["かんじ"]);
    /// ```
    pub fn align(&self, pattern: &str, transcription: &str) -> Result<Alignment, AlignError> {
        let re = self.compile(pattern)?;
        let no_match = || AlignError::NoMatch {
            pattern: pattern.to_string(),
        };

        let caps = re.captures(transcription).ok_or_else(no_match)?;

        // Every group is a `+` repetition outside any optional construct, so
        // a successful match always sets all of them.
        let readings = caps
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str().to_string()))
            .collect::<Option<Vec<String>>>()
            .ok_or_else(no_match)?;

        trace!(?readings, "aligned");
        Ok(Alignment { readings })
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new()
    }
}
