// Furigana Merger Pattern Builder
// Converts a run list into a regex over the transcription line

use crate::classify::{HIRAGANA, KATAKANA};
use crate::types::{CharClass, Run};

/// Particles whose transcription is normalized to their pronunciation
///
/// は is read わ and を is read お when used as particles, so a literal
/// hiragana run accepts either spelling at those positions.
pub const PARTICLE_SUBSTITUTIONS: &[(char, &str)] = &[('は', "[はわ]"), ('を', "[をお]")];

/// Regex class body for a code-point range, e.g. `\x{3041}-\x{309F}`
fn range_body((lo, hi): (char, char)) -> String {
    format!("\\x{{{:X}}}-\\x{{{:X}}}", lo as u32, hi as u32)
}

/// Character class matching one hiragana character
pub fn hiragana_class() -> String {
    format!("[{}]", range_body(HIRAGANA))
}

/// Character class matching one hiragana or katakana character
pub fn kana_class() -> String {
    format!("[{}{}]", range_body(HIRAGANA), range_body(KATAKANA))
}

/// Build the matching pattern for a run list
///
/// # Conversion Rules
/// - Ideographic: `([hiragana]+)`, the only capturing group
/// - PhoneticPrimary: the literal text, with は/を widened to `[はわ]`/`[をお]`
/// - PhoneticSecondary: `[kana]{0,n}` where n is the run's character count
/// - Other: `.{0,n}` where n is the run's character count
///
/// The result is unanchored; the aligner anchors it at position zero.
///
/// # Examples
/// ```
/// # use furigana_merger::pattern::build_pattern;
/// # use furigana_merger::segment::segment;
/// let pattern = build_pattern(&segment("漢字です。"));
/// assert_eq!(pattern, r"([\x{3041}-\x{309F}]+)です.{0,1}");
/// ```
pub fn build_pattern(runs: &[Run<'_>]) -> String {
    let mut pattern = String::new();

    for run in runs {
        match run.class {
            CharClass::Ideographic => {
                pattern.push('(');
                pattern.push_str(&hiragana_class());
                pattern.push_str("+)");
            }
            CharClass::PhoneticPrimary => push_literal(&mut pattern, run.text),
            CharClass::PhoneticSecondary => {
                pattern.push_str(&kana_class());
                pattern.push_str(&format!("{{0,{}}}", run.char_len()));
            }
            CharClass::Other => {
                pattern.push_str(&format!(".{{0,{}}}", run.char_len()));
            }
        }
    }

    pattern
}

/// Append `text` as a literal, widening particles
fn push_literal(pattern: &mut String, text: &str) {
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        match particle_alternation(ch) {
            Some(alt) => pattern.push_str(alt),
            None => pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }
}

#[inline]
fn particle_alternation(ch: char) -> Option<&'static str> {
    PARTICLE_SUBSTITUTIONS
        .iter()
        .find(|(particle, _)| *particle == ch)
        .map(|(_, alt)| *alt)
}
