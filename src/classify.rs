// Furigana Merger Character Classifier
// Maps single characters to classes and cleans lines before segmentation

use crate::types::CharClass;

/// The iteration mark standing in for a repeated kanji
pub const ITERATION_MARK: char = '々';

/// CJK Unified Ideographs Extension A
pub const CJK_EXT_A: (char, char) = ('\u{3400}', '\u{4DBF}');

/// CJK Unified Ideographs
pub const CJK_UNIFIED: (char, char) = ('\u{4E00}', '\u{9FFF}');

/// CJK Compatibility Ideographs
pub const CJK_COMPAT: (char, char) = ('\u{F900}', '\u{FAFF}');

/// CJK Unified Ideographs Extension B
pub const CJK_EXT_B: (char, char) = ('\u{20000}', '\u{2A6DF}');

/// Hiragana block minus the unassigned U+3040
pub const HIRAGANA: (char, char) = ('\u{3041}', '\u{309F}');

/// Katakana block, including the prolonged sound mark ー
pub const KATAKANA: (char, char) = ('\u{30A0}', '\u{30FF}');

#[inline]
fn in_range(ch: char, (lo, hi): (char, char)) -> bool {
    lo <= ch && ch <= hi
}

/// Check if a character is a kanji or the iteration mark
#[inline]
pub fn is_kanji(ch: char) -> bool {
    ch == ITERATION_MARK
        || in_range(ch, CJK_UNIFIED)
        || in_range(ch, CJK_EXT_A)
        || in_range(ch, CJK_COMPAT)
        || in_range(ch, CJK_EXT_B)
}

/// Check if a character is hiragana
#[inline]
pub fn is_hiragana(ch: char) -> bool {
    in_range(ch, HIRAGANA)
}

/// Check if a character is katakana
#[inline]
pub fn is_katakana(ch: char) -> bool {
    in_range(ch, KATAKANA)
}

/// Classify a single character
///
/// Rules are tested in priority order: kanji, hiragana, katakana, other.
/// The ranges are disjoint, so the order only matters for readability.
///
/// # Examples
/// ```
/// # use furigana_merger::classify::classify;
/// # use furigana_merger::types::CharClass;
/// assert_eq!(classify('漢'), CharClass::Ideographic);
/// assert_eq!(classify('々'), CharClass::Ideographic);
/// assert_eq!(classify('あ'), CharClass::PhoneticPrimary);
/// assert_eq!(classify('ア'), CharClass::PhoneticSecondary);
/// assert_eq!(classify('a'), CharClass::Other);
/// ```
pub fn classify(ch: char) -> CharClass {
    if is_kanji(ch) {
        CharClass::Ideographic
    } else if is_hiragana(ch) {
        CharClass::PhoneticPrimary
    } else if is_katakana(ch) {
        CharClass::PhoneticSecondary
    } else {
        CharClass::Other
    }
}

/// Remove every whitespace character, ASCII and ideographic space alike
///
/// Applied identically to source and transcription lines before any
/// comparison. Whitespace is the Unicode White_Space property, so NEL,
/// line/paragraph separators and the thin spaces are removed too.
///
/// # Examples
/// ```
/// # use furigana_merger::classify::clean_string;
/// assert_eq!(clean_string(" こんにちは\u{3000}"), "こんにちは");
/// ```
pub fn clean_string(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}
