// Furigana Merger Run Segmenter
// Partitions a cleaned line into maximal same-class runs

use crate::classify::classify;
use crate::types::{CharClass, Run};

/// Split a line into maximal runs of same-class characters
///
/// Runs borrow from `line`; concatenating their texts reproduces it exactly
/// and no two adjacent runs share a class. An empty line yields no runs.
///
/// # Examples
/// ```
/// # use furigana_merger::segment::segment;
/// # use furigana_merger::types::CharClass;
/// let runs = segment("漢字です");
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].text, "漢字");
/// assert_eq!(runs[0].class, CharClass::Ideographic);
/// assert_eq!(runs[1].class, CharClass::PhoneticPrimary);
/// ```
pub fn segment(line: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();

    // (start byte, class) of the run being accumulated
    let mut current: Option<(usize, CharClass)> = None;

    for (idx, ch) in line.char_indices() {
        let class = classify(ch);
        match current {
            Some((_, cur_class)) if cur_class == class => {}
            Some((start, cur_class)) => {
                runs.push(Run::new(&line[start..idx], cur_class));
                current = Some((idx, class));
            }
            None => current = Some((idx, class)),
        }
    }

    if let Some((start, class)) = current {
        runs.push(Run::new(&line[start..], class));
    }

    runs
}

/// Count the ideographic runs in a segment list
pub fn count_ideographic(runs: &[Run<'_>]) -> usize {
    runs.iter()
        .filter(|r| r.class == CharClass::Ideographic)
        .count()
}
