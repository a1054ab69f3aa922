// Furigana Merger Renderer
// Output templates and the run walk that produces both output lines

use crate::segment::count_ideographic;
use crate::types::{AlignError, Alignment, CharClass, Run, TemplateError};

/// Default annotation template: `{reading|original}`
pub const DEFAULT_FURIGANA_TEMPLATE: &str = "{${reading}|${original}}";

/// Default reading template: `**reading**`
pub const DEFAULT_READING_TEMPLATE: &str = "**${reading}**";

/// Values a template may substitute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    /// The kanji run as written in the source line
    Original,
    /// The reading captured from the transcription line
    Reading,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "original" => Some(Placeholder::Original),
            "reading" => Some(Placeholder::Reading),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Value(Placeholder),
}

/// A parsed output template
///
/// `${original}` and `${reading}` are substituted. Any other `${name}` is
/// copied to the output unchanged, as is a `$` not followed by `{`. Nothing
/// is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse a template string
    ///
    /// # Example
    /// ```
    /// # use furigana_merger::render::Template;
    /// let t = Template::parse("{${reading}|${original}}").unwrap();
    /// assert_eq!(t.format("漢字", "かんじ"), "{かんじ|漢字}");
    /// ```
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find('}').ok_or_else(|| TemplateError::Unterminated {
                template: template.to_string(),
                offset: template.len() - rest.len() + start,
            })?;

            let name = &after[..end];
            match Placeholder::from_name(name) {
                Some(placeholder) => {
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Value(placeholder));
                }
                None => literal.push_str(&rest[start..start + 2 + end + 1]),
            }
            rest = &after[end + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self { pieces })
    }

    /// Substitute the two values into the template
    pub fn format(&self, original: &str, reading: &str) -> String {
        let mut out = String::new();
        self.format_into(&mut out, original, reading);
        out
    }

    fn format_into(&self, out: &mut String, original: &str, reading: &str) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Value(Placeholder::Original) => out.push_str(original),
                Piece::Value(Placeholder::Reading) => out.push_str(reading),
            }
        }
    }
}

/// Rendered annotation and reading lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Source line with kanji runs annotated
    pub annotated: String,
    /// Source line with kanji runs replaced by their marked readings
    pub reading: String,
}

/// Walk the runs, substituting templates for kanji runs
///
/// Kanji runs consume readings from `alignment` in order; every other run is
/// copied verbatim into both outputs. An alignment whose reading count
/// differs from the number of kanji runs is rejected before anything is
/// rendered.
///
/// # Example
/// ```
/// # use furigana_merger::render::{render, Template};
/// # use furigana_merger::segment::segment;
/// # use furigana_merger::types::Alignment;
/// let runs = segment("漢字です");
/// let alignment = Alignment { readings: vec!["かんじ".to_string()] };
/// let furigana = Template::parse("{${reading}|${original}}").unwrap();
/// let reading = Template::parse("**${reading}**").unwrap();
/// let out = render(&runs, &alignment, &furigana, &reading).unwrap();
/// assert_eq!(out.annotated, "{かんじ|漢字}です");
/// assert_eq!(out.reading, "**かんじ**です");
/// ```
pub fn render(
    runs: &[Run<'_>],
    alignment: &Alignment,
    furigana_template: &Template,
    reading_template: &Template,
) -> Result<Rendered, AlignError> {
    let expected = count_ideographic(runs);
    if alignment.len() != expected {
        return Err(AlignError::ReadingCount {
            expected,
            actual: alignment.len(),
        });
    }

    let mut annotated = String::new();
    let mut reading = String::new();
    let mut readings = alignment.readings.iter();

    for run in runs {
        match run.class {
            CharClass::Ideographic => {
                let Some(captured) = readings.next() else {
                    break;
                };
                furigana_template.format_into(&mut annotated, run.text, captured);
                reading_template.format_into(&mut reading, run.text, captured);
            }
            CharClass::PhoneticPrimary | CharClass::PhoneticSecondary | CharClass::Other => {
                annotated.push_str(run.text);
                reading.push_str(run.text);
            }
        }
    }

    Ok(Rendered { annotated, reading })
}
