// Furigana Merger Line Merger
// Main API that runs the pipeline per line pair and over whole files

use crate::classify::clean_string;
use crate::matcher::Aligner;
use crate::pattern::build_pattern;
use crate::render::{
    render, Rendered, Template, DEFAULT_FURIGANA_TEMPLATE, DEFAULT_READING_TEMPLATE,
};
use crate::segment::segment;
use crate::types::{
    AlignError, FailurePolicy, LineFailure, MergeError, MergeReport, TemplateError,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Prefix written before a line that could not be aligned
pub const FAILURE_MARKER: &str = "[unaligned] ";

/// Merged output lines plus a summary
#[derive(Debug, Clone, Default)]
pub struct MergeOutput {
    /// Annotated lines, one per input line
    pub annotated: Vec<String>,

    /// Reading lines, one per input line
    pub reading: Vec<String>,

    /// Line counts and failures
    pub report: MergeReport,
}

/// Furigana merger
///
/// Combines all components:
/// - Cleaning and segmentation of the source line
/// - Pattern building and anchored alignment against the transcription
/// - Template rendering of both output lines
pub struct FuriganaMerger {
    /// Matcher for per-line patterns
    aligner: Aligner,

    /// Template for the annotated output
    furigana_template: Template,

    /// Template for the reading output
    reading_template: Template,

    /// Behaviour on lines that fail to align
    failure_policy: FailurePolicy,
}

impl FuriganaMerger {
    /// Create a merger with the default templates and `FailurePolicy::Mark`
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_templates(DEFAULT_FURIGANA_TEMPLATE, DEFAULT_READING_TEMPLATE)
    }

    /// Create a merger with custom templates
    ///
    /// # Example
    /// ```
    /// # use furigana_merger::FuriganaMerger;
    /// let merger = FuriganaMerger::with_templates("${original}(${reading})", "${reading}").unwrap();
    /// let out = merger.merge_line("漢字です", "かんじです").unwrap();
    /// assert_eq!(out.annotated, "漢字(かんじ)です");
    /// assert_eq!(out.reading, "かんじです");
    /// ```
    pub fn with_templates(
        furigana_template: &str,
        reading_template: &str,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            aligner: Aligner::new(),
            furigana_template: Template::parse(furigana_template)?,
            reading_template: Template::parse(reading_template)?,
            failure_policy: FailurePolicy::default(),
        })
    }

    /// Replace the annotation template
    ///
    /// # Example
    /// ```
    /// # use furigana_merger::FuriganaMerger;
    /// let merger = FuriganaMerger::new()
    ///     .and_then(|m| m.with_furigana_template("${original}[${reading}]"))
    ///     .unwrap();
    /// let out = merger.merge_line("本", "ほん").unwrap();
    /// assert_eq!(out.annotated, "本[ほん]");
    /// assert_eq!(out.reading, "**ほん**");
    /// ```
    pub fn with_furigana_template(mut self, template: &str) -> Result<Self, TemplateError> {
        self.furigana_template = Template::parse(template)?;
        Ok(self)
    }

    /// Replace the reading template
    pub fn with_reading_template(mut self, template: &str) -> Result<Self, TemplateError> {
        self.reading_template = Template::parse(template)?;
        Ok(self)
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Replace the aligner
    pub fn with_aligner(mut self, aligner: Aligner) -> Self {
        self.aligner = aligner;
        self
    }

    /// Current failure policy
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Run the full pipeline on one line pair
    ///
    /// Both lines are cleaned, the source is segmented, and the resulting
    /// pattern is aligned against the transcription. Rendering only happens
    /// after a successful alignment.
    ///
    /// # Example
    /// ```
    /// # use furigana_merger::FuriganaMerger;
    /// let merger = FuriganaMerger::new().unwrap();
    /// let out = merger.merge_line("漢字です。カタカナ", "かんじです。カタカナ").unwrap();
    /// assert_eq!(out.annotated, "{かんじ|漢字}です。カタカナ");
    /// assert_eq!(out.reading, "**かんじ**です。カタカナ");
    /// ```
    pub fn merge_line(&self, source: &str, transcription: &str) -> Result<Rendered, AlignError> {
        let source = clean_string(source);
        let transcription = clean_string(transcription);

        let runs = segment(&source);
        let pattern = build_pattern(&runs);
        debug!(runs = runs.len(), %pattern, "built pattern");

        let alignment = self.aligner.align(&pattern, &transcription)?;
        render(
            &runs,
            &alignment,
            &self.furigana_template,
            &self.reading_template,
        )
    }

    /// Merge two parallel sets of lines in memory
    ///
    /// Blank source lines are passed through as blank output lines without
    /// alignment. Failed lines are marked or abort the merge according to the
    /// failure policy.
    pub fn merge_lines<S, T>(
        &self,
        source_lines: &[S],
        transcription_lines: &[T],
    ) -> Result<MergeOutput, MergeError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        if source_lines.len() != transcription_lines.len() {
            return Err(MergeError::LineCountMismatch {
                source_lines: source_lines.len(),
                transcription_lines: transcription_lines.len(),
            });
        }

        let mut output = MergeOutput {
            report: MergeReport {
                total_lines: source_lines.len(),
                ..MergeReport::default()
            },
            ..MergeOutput::default()
        };

        for (idx, (source, transcription)) in
            source_lines.iter().zip(transcription_lines).enumerate()
        {
            let (source, transcription) = (source.as_ref(), transcription.as_ref());
            let line = idx + 1;

            if source.is_empty() {
                output.annotated.push(String::new());
                output.reading.push(String::new());
                output.report.blank_lines += 1;
                continue;
            }

            match self.merge_line(source, transcription) {
                Ok(rendered) => {
                    output.annotated.push(rendered.annotated);
                    output.reading.push(rendered.reading);
                    output.report.aligned_lines += 1;
                }
                Err(reason) => {
                    warn!(line, source, transcription, %reason, "alignment failed");
                    match self.failure_policy {
                        FailurePolicy::Abort => {
                            return Err(MergeError::Alignment {
                                line,
                                source_line: source.to_string(),
                                transcription_line: transcription.to_string(),
                                reason,
                            });
                        }
                        FailurePolicy::Mark => {
                            let marked = format!("{}{}", FAILURE_MARKER, clean_string(source));
                            output.annotated.push(marked.clone());
                            output.reading.push(marked);
                            output.report.failures.push(LineFailure {
                                line,
                                source_line: source.to_string(),
                                transcription_line: transcription.to_string(),
                                reason,
                            });
                        }
                    }
                }
            }
        }

        Ok(output)
    }

    /// Merge a source file and a transcription file into two output files
    ///
    /// Both inputs must have the same number of lines; the check happens
    /// before any line is processed or any output is created.
    pub fn merge_files(
        &self,
        source_path: impl AsRef<Path>,
        transcription_path: impl AsRef<Path>,
        annotated_path: impl AsRef<Path>,
        reading_path: impl AsRef<Path>,
    ) -> Result<MergeReport, MergeError> {
        let source_text = read_input(source_path.as_ref())?;
        let transcription_text = read_input(transcription_path.as_ref())?;

        let source_lines: Vec<&str> = source_text.lines().collect();
        let transcription_lines: Vec<&str> = transcription_text.lines().collect();

        info!(
            source = %source_path.as_ref().display(),
            transcription = %transcription_path.as_ref().display(),
            lines = source_lines.len(),
            policy = %self.failure_policy,
            "merging files"
        );

        let output = self.merge_lines(&source_lines, &transcription_lines)?;

        write_lines(annotated_path.as_ref(), &output.annotated)?;
        write_lines(reading_path.as_ref(), &output.reading)?;

        info!(
            aligned = output.report.aligned_lines,
            blank = output.report.blank_lines,
            failed = output.report.failures.len(),
            "merge complete"
        );

        Ok(output.report)
    }
}

/// Read a file and return its lines with whitespace removed
///
/// Blank lines stay blank, so the result is still line-aligned with the file.
pub fn clean_file(path: impl AsRef<Path>) -> Result<Vec<String>, MergeError> {
    let text = read_input(path.as_ref())?;
    Ok(text.lines().map(clean_string).collect())
}

fn read_input(path: &Path) -> Result<String, MergeError> {
    std::fs::read_to_string(path).map_err(|source| MergeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), MergeError> {
    let io_err = |source| MergeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for line in lines {
        writeln!(writer, "{}", line).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}
