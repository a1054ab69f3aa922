// Furigana Merger CLI Tool
// Command-line interface for merging kanji text with kana transcriptions

use clap::{Parser, Subcommand, ValueEnum};
use furigana_merger::{
    build_pattern, clean_file, clean_string, segment, FailurePolicy, FuriganaMerger,
    DEFAULT_FURIGANA_TEMPLATE, DEFAULT_READING_TEMPLATE,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Furigana Merger - annotate kanji with readings from a kana transcription
#[derive(Parser, Debug)]
#[command(name = "furigana-merge")]
#[command(about = "Align kanji text with its kana transcription", long_about = None)]
#[command(version)]
struct Args {
    /// Log pipeline details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge a source file and its transcription into two output files
    Merge {
        /// Mixed-script source file
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Kana transcription file, line-aligned with SOURCE
        #[arg(value_name = "TRANSCRIPTION")]
        transcription: PathBuf,

        /// Output file for annotated lines
        #[arg(value_name = "ANNOTATED_OUT")]
        annotated: PathBuf,

        /// Output file for reading lines
        #[arg(value_name = "READING_OUT")]
        reading: PathBuf,

        #[command(flatten)]
        templates: TemplateArgs,

        /// What to do with lines that cannot be aligned
        #[arg(long, value_enum, default_value_t = OnFailure::Mark)]
        on_failure: OnFailure,
    },

    /// Align a single line pair and print both outputs
    Align {
        /// Mixed-script source line
        source: String,

        /// Kana transcription of the line
        transcription: String,

        #[command(flatten)]
        templates: TemplateArgs,

        /// Print the segments and the built pattern
        #[arg(short, long)]
        show_pattern: bool,
    },

    /// Print every line of a file with whitespace removed
    Clean {
        /// File to clean
        file: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct TemplateArgs {
    /// Annotation template; ${original} and ${reading} are substituted
    #[arg(long, default_value = DEFAULT_FURIGANA_TEMPLATE)]
    furigana_template: String,

    /// Reading template; ${original} and ${reading} are substituted
    #[arg(long, default_value = DEFAULT_READING_TEMPLATE)]
    reading_template: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OnFailure {
    /// Write the line behind a marker and continue
    Mark,
    /// Stop at the first unaligned line
    Abort,
}

impl From<OnFailure> for FailurePolicy {
    fn from(value: OnFailure) -> Self {
        match value {
            OnFailure::Mark => FailurePolicy::Mark,
            OnFailure::Abort => FailurePolicy::Abort,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "furigana_merger=debug"
    } else {
        "furigana_merger=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Merge {
            source,
            transcription,
            annotated,
            reading,
            templates,
            on_failure,
        } => {
            let merger = FuriganaMerger::new()?
                .with_furigana_template(&templates.furigana_template)?
                .with_reading_template(&templates.reading_template)?
                .with_failure_policy(on_failure.into());

            let report = merger.merge_files(&source, &transcription, &annotated, &reading)?;

            println!(
                "Merged {} lines: {} aligned, {} blank, {} failed (on failure: {})",
                report.total_lines,
                report.aligned_lines,
                report.blank_lines,
                report.failures.len(),
                merger.failure_policy()
            );
            for failure in &report.failures {
                println!(
                    "  line {}: {}\n    source:        {}\n    transcription: {}",
                    failure.line, failure.reason, failure.source_line, failure.transcription_line
                );
            }
        }

        Command::Align {
            source,
            transcription,
            templates,
            show_pattern,
        } => {
            let merger = FuriganaMerger::with_templates(
                &templates.furigana_template,
                &templates.reading_template,
            )?;

            if show_pattern {
                let cleaned = clean_string(&source);
                let runs = segment(&cleaned);
                println!("Segments:");
                for run in &runs {
                    println!("  {:<20} {}", run.text, run.class);
                }
                println!("Pattern: {}", build_pattern(&runs));
                println!();
            }

            let rendered = merger.merge_line(&source, &transcription)?;
            println!("{}", rendered.annotated);
            println!("{}", rendered.reading);
        }

        Command::Clean { file } => {
            for line in clean_file(&file)? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_merge_defaults() {
        let args = Args::parse_from(["furigana-merge", "merge", "a.txt", "b.txt", "c.txt", "d.txt"]);
        match args.command {
            Command::Merge {
                templates,
                on_failure,
                ..
            } => {
                assert_eq!(templates.furigana_template, DEFAULT_FURIGANA_TEMPLATE);
                assert_eq!(templates.reading_template, DEFAULT_READING_TEMPLATE);
                assert_eq!(FailurePolicy::from(on_failure), FailurePolicy::Mark);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_on_failure_abort() {
        let args = Args::parse_from([
            "furigana-merge",
            "merge",
            "a.txt",
            "b.txt",
            "c.txt",
            "d.txt",
            "--on-failure",
            "abort",
        ]);
        assert!(matches!(
            args.command,
            Command::Merge {
                on_failure: OnFailure::Abort,
                ..
            }
        ));
    }
}
