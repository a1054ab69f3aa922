// Performance benchmarks for furigana-merger line alignment

use furigana_merger::{build_pattern, clean_string, segment, Aligner, FuriganaMerger};
use std::time::Instant;

const LINES: &[(&str, &str)] = &[
    ("漢字です。カタカナ", "かんじです。カタカナ"),
    ("私は毎日本を読みます", "わたしわまいにちほんおよみます"),
    ("時々雨が降る", "ときどきあめがふる"),
    ("東京タワーに行く", "とうきょうタワーにいく"),
    ("「夢」とOK!", "「ゆめ」とOK!"),
];

fn main() {
    println!("🏃 Furigana Merger Performance Benchmarks\n");

    let merger = FuriganaMerger::new().expect("Failed to create merger");

    // Warmup
    let _ = merger.merge_line(LINES[0].0, LINES[0].1);

    bench_pattern_building();
    bench_single_lines(&merger);
    bench_batch(&merger);
    bench_pathological();

    println!("\n✅ Benchmarks completed!");
}

fn bench_pattern_building() {
    println!("🧩 PATTERN BUILDING (clean + segment + build)");
    println!("──────────────────────────────────────────────");

    for (source, _) in LINES {
        let start = Instant::now();
        let pattern = build_pattern(&segment(&clean_string(source)));
        let duration = start.elapsed();

        println!(
            "  {:<12} → {} bytes in {:.3}ms",
            source,
            pattern.len(),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_single_lines(merger: &FuriganaMerger) {
    println!("🔤 SINGLE LINE MERGE");
    println!("─────────────────────");

    for (source, transcription) in LINES {
        let start = Instant::now();
        let result = merger.merge_line(source, transcription);
        let duration = start.elapsed();

        println!(
            "  {:<12} → {} in {:.3}ms",
            source,
            if result.is_ok() { "aligned" } else { "failed" },
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_batch(merger: &FuriganaMerger) {
    println!("📦 BATCH MERGE");
    println!("───────────────");

    let count = 1000;
    let sources: Vec<&str> = LINES.iter().cycle().take(count).map(|(s, _)| *s).collect();
    let transcriptions: Vec<&str> = LINES.iter().cycle().take(count).map(|(_, t)| *t).collect();

    let start = Instant::now();
    let output = merger
        .merge_lines(&sources, &transcriptions)
        .expect("Merge failed");
    let total = start.elapsed();

    println!(
        "  {} lines in {:.3}ms ({:.3}ms avg), {} failed",
        count,
        total.as_secs_f64() * 1000.0,
        (total.as_secs_f64() / count as f64) * 1000.0,
        output.report.failures.len()
    );
    println!();
}

fn bench_pathological() {
    println!("⚠️  PATHOLOGICAL WILDCARDS");
    println!("──────────────────────────");

    let aligner = Aligner::new();
    for repeat in [10, 50, 100] {
        let source = "漢ア!".repeat(repeat);
        let transcription = "かあ?".repeat(repeat) + "x";
        let pattern = build_pattern(&segment(&source));

        let start = Instant::now();
        let result = aligner.align(&pattern, &transcription);
        let duration = start.elapsed();

        println!(
            "  {:>3} groups → {} in {:.3}ms",
            repeat,
            if result.is_ok() { "aligned" } else { "failed" },
            duration.as_secs_f64() * 1000.0
        );
    }
}
