// Integration tests for the full per-line pipeline

use furigana_merger::{
    build_pattern, clean_string, segment, AlignError, Aligner, CharClass, FuriganaMerger, Run,
};

// ============ Pipeline Stages ============

#[test]
fn test_pipeline_stages_mixed_line() {
    let source = clean_string("漢字です。カタカナ");
    let runs = segment(&source);
    assert_eq!(
        runs,
        vec![
            Run::new("漢字", CharClass::Ideographic),
            Run::new("です", CharClass::PhoneticPrimary),
            Run::new("。", CharClass::Other),
            Run::new("カタカナ", CharClass::PhoneticSecondary),
        ]
    );

    let pattern = build_pattern(&runs);
    let alignment = Aligner::new()
        .align(&pattern, &clean_string("かんじです。カタカナ"))
        .unwrap();
    assert_eq!(alignment.readings, vec!["かんじ"]);
}

#[test]
fn test_merge_mixed_line() {
    let merger = FuriganaMerger::new().unwrap();
    let out = merger
        .merge_line("漢字です。カタカナ", "かんじです。カタカナ")
        .unwrap();
    assert_eq!(out.annotated, "{かんじ|漢字}です。カタカナ");
    assert_eq!(out.reading, "**かんじ**です。カタカナ");
}

// ============ Realistic Lines ============

#[test]
fn test_merge_sentence_with_particles() {
    let merger = FuriganaMerger::new().unwrap();
    let out = merger
        .merge_line("私は毎日本を読みます", "わたしわまいにちほんおよみます")
        .unwrap();
    assert_eq!(out.annotated, "{わたし|私}は{まいにちほん|毎日本}を{よ|読}みます");
    assert_eq!(out.reading, "**わたし**は**まいにちほん**を**よ**みます");
}

#[test]
fn test_merge_iteration_mark() {
    let merger = FuriganaMerger::new().unwrap();
    let out = merger.merge_line("時々雨が降る", "ときどきあめがふる").unwrap();
    assert_eq!(out.annotated, "{ときどきあめ|時々雨}が{ふ|降}る");
}

#[test]
fn test_merge_katakana_run() {
    let merger = FuriganaMerger::new().unwrap();
    let out = merger
        .merge_line("東京タワーに行く", "とうきょうタワーにいく")
        .unwrap();
    assert_eq!(out.annotated, "{とうきょう|東京}タワーに{い|行}く");
    assert_eq!(out.reading, "**とうきょう**タワーに**い**く");
}

#[test]
fn test_merge_katakana_transcribed_as_hiragana() {
    // Over-normalized transcription: katakana written in hiragana
    let merger = FuriganaMerger::new().unwrap();
    let out = merger.merge_line("このタワーは高い", "このたわーわたかい").unwrap();
    assert_eq!(out.annotated, "このタワーは{たか|高}い");
    assert_eq!(out.reading, "このタワーは**たか**い");
}

#[test]
fn test_greedy_reading_absorbs_hiragana_katakana() {
    // A kanji reading is captured greedily, so hiragana that stands in for a
    // following katakana run is absorbed while the pattern still matches.
    let merger = FuriganaMerger::new().unwrap();
    let out = merger
        .merge_line("東京タワーに行く", "とうきょうたわーにいく")
        .unwrap();
    assert_eq!(out.annotated, "{とうきょうたわ|東京}タワーに{い|行}く");
}

#[test]
fn test_merge_punctuation_and_latin() {
    let merger = FuriganaMerger::new().unwrap();
    let out = merger.merge_line("「夢」とOK!", "「ゆめ」とOK!").unwrap();
    assert_eq!(out.annotated, "「{ゆめ|夢}」とOK!");
}

#[test]
fn test_merge_custom_templates() {
    let merger =
        FuriganaMerger::with_templates("<ruby>${original}<rt>${reading}</rt></ruby>", "${reading}")
            .unwrap();
    let out = merger.merge_line("漢字です", "かんじです").unwrap();
    assert_eq!(out.annotated, "<ruby>漢字<rt>かんじ</rt></ruby>です");
    assert_eq!(out.reading, "かんじです");
}

#[test]
fn test_merge_line_without_kanji_is_unchanged() {
    let merger = FuriganaMerger::new().unwrap();
    let out = merger.merge_line(" ひらがな と カタカナ ", "ひらがなとかたかな").unwrap();
    assert_eq!(out.annotated, "ひらがなとカタカナ");
    assert_eq!(out.reading, "ひらがなとカタカナ");
}

// ============ Failures ============

#[test]
fn test_unexpected_particle_fails() {
    let merger = FuriganaMerger::new().unwrap();
    let result = merger.merge_line("猫が好き", "ねこをすき");
    assert!(matches!(result, Err(AlignError::NoMatch { .. })));
}

#[test]
fn test_empty_transcription_fails_for_kanji() {
    let merger = FuriganaMerger::new().unwrap();
    let result = merger.merge_line("漢字", "");
    assert!(matches!(result, Err(AlignError::NoMatch { .. })));
}
