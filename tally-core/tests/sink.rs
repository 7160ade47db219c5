use std::fs;

use tally_core::sink::{persist, ChartSpec, FileSink, ResultSink, CHART_FILE, TABLE_FILE};
use tally_core::WordFrequencyAnalyzer;

#[test]
fn writes_table_and_chart() {
    let dir = tempfile::tempdir().unwrap();
    let report = WordFrequencyAnalyzer::new().analyze("card card cards bonus");
    let mut sink = FileSink::new(dir.path());

    persist(&report, &mut sink).unwrap();

    let csv = fs::read_to_string(dir.path().join(TABLE_FILE)).unwrap();
    assert_eq!(csv, "word,frequency,percentage\ncard,3,75.00\nbonus,1,25.00\n");

    let chart: ChartSpec =
        serde_json::from_str(&fs::read_to_string(dir.path().join(CHART_FILE)).unwrap()).unwrap();
    assert_eq!(chart.title, "Most Frequent Words");
    assert_eq!(chart.bars.len(), 2);
    assert_eq!(chart.bars[0].word, "card");
    assert_eq!(chart.bars[0].frequency, 3);
}

#[test]
fn empty_report_writes_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let report = WordFrequencyAnalyzer::new().analyze("");
    let mut sink = FileSink::new(dir.path());

    persist(&report, &mut sink).unwrap();

    let csv = fs::read_to_string(sink.table_path()).unwrap();
    assert_eq!(csv, "word,frequency,percentage\n");

    let chart: ChartSpec =
        serde_json::from_str(&fs::read_to_string(sink.chart_path()).unwrap()).unwrap();
    assert!(chart.is_placeholder());
    assert_eq!(chart.title, "No Words Found");
    assert_eq!(
        chart.message.as_deref(),
        Some("No words found in the provided text")
    );
}

#[test]
fn chart_is_limited_to_top_rows() {
    let dir = tempfile::tempdir().unwrap();
    let report = WordFrequencyAnalyzer::new().analyze("alpha alpha alpha delta delta zulu");
    let mut sink = FileSink::new(dir.path()).with_chart_top_n(1);

    sink.write_chart(report.entries()).unwrap();

    let chart: ChartSpec =
        serde_json::from_str(&fs::read_to_string(sink.chart_path()).unwrap()).unwrap();
    assert_eq!(chart.bars.len(), 1);
    assert_eq!(chart.bars[0].word, "alpha");
}

#[test]
fn creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports").join("today");
    let mut sink = FileSink::new(&nested);

    sink.write_table(&[]).unwrap();

    assert!(nested.join(TABLE_FILE).is_file());
}

#[test]
fn rewrites_replace_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let analyzer = WordFrequencyAnalyzer::new();
    let mut sink = FileSink::new(dir.path());

    persist(&analyzer.analyze("first first"), &mut sink).unwrap();
    persist(&analyzer.analyze("second"), &mut sink).unwrap();

    let csv = fs::read_to_string(sink.table_path()).unwrap();
    assert_eq!(csv, "word,frequency,percentage\nsecond,1,100.00\n");

    // temp files are renamed into place, nothing else is left behind
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, [TABLE_FILE, CHART_FILE]);
}

#[test]
fn unwritable_target_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();
    let mut sink = FileSink::new(blocker.join("out"));

    assert!(sink.write_table(&[]).is_err());
}
