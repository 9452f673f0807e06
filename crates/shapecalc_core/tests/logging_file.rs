use shapecalc_core::{
    demo_figures, flush_logging, init_logging, logging_status, summarize, LogTarget,
};
use std::fs;

#[test]
fn file_logging_records_calculator_events() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().expect("temp dir should be valid UTF-8");

    init_logging("debug", Some(dir_str)).expect("file logging should start");
    let (level, target) = logging_status().expect("logging should be active");
    assert_eq!(level, "debug");
    assert_eq!(target, LogTarget::Directory(dir.path().to_path_buf()));

    summarize(&demo_figures().unwrap());
    flush_logging();

    let mut contents = String::new();
    for entry in fs::read_dir(dir.path()).unwrap() {
        contents.push_str(&fs::read_to_string(entry.unwrap().path()).unwrap());
    }

    assert!(contents.contains("event=logging_init module=core status=ok"));
    assert!(contents.contains("event=total_area module=service status=ok shapes=3"));
    assert!(contents.contains("event=total_volume module=service status=ok figures=4 solids=1 skipped=3"));
    assert!(contents.contains("event=summary module=service status=ok figures=4"));
}
