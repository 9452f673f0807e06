use std::process::Command;

#[test]
fn prints_area_and_volume_totals() {
    let output = Command::new(env!("CARGO_BIN_EXE_shapecalc"))
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Total area: 212.93804002589985\nTotal volume: 33.510321638291124\n"
    );
}
