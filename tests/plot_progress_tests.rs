use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;

const SUBMISSIONS_JSON: &str = r#"[
    {
        "id": 1,
        "value": "100",
        "status": "APPROVED",
        "createdAt": "2025-05-16T18:30:00Z",
        "team": { "id": 1, "name": "Bandos" }
    },
    {
        "id": 2,
        "value": "200",
        "status": "APPROVED",
        "createdAt": "2025-05-17T17:00:00Z",
        "team": { "id": 2, "name": "Zamorak" }
    },
    {
        "id": 3,
        "value": "50",
        "status": "APPROVED",
        "createdAt": "2025-05-18T12:00:00Z",
        "team": { "id": 1, "name": "Bandos" }
    }
]"#;

#[test]
fn plot_progress_writes_a_png() {
    let input_file = assert_fs::NamedTempFile::new("submissions.json").unwrap();
    input_file.write_str(SUBMISSIONS_JSON).unwrap();
    let output_file = assert_fs::NamedTempFile::new("progress.png").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
    cmd.args([
        "plot-progress",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Progress chart written to"));

    output_file.assert(predicate::path::exists());
    let metadata = std::fs::metadata(output_file.path()).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn plot_progress_rejects_an_export_with_no_approved_submissions() {
    let input_file = assert_fs::NamedTempFile::new("submissions.json").unwrap();
    input_file.write_str("[]").unwrap();
    let output_file = assert_fs::NamedTempFile::new("progress.png").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
    cmd.args([
        "plot-progress",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .stderr(predicate::str::contains("milestone report is empty"));
}
