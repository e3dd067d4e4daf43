use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const CATALOG: &str = r#"[
    {
        "Title": "Origami robots and star-shaped actuators",
        "Author": "Rus, Tolley",
        "Year": 2018,
        "Venue": "Nature Reviews Materials",
        "Origami or Kirigami": "Origami",
        "Material": "PET",
        "Manufacturing": "Laser cutting",
        "Input": "Heat",
        "Output": "Folding",
        "Function": "Locomotion",
        "DOI": "https://doi.org/10.1038/s41578-018-0052-8",
        "image": "images/robots.jpg"
    },
    {
        "Title": "Kirigami skins",
        "Author": "Rafsanjani, Zhang",
        "Year": 2018,
        "Venue": "Science Robotics",
        "Origami or Kirigami": "Kirigami",
        "Material": "Paper",
        "Input": "Tension"
    }
]"#;

/// A working directory holding `papers.json`, isolated from any user config.
fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("papers.json"), CATALOG).unwrap();
    dir
}

fn papershelf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("papershelf").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_browse_defaults_to_cards() {
    let dir = workspace();
    papershelf(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Origami robots and star-shaped actuators"))
        .stdout(predicate::str::contains("Rus et al. | 2018 | Nature Reviews Materials"))
        .stdout(predicate::str::contains("[Origami] [PET] [Laser cutting]"))
        .stdout(predicate::str::contains("2. Kirigami skins"))
        .stdout(predicate::str::contains("Showing 2 of 2 papers"));
}

#[test]
fn test_missing_image_falls_back_to_default() {
    let dir = workspace();
    papershelf(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("image: images/default.jpg"))
        .stdout(predicate::str::contains("images/robots.jpg").not());
}

#[test]
fn test_existing_image_is_kept() {
    let dir = workspace();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/robots.jpg"), b"jpg").unwrap();
    papershelf(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("image: images/robots.jpg"));
}

#[test]
fn test_filter_flags_narrow_results() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["browse", "--material", "PET", "--origami", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Origami robots"))
        .stdout(predicate::str::contains("Kirigami skins").not())
        .stdout(predicate::str::contains("Showing 1 of 2 papers"));
}

#[test]
fn test_matching_is_case_sensitive() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["browse", "--material", "pet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching papers found."))
        .stdout(predicate::str::contains("No paper has Material \"pet\""));
}

#[test]
fn test_contradictory_filters_show_placeholder() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["browse", "--material", "PET", "--input", "Tension"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching papers found."))
        .stdout(predicate::str::contains("Showing 0 of 2 papers"));
}

#[test]
fn test_table_view() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["--view", "table", "browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Origami/Kirigami"))
        .stdout(predicate::str::contains("Manufacturing"))
        .stdout(predicate::str::contains("https://doi.org/10.1038/s41578-018-0052-8"));
}

#[test]
fn test_missing_catalog_is_empty_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    papershelf(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching papers found."))
        .stdout(predicate::str::contains("Showing 0 of 0 papers"))
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn test_malformed_catalog_is_empty_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("papers.json"), "{ not json").unwrap();
    papershelf(dir.path())
        .args(["facets", "material"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no values)"))
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn test_catalog_flag() {
    let dir = workspace();
    let elsewhere = tempfile::tempdir().unwrap();
    papershelf(elsewhere.path())
        .arg("--catalog")
        .arg(dir.path().join("papers.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of 2 papers"));
}

#[test]
fn test_facets_lists_sorted_options() {
    let dir = workspace();
    papershelf(dir.path())
        .arg("facets")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Origami/Kirigami (origami)\n  Kirigami\n  Origami\n",
        ))
        .stdout(predicate::str::contains("Material (material)\n  PET\n  Paper\n"))
        .stdout(predicate::str::contains("Function (function)\n  Locomotion\n"));
}

#[test]
fn test_unknown_facet_is_an_error() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["facets", "colour"])
        .assert()
        .failure();
}

#[test]
fn test_open_print_resolves_within_filtered_view() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["open", "1", "--print"])
        .assert()
        .success()
        .stdout("https://doi.org/10.1038/s41578-018-0052-8\n");

    papershelf(dir.path())
        .args(["open", "1", "--origami", "Kirigami", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no DOI link"));
}

#[test]
fn test_open_out_of_range_fails() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["open", "#3", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no paper #3"));
}

#[test]
fn test_export_writes_html_page() {
    let dir = workspace();
    let out = dir.path().join("shelf.html");
    papershelf(dir.path())
        .args(["export", "--material", "Paper", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 papers to"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("id=\"material-filter\""));
    assert!(html.contains("<option value=\"Paper\" selected>Paper</option>"));
    assert!(html.contains("Kirigami skins"));
    assert!(!html.contains("Origami robots"));
}

#[test]
fn test_shell_session() {
    let dir = workspace();
    papershelf(dir.path())
        .arg("shell")
        .write_stdin("set material PET\nview table\nreset\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Showing 1 of 2 papers (filters: material=PET)",
        ))
        .stdout(predicate::str::contains("Origami/Kirigami"))
        .stdout(predicate::str::ends_with(
            "Showing 2 of 2 papers (filters: all)\n",
        ));
}

#[test]
fn test_config_set_and_get() {
    let dir = workspace();
    papershelf(dir.path())
        .args(["config", "view", "table"])
        .assert()
        .success();
    assert!(dir.path().join(".papershelf/config.json").exists());

    papershelf(dir.path())
        .args(["config", "view"])
        .assert()
        .success()
        .stdout("table\n");

    papershelf(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Origami/Kirigami"));

    papershelf(dir.path())
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
