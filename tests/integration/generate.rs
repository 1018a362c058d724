use crate::helpers::prelude::*;
use std::fs;

#[test]
fn it_creates_the_structure_from_the_chosen_template() {
    let dir = tempdir().with_web_app().build();

    binary()
        .current_dir(dir.path())
        .write_stdin("1\nproj\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("1) Web App").from_utf8())
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert!(dir.is_dir("proj/src"));
    assert_eq!(dir.read("proj/src/main.py"), "");
    // string leaves mark files, they never seed contents
    assert_eq!(dir.read("proj/README.md"), "");
}

#[test]
fn it_can_run_twice_without_touching_contents() {
    let dir = tempdir().with_web_app().build();

    binary()
        .current_dir(dir.path())
        .write_stdin("1\nproj\n")
        .assert()
        .success();
    fs::write(dir.join("proj/README.md"), "# notes").unwrap();

    binary()
        .current_dir(dir.path())
        .write_stdin("1\nproj\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("⛔").count(0).from_utf8());

    assert_eq!(dir.read("proj/README.md"), "# notes");
}

#[test]
fn it_keeps_going_past_entries_that_cannot_be_created() {
    let dir = tempdir()
        .template(
            "mixed.yaml",
            indoc! {r#"
                manifest:
                  name: Mixed
                structure:
                  bad: [1, 2]
                  good:
                    ok.txt: ~
            "#},
        )
        .build();

    binary()
        .current_dir(dir.path())
        .write_stdin("1\nproj\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("expected a mapping, got a sequence").from_utf8())
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert!(!dir.exists("proj/bad"));
    assert!(dir.exists("proj/good/ok.txt"));
}

#[test]
fn it_reports_a_missing_structure_section_and_exits_normally() {
    let dir = tempdir()
        .template("bare.yaml", "manifest:\n  name: Bare\n")
        .build();

    binary()
        .current_dir(dir.path())
        .write_stdin("1\nproj\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("no 'structure' key found").from_utf8())
        .stdout(predicates::str::contains("Done!").count(0).from_utf8());

    assert!(!dir.exists("proj"));
}

#[test]
fn it_accepts_template_and_destination_flags() {
    let dir = tempdir()
        .with_web_app()
        .template("lib.yml", "manifest:\n  name: Lib\nstructure:\n  lib.rs: ~\n")
        .build();

    binary()
        .arg("--template")
        .arg("Lib")
        .arg("--destination")
        .arg(dir.join("out/lib"))
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("out/lib/lib.rs"));
    assert!(!dir.exists("out/lib/src"));
}

#[test]
fn it_rejects_an_unknown_template_name() {
    let dir = tempdir().with_web_app().build();

    binary()
        .args(["--template", "Nope", "--destination", "proj"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("template `Nope` not found").from_utf8());
}
