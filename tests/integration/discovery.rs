use crate::helpers::prelude::*;

#[test]
fn it_lists_valid_templates_and_reports_malformed_ones() {
    let dir = tempdir()
        .with_web_app()
        .template("broken.yml", "manifest: [unclosed\n")
        .build();

    binary()
        .arg("--list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Error reading broken.yml").count(1).from_utf8())
        .stdout(predicates::str::contains("1) Web App - A wonderful project").from_utf8())
        .stdout(predicates::str::contains("1 template file(s)").from_utf8());
}

#[test]
fn it_uses_a_fallback_name() {
    let dir = tempdir()
        .template("anon.yaml", "structure:\n  a.txt: ~\n")
        .build();

    binary()
        .arg("--list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("1) Unnamed Template").from_utf8());
}

#[test]
fn it_warns_about_duplicate_names() {
    let dir = tempdir()
        .template("a.yaml", "manifest:\n  name: Same\nstructure:\n  first.txt: ~\n")
        .template("b.yaml", "manifest:\n  name: Same\nstructure:\n  second.txt: ~\n")
        .build();

    binary()
        .current_dir(dir.path())
        .write_stdin("1\nproj\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("is declared by").from_utf8());

    assert!(dir.exists("proj/second.txt"));
    assert!(!dir.exists("proj/first.txt"));
}

#[test]
fn it_fails_on_a_missing_template_directory() {
    let dir = tempdir().build();

    binary()
        .arg("--list")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot read template directory").from_utf8());
}

#[test]
fn it_reads_another_template_directory() {
    let dir = tempdir()
        .file("layouts/web.yaml", WEB_APP)
        .build();

    binary()
        .args(["--templates", "layouts", "--list"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Web App").from_utf8());
}
