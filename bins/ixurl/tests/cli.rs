use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn ixurl() -> Command {
    let mut cmd = Command::cargo_bin("ixurl").unwrap();
    cmd.env_remove("IX_TOKEN");
    cmd
}

#[test]
fn url_with_params() {
    ixurl()
        .args(["--domain", "demo.imgix.net", "--no-lib-param", "url", "path/to/image.jpg"])
        .args(["-p", "w=320", "-p", "auto=format,compress"])
        .assert()
        .success()
        .stdout("https://demo.imgix.net/path/to/image.jpg?auto=format%2Ccompress&w=320\n");
}

#[test]
fn signed_url_from_env_token() {
    ixurl()
        .env("IX_TOKEN", "MYT0KEN")
        .args(["--domain", "demo.imgix.net", "--no-lib-param", "url", "path/to/image.jpg"])
        .assert()
        .success()
        .stdout("https://demo.imgix.net/path/to/image.jpg?s=c8bd1807209f7f1d96dd7123f92febb4\n");
}

#[test]
fn missing_domain_fails() {
    let dir = tempfile::tempdir().unwrap();
    ixurl()
        .current_dir(dir.path())
        .args(["url", "image.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no domain"));
}

#[test]
fn invalid_domain_fails() {
    ixurl()
        .args(["--domain", "https://demo.imgix.net", "url", "image.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scheme"));
}

#[test]
fn srcset_fixed_height() {
    ixurl()
        .args(["--domain", "demo.imgix.net", "--no-lib-param", "srcset", "image.png"])
        .args(["-p", "h=800", "-p", "ar=4:3", "--no-variable-quality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ar=4%3A3&dpr=5&h=800 5x"))
        .stdout(predicate::str::contains("q=").not());
}

#[test]
fn srcset_from_explicit_widths_json() {
    let output = ixurl()
        .args(["--domain", "demo.imgix.net", "--no-lib-param", "srcset", "image.jpg"])
        .args(["--widths", "100,200", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let candidates: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        candidates,
        [
            "https://demo.imgix.net/image.jpg?w=100 100w",
            "https://demo.imgix.net/image.jpg?w=200 200w"
        ]
    );
}

#[test]
fn srcset_invalid_bounds_fail() {
    ixurl()
        .args(["--domain", "demo.imgix.net", "srcset", "image.png", "--min-width", "500", "--max-width", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds max width"));
}

#[test]
fn widths_reference_sequence() {
    ixurl()
        .args(["widths", "--min-width", "300", "--max-width", "3000", "--tolerance", "0.13"])
        .assert()
        .success()
        .stdout("300 378 476 600 756 953 1200 1513 1906 2401 3000\n");
}

#[test]
fn config_file_supplies_domain_and_token() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "domain = \"my-social-network.imgix.net\"\ntoken = \"FOO123bar\"\ninclude_lib_param = false"
    )
    .unwrap();

    ixurl()
        .arg("--config")
        .arg(file.path())
        .args(["url", "/users/1.png", "-p", "w=400", "-p", "h=300"])
        .assert()
        .success()
        .stdout("https://my-social-network.imgix.net/users/1.png?h=300&w=400&s=1a4e48641614d1109c6a7af51be23d18\n");
}

#[test]
fn verify_round_trip() {
    let url = "https://demo.imgix.net/path/to/image.jpg?s=c8bd1807209f7f1d96dd7123f92febb4";
    ixurl()
        .args(["--domain", "demo.imgix.net", "--token", "MYT0KEN", "verify", url])
        .assert()
        .success();

    ixurl()
        .args(["--domain", "demo.imgix.net", "--token", "WRONG", "verify", url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("signature check failed"));
}

#[test]
fn explicit_widths_conflict_with_generator_options() {
    for extra in [
        ["--min-width", "200"],
        ["--max-width", "900"],
        ["--tolerance", "0.2"],
    ] {
        ixurl()
            .args(["--domain", "demo.imgix.net", "srcset", "image.png", "--widths", "100,200"])
            .args(extra)
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }

    ixurl()
        .args(["--domain", "demo.imgix.net", "srcset", "image.png", "--widths", "100"])
        .arg("--no-variable-quality")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn tiny_tolerance_fails() {
    ixurl()
        .args(["widths", "--tolerance", "0.00000000000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tolerance must be at least"));
}
