use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test fixture holding a temporary directory with a seeded document file.
struct CliFixture {
    _temp_dir: TempDir,
    file: PathBuf,
}

impl CliFixture {
    fn yaml(content: &str) -> Result<Self> {
        Self::new("doc.yaml", content)
    }

    fn json(content: &str) -> Result<Self> {
        Self::new("doc.json", content)
    }

    fn new(name: &str, content: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join(name);
        fs::write(&file, content)?;
        Ok(Self {
            _temp_dir: temp_dir,
            file,
        })
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("injector").expect("injector binary");
        cmd.arg("-f").arg(&self.file);
        cmd
    }

    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.file)?)
    }
}

#[test]
fn set_writes_yaml_to_stdout_by_default() -> Result<()> {
    let fixture = CliFixture::yaml("name: old\n")?;

    fixture
        .cmd()
        .args(["--set", "name=Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Alice"));

    // Without -o save the input file is untouched.
    assert_eq!(fixture.read()?, "name: old\n");
    Ok(())
}

#[test]
fn set_infers_value_types() -> Result<()> {
    let fixture = CliFixture::yaml("{}\n")?;

    fixture
        .cmd()
        .args(["--set", "count=5", "--set", "active=true", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 5"))
        .stdout(predicate::str::contains("\"active\": true"));
    Ok(())
}

#[test]
fn wildcard_set_reaches_every_element() -> Result<()> {
    let fixture = CliFixture::json(r#"{"users": [{"name": "a"}, {"name": "b"}]}"#)?;

    fixture
        .cmd()
        .args(["--set", "users.[*].age=10", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"age\": 10").count(2));
    Ok(())
}

#[test]
fn save_rewrites_the_input_file_in_its_own_format() -> Result<()> {
    let fixture = CliFixture::yaml("name: old\n")?;

    fixture
        .cmd()
        .args(["--set", "name=Alice", "-o", "save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved changes to"));

    assert!(fixture.read()?.contains("name: Alice"));
    Ok(())
}

#[test]
fn out_flag_routes_output_to_a_file() -> Result<()> {
    let fixture = CliFixture::yaml("name: old\n")?;
    let out = fixture.file.with_file_name("out.yaml");

    fixture
        .cmd()
        .args(["--set", "name=Alice", "--out"])
        .arg(&out)
        .assert()
        .success();

    assert!(fs::read_to_string(&out)?.contains("name: Alice"));
    assert_eq!(fixture.read()?, "name: old\n");
    Ok(())
}

#[test]
fn insert_on_an_existing_path_warns_and_continues() -> Result<()> {
    let fixture = CliFixture::yaml("name: Alice\n")?;

    fixture
        .cmd()
        .args(["--insert", "name=Bob", "--insert", "age=30"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("name: Alice"))
        .stdout(predicate::str::contains("age: 30"));
    Ok(())
}

#[test]
fn delete_of_a_missing_path_fails_the_run() -> Result<()> {
    let fixture = CliFixture::yaml("name: Alice\n")?;

    fixture
        .cmd()
        .args(["--delete", "missing", "-o", "save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    // A failed run never reaches the output file.
    assert_eq!(fixture.read()?, "name: Alice\n");
    Ok(())
}

#[test]
fn sets_apply_before_deletes_regardless_of_argv_order() -> Result<()> {
    let fixture = CliFixture::yaml("{}\n")?;

    fixture
        .cmd()
        .args(["--delete", "a", "--set", "a=1", "--set", "b=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b: 2"))
        .stdout(predicate::str::contains("a: 1").not());
    Ok(())
}

#[test]
fn malformed_range_token_is_reported() -> Result<()> {
    let fixture = CliFixture::yaml("users: [1, 2]\n")?;

    fixture
        .cmd()
        .args(["--set", "users.[2..1]=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than"));
    Ok(())
}

#[test]
fn missing_operations_print_usage() -> Result<()> {
    let fixture = CliFixture::yaml("{}\n")?;

    fixture
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn json_input_can_be_saved_back_as_json() -> Result<()> {
    let fixture = CliFixture::json(r#"{"name": "old"}"#)?;

    fixture
        .cmd()
        .args(["--set", "name=Alice", "-o", "save"])
        .assert()
        .success();

    let saved = fixture.read()?;
    assert!(saved.contains("\"name\": \"Alice\""));
    Ok(())
}
