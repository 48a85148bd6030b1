use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use roster_common::test_case::TestCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail {
        expected: Option<String>,
        actual: String,
    },
}

/// Runs scenarios against a built `roster` binary.
pub struct TestRunner {
    runtime_path: PathBuf,
}

impl TestRunner {
    pub fn from_path(path: PathBuf) -> Self {
        TestRunner { runtime_path: path }
    }

    pub fn run(&self, test_case: &TestCase) -> anyhow::Result<TestResult> {
        let temp_dir = tempfile::Builder::new()
            .prefix("roster-compat-")
            .tempdir()
            .context("failed to create temp dir")?;
        let file_stem = test_case
            .path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        let roster_path = temp_dir.path().join(format!("{}.csv", file_stem));
        fs::write(&roster_path, format!("{}\n", test_case.roster))
            .with_context(|| format!("failed to write {}", roster_path.display()))?;

        let input_commands = test_case.queries().join(",");

        let result = match Command::new(&self.runtime_path)
            .arg("lookup")
            .arg(&roster_path)
            .arg(&input_commands)
            .output()
        {
            Ok(output) => {
                let actual = String::from_utf8_lossy(&output.stdout).into_owned();
                Self::compare(&test_case.result, actual)
            }
            Err(err) => TestResult::Fail {
                expected: None,
                actual: format!("Error running test: {}", err),
            },
        };

        Ok(result)
    }

    fn compare(expected: &str, actual: String) -> TestResult {
        let expected_trimmed = expected.trim_end_matches(['\r', '\n']);
        let actual_trimmed = actual.trim_end_matches(['\r', '\n']);

        if expected_trimmed == actual_trimmed {
            TestResult::Pass
        } else {
            TestResult::Fail {
                expected: Some(expected.to_string()),
                actual,
            }
        }
    }
}
