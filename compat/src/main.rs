use clap::Parser;
use colored::Colorize;
use glob::glob;
use roster_common::test_case::TestCase;
use std::path::PathBuf;

mod test_runner;
use test_runner::{TestResult, TestRunner};

/// Runs the markdown scenarios in compatibility-tests/ against a roster binary
#[derive(Parser, Debug)]
struct Args {
    /// Path to the roster binary
    runtime: PathBuf,

    /// Glob matching the scenario files
    #[arg(default_value = "compatibility-tests/*.md")]
    compatibility_tests: String,
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("roster-compat error: {err:#}");
            std::process::exit(2);
        }
    }
}

/// Returns whether every enabled scenario passed.
fn run(args: Args) -> anyhow::Result<bool> {
    let runner = TestRunner::from_path(args.runtime);
    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for path in get_compatibility_tests(&args.compatibility_tests)? {
        let content = std::fs::read_to_string(&path)?;
        let test_case = match TestCase::from_string(&content, &path) {
            Ok(test_case) => test_case,
            Err(err) => {
                println!("{} {}: {}", "BROKEN".red(), path.display(), err);
                failed += 1;
                continue;
            }
        };

        if test_case.disabled {
            println!("{} {}", "SKIP".yellow(), test_case.name);
            skipped += 1;
            continue;
        }

        match runner.run(&test_case)? {
            TestResult::Pass => {
                println!("{} {}", "PASS".green(), test_case.name);
                passed += 1;
            }
            TestResult::Fail { expected, actual } => {
                println!("{} {}", "FAIL".red(), test_case.name);
                if let Some(expected) = expected {
                    println!("  expected:\n{}", indent(&expected));
                }
                println!("  actual:\n{}", indent(&actual));
                failed += 1;
            }
        }
    }

    println!(
        "\n{} passed, {} failed, {} skipped",
        passed.to_string().green(),
        failed.to_string().red(),
        skipped
    );
    Ok(failed == 0)
}

fn get_compatibility_tests(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
