use std::path::Path;
use std::path::PathBuf;

/// A markdown scenario from `compatibility-tests/`.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub roster: String,
    pub input: String,
    pub result: String,
    pub path: PathBuf,
    pub disabled: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum TestCaseError {
    #[error("scenario has no `# ` title line")]
    MissingTitle,
    #[error("scenario has no ```{0} block")]
    MissingBlock(&'static str),
}

fn parse_name(content: &str) -> Result<String, TestCaseError> {
    content
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("# "))
        .map(|name| name.trim().to_string())
        .ok_or(TestCaseError::MissingTitle)
}

fn parse_markdown_block(content: &str, language: &'static str) -> Result<String, TestCaseError> {
    let fence = format!("```{}\n", language);
    let (_, rest) = content
        .split_once(&fence)
        .ok_or(TestCaseError::MissingBlock(language))?;
    let (block, _) = rest
        .split_once("```")
        .ok_or(TestCaseError::MissingBlock(language))?;
    Ok(block.trim().to_string())
}

impl TestCase {
    pub fn from_string<A, B>(content: A, path: B) -> Result<Self, TestCaseError>
    where
        A: AsRef<str>,
        B: AsRef<Path>,
    {
        let content = content.as_ref();
        let name = parse_name(content)?;
        let roster = parse_markdown_block(content, "csv")?;
        let input = parse_markdown_block(content, "input")?;
        let result = parse_markdown_block(content, "result")?;
        let disabled = content.trim().ends_with("!!! disabled");

        Ok(TestCase {
            name,
            roster,
            input,
            result,
            path: path.as_ref().into(),
            disabled,
        })
    }

    /// Queries in the order they are typed, one per input line.
    pub fn queries(&self) -> Vec<&str> {
        if self.input.is_empty() {
            return Vec::new();
        }
        self.input.lines().map(str::trim).collect()
    }
}
