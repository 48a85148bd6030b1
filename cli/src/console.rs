use std::path::{Path, PathBuf};

use roster_runtime::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::render;

const HELP: &str = "\
Type an id to look it up.
  :load <path>  replace the roster
  :rows         show how many rows are loaded
  :sections     list the schedule table
  :help         show this help
  :q            quit";

/// Interactive lookup prompt over a single session.
pub struct Console {
    session: Session,
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Load(&'a str),
    Rows,
    Sections,
    Help,
    Quit,
    Unknown(&'a str),
    Search(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Command::Search(line);
        };

        let (name, argument) = command
            .split_once(char::is_whitespace)
            .map(|(name, argument)| (name, argument.trim()))
            .unwrap_or((command, ""));

        match name {
            "load" if !argument.is_empty() => Command::Load(argument),
            "rows" => Command::Rows,
            "sections" => Command::Sections,
            "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            _ => Command::Unknown(command),
        }
    }
}

impl Console {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn start(mut self, roster_path: Option<PathBuf>) -> anyhow::Result<()> {
        if let Some(path) = roster_path {
            self.report_load(&path);
        }

        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("roster > ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    if !self.run_command(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => break,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    /// Returns false when the console should stop.
    fn run_command(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Command::Load(path) => self.report_load(Path::new(path)),
            Command::Rows => println!("{} rows loaded", self.session.record_count()),
            Command::Sections => print!("{}", render::render_schedules(&self.session.schedules)),
            Command::Help => println!("{}", HELP),
            Command::Quit => return false,
            Command::Unknown(command) => println!("Unknown command: :{}", command),
            Command::Search(query) => {
                if let Some(result) = self.session.search(query) {
                    print!("{}", render::render_result(result));
                }
            }
        }
        true
    }

    fn report_load(&mut self, path: &Path) {
        match self.load(path) {
            Ok(message) => println!("{}", message),
            Err(err) => eprintln!("{err:#}"),
        }
    }

    /// Replaces the roster with the file at `path` and returns the status line.
    fn load(&mut self, path: &Path) -> anyhow::Result<String> {
        let rows = self.session.upload_file(path)?;
        tracing::debug!(path = %path.display(), rows, "console loaded roster");
        Ok(self.session.message().unwrap_or_default().to_string())
    }
}
