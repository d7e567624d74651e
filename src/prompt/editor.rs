use crate::error::{Error, Result};
use std::{
    env, fs,
    io::{self, IsTerminal, Write},
    process::Command,
};

const DEFAULT_EDITOR: &str = "vi";

pub trait Editor {
    /// Lets the operator write free text. `info` describes what is expected.
    fn edit(&self, info: &str) -> Result<String>;
}

/// Runs `$VISUAL`, `$EDITOR` or `vi` on a temporary file.
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn from_env() -> Self {
        let command = ["VISUAL", "EDITOR"]
            .into_iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_owned());

        ExternalEditor { command }
    }

    fn command_line(&self) -> Result<(String, Vec<String>)> {
        let mut words = shell_words::split(&self.command)
            .map_err(|err| Error::Editor(format!("cannot parse '{}': {}", self.command, err)))?;

        if words.is_empty() {
            return Err(Error::Editor("empty editor command".to_owned()));
        }

        let program = words.remove(0);
        Ok((program, words))
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, info: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            return Err(Error::Editor("stdin is not a terminal".to_owned()));
        }

        let (program, args) = self.command_line()?;
        let program = which::which(&program)
            .map_err(|err| Error::Editor(format!("{}: {}", program, err)))?;

        // removed on drop, whatever the editor does
        let mut file = tempfile::Builder::new()
            .prefix("open-pr-")
            .suffix(".md")
            .tempfile()?;
        let seed = seed(info);
        file.write_all(seed.as_bytes())?;
        file.flush()?;

        log::debug!("opening {} {}", program.display(), file.path().display());
        let status = Command::new(&program)
            .args(&args)
            .arg(file.path())
            .status()?;

        if !status.success() {
            return Err(Error::Editor(format!("editor exited with {}", status)));
        }

        let content = fs::read_to_string(file.path())?;

        Ok(strip_seed(&content, &seed))
    }
}

fn seed(info: &str) -> String {
    format!(
        "# {}\n# These two lines are removed. Leave the rest empty to skip.\n",
        info
    )
}

// Only the leading seed is removed; the rest is the operator's text.
fn strip_seed(content: &str, seed: &str) -> String {
    content
        .strip_prefix(seed)
        .unwrap_or(content)
        .trim()
        .to_owned()
}
