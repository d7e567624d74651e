pub mod editor;

use self::editor::Editor;
use crate::{
    error::Result,
    git::RepositoryInfo,
    params::{Field, Parameters},
};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// One line, optionally with a default value.
    Line,
    /// Free text from an editor, or terminal lines up to a blank one.
    Multiline,
    /// One item per prompt until an empty answer, joined with commas.
    List,
}

/// Where a field's default value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSource {
    Hostname,
    ProjectKey,
    RepositorySlug,
    CurrentBranch,
}

impl DefaultSource {
    pub fn resolve(&self, repo: &dyn RepositoryInfo) -> Result<String> {
        match self {
            DefaultSource::Hostname => repo.hostname(),
            DefaultSource::ProjectKey => repo.project_key(),
            DefaultSource::RepositorySlug => repo.repository_slug(),
            DefaultSource::CurrentBranch => repo.current_branch(),
        }
    }
}

pub struct FieldPrompt {
    pub field: Field,
    pub info: &'static str,
    pub mode: InputMode,
    pub default: Option<DefaultSource>,
}

pub const FIELD_PROMPTS: [FieldPrompt; 9] = [
    FieldPrompt {
        field: Field::Hostname,
        info: "[Required] Insert the server hostname",
        mode: InputMode::Line,
        default: Some(DefaultSource::Hostname),
    },
    FieldPrompt {
        field: Field::ApiKey,
        info: "[Required] Insert the server API key",
        mode: InputMode::Line,
        default: None,
    },
    FieldPrompt {
        field: Field::ProjectKey,
        info: "[Required] Insert the project key",
        mode: InputMode::Line,
        default: Some(DefaultSource::ProjectKey),
    },
    FieldPrompt {
        field: Field::RepositorySlug,
        info: "[Required] Insert the repository slug",
        mode: InputMode::Line,
        default: Some(DefaultSource::RepositorySlug),
    },
    FieldPrompt {
        field: Field::Title,
        info: "[Required] Insert the PR title",
        mode: InputMode::Line,
        default: None,
    },
    FieldPrompt {
        field: Field::Description,
        info: "[Optional] Insert the PR description",
        mode: InputMode::Multiline,
        default: None,
    },
    FieldPrompt {
        field: Field::FromBranch,
        info: "[Required] Insert the PR source branch",
        mode: InputMode::Line,
        default: Some(DefaultSource::CurrentBranch),
    },
    FieldPrompt {
        field: Field::ToBranch,
        info: "[Required] Insert the PR destination branch",
        mode: InputMode::Line,
        default: None,
    },
    FieldPrompt {
        field: Field::Reviewers,
        info: "[Optional] Insert the PR reviewers",
        mode: InputMode::List,
        default: None,
    },
];

/// Asks the operator for every field that was not supplied up front.
pub struct Prompter<R, W, E> {
    input: R,
    output: W,
    editor: E,
}

impl<R, W, E> Prompter<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Editor,
{
    pub fn new(input: R, output: W, editor: E) -> Self {
        Prompter {
            input,
            output,
            editor,
        }
    }

    /// Fills the gaps in `params` one field at a time, in declared order.
    /// Empty answers leave the field unset.
    pub fn collect(&mut self, params: &mut Parameters, repo: &dyn RepositoryInfo) -> Result<()> {
        for prompt in FIELD_PROMPTS.iter() {
            if params.contains(prompt.field) {
                continue;
            }

            let value = match prompt.mode {
                InputMode::Line => {
                    let default = prompt.default.and_then(|source| {
                        source
                            .resolve(repo)
                            .map_err(|err| log::debug!("no default for {}: {}", prompt.field, err))
                            .ok()
                    });
                    self.line(prompt.info, default)?
                }
                InputMode::Multiline => self.multiline(prompt.info)?,
                InputMode::List => self.list(prompt.info)?,
            };

            params.set(prompt.field, value);
        }

        Ok(())
    }

    pub fn line(&mut self, info: &str, default: Option<String>) -> Result<String> {
        match default.as_deref().filter(|value| !value.is_empty()) {
            Some(value) => write!(self.output, "{} [default: {}]: ", info, value)?,
            None => write!(self.output, "{}: ", info)?,
        }
        self.output.flush()?;

        let answer = self.read_line()?;

        if answer.is_empty() {
            return Ok(default.unwrap_or_default());
        }

        Ok(answer)
    }

    pub fn multiline(&mut self, info: &str) -> Result<String> {
        writeln!(self.output, "{}: ", info)?;
        self.output.flush()?;

        match self.editor.edit(info) {
            Ok(text) => Ok(text),
            Err(err) => {
                log::debug!("falling back to terminal input: {}", err);
                self.lines()
            }
        }
    }

    pub fn list(&mut self, info: &str) -> Result<String> {
        let mut items: Vec<String> = vec![];

        loop {
            let item = self.line(&format!("{} [{}]", info, items.join(",")), None)?;
            if item.is_empty() {
                break;
            }
            items.push(item);
        }

        Ok(items.join(","))
    }

    // Reads until a blank line or end of input.
    fn lines(&mut self) -> Result<String> {
        let mut buf = vec![];

        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                break;
            }
            buf.push(line.trim_end().to_owned());
        }

        Ok(buf.join("\n"))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let trimmed = line.trim_end_matches(['\n', '\r']);

        Ok(trimmed.to_owned())
    }
}
