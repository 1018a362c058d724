use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use log::warn;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::registry::TemplateRegistry;

pub const CHOICE_PROMPT: &str = "Choose a template by number";
pub const BASE_PATH_PROMPT: &str = "Enter the base path for the project";

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("no templates available to choose from")]
    NoTemplates,
    #[error("input ended before a {0} was given")]
    EndOfInput(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

/// The template the user picked and where to put it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Selection {
    pub name: String,
    pub location: PathBuf,
    pub base_path: PathBuf,
}

/// Something that can ask the user for a template and a base path.
pub trait Prompt {
    /// Zero-based index into the registry's display order.
    fn choose(&mut self, registry: &TemplateRegistry) -> Result<usize, SelectionError>;

    fn base_path(&mut self) -> Result<PathBuf, SelectionError>;
}

/// Plain line protocol over any reader/writer pair.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str, what: &'static str) -> Result<String, SelectionError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SelectionError::EndOfInput(what));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn choose(&mut self, registry: &TemplateRegistry) -> Result<usize, SelectionError> {
        writeln!(self.output, "Available templates:")?;
        for (idx, name) in registry.names().enumerate() {
            writeln!(self.output, "{}) {}", idx + 1, name)?;
        }
        loop {
            let answer = self.ask(CHOICE_PROMPT, "template number")?;
            if let Some(index) = parse_choice(&answer, registry.len()) {
                break Ok(index);
            }
            warn!(
                "{} \"{}\" {}",
                style("Sorry,").bold().red(),
                style(&answer).bold().yellow(),
                style(format!("is not a number between 1 and {}", registry.len()))
                    .bold()
                    .red()
            );
        }
    }

    fn base_path(&mut self) -> Result<PathBuf, SelectionError> {
        loop {
            let answer = self.ask(BASE_PATH_PROMPT, "base path")?;
            if !answer.is_empty() {
                break Ok(PathBuf::from(answer));
            }
            warn!("{}", style("The base path cannot be empty").bold().red());
        }
    }
}

/// Arrow-key selection for an attended terminal.
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn choose(&mut self, registry: &TemplateRegistry) -> Result<usize, SelectionError> {
        let items = menu_items(registry);
        let chosen = Select::with_theme(&ColorfulTheme::default())
            .items(&items)
            .with_prompt(format!("🤷 {CHOICE_PROMPT}"))
            .default(0)
            .interact()?;
        Ok(chosen)
    }

    fn base_path(&mut self) -> Result<PathBuf, SelectionError> {
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("🤷 {BASE_PATH_PROMPT}"))
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("the base path cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(PathBuf::from(answer.trim()))
    }
}

/// Numbered like the line prompt's list, with descriptions when present.
fn menu_items(registry: &TemplateRegistry) -> Vec<String> {
    registry
        .names()
        .enumerate()
        .map(|(idx, name)| match registry.description(name) {
            Some(description) => format!("{}) {name} {}", idx + 1, style(description).dim()),
            None => format!("{}) {name}", idx + 1),
        })
        .collect()
}

/// Ask which template to use and where to put it.
pub fn select_template(
    registry: &TemplateRegistry,
    prompt: &mut impl Prompt,
) -> Result<Selection, SelectionError> {
    let (name, location) = choose_template(registry, prompt)?;
    let base_path = prompt.base_path()?;
    Ok(Selection {
        name: name.to_string(),
        location: location.to_path_buf(),
        base_path,
    })
}

/// Only the template half of [`select_template`].
pub fn choose_template<'r>(
    registry: &'r TemplateRegistry,
    prompt: &mut impl Prompt,
) -> Result<(&'r str, &'r Path), SelectionError> {
    if registry.is_empty() {
        return Err(SelectionError::NoTemplates);
    }
    let index = prompt.choose(registry)?;
    registry
        .location_at(index)
        .ok_or(SelectionError::NoTemplates)
}

/// Turn a 1-based answer into a 0-based index, if it is in range.
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}
