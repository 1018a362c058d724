/// Main file
mod app_config;
mod app_log;
mod args;
mod interactive;
mod materialize;
mod registry;
mod template;
mod template_config;
mod user_parsed_input;
mod utils;

use app_log::log_env_init;
use args::*;
use interactive::{choose_template, select_template, LinePrompt, Prompt, Selection, TermPrompt};
use registry::{list_templates, TemplateRegistry};
use user_parsed_input::UserParsedInput;

use anyhow::{bail, Result};
use console::style;
use log::{debug, error, info, warn};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    let user_parsed_input = UserParsedInput::try_from_args(&args)?;
    let registry = list_templates(user_parsed_input.templates_dir())?;
    if !registry.skipped().is_empty() {
        for e in registry.skipped() {
            debug!("skipped {}", e.path().display());
        }
        warn!(
            "{} template file(s) in {} skipped",
            registry.skipped().len(),
            user_parsed_input.templates_dir().display()
        );
    }

    if user_parsed_input.list_only() {
        print_templates(&registry, user_parsed_input.templates_dir());
        return Ok(());
    }

    if io::stdin().is_terminal() && console::user_attended_stderr() {
        generate(&user_parsed_input, &registry, &mut TermPrompt)?;
    } else {
        let stdin = io::stdin();
        let mut prompt = LinePrompt::new(stdin.lock(), io::stdout());
        generate(&user_parsed_input, &registry, &mut prompt)?;
    }
    Ok(())
}

/// Pick a template, pick a base path, lay the structure out.
/// A template that cannot be resolved is reported and yields `None`.
fn generate(
    user_parsed_input: &UserParsedInput,
    registry: &TemplateRegistry,
    prompt: &mut impl Prompt,
) -> Result<Option<PathBuf>> {
    let selection = match (user_parsed_input.template(), user_parsed_input.destination()) {
        (None, None) => select_template(registry, prompt)?,
        (template, destination) => {
            let (name, location) = match template {
                Some(name) => match registry.get(name) {
                    Some(location) => (name, location),
                    None => bail!(
                        "template `{}` not found in {}",
                        name,
                        user_parsed_input.templates_dir().display()
                    ),
                },
                None => choose_template(registry, prompt)?,
            };
            let base_path = match destination {
                Some(destination) => destination.to_path_buf(),
                None => prompt.base_path()?,
            };
            Selection {
                name: name.to_string(),
                location: location.to_path_buf(),
                base_path,
            }
        }
    };
    let Selection {
        name,
        location,
        base_path,
    } = selection;
    let base_path = utils::expand_home(base_path)?;

    let summary = match template::instantiate(&location, &base_path) {
        Ok(summary) => summary,
        Err(e) => {
            error!(
                "{} `{}`: {}",
                style("Cannot create project from template").bold().red(),
                style(&name).bold(),
                e
            );
            return Ok(None);
        }
    };
    if !summary.is_clean() {
        for e in &summary.errors {
            debug!("skipped {}", e.path().display());
        }
        warn!(
            "{} {}",
            summary.errors.len(),
            style("entries could not be created, see above").bold().yellow()
        );
    }
    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(&base_path.display()).underlined()
    );
    Ok(Some(base_path))
}

fn print_templates(registry: &TemplateRegistry, templates_dir: &Path) {
    if registry.is_empty() {
        warn!("No templates found in {}", templates_dir.display());
        return;
    }
    for (idx, (name, location)) in registry.iter().enumerate() {
        let description = registry
            .description(name)
            .map(|d| format!(" - {d}"))
            .unwrap_or_default();
        info!(
            "{}) {}{} {}",
            idx + 1,
            style(name).bold(),
            description,
            style(format!("({})", location.display())).dim()
        );
    }
}
