use std::path::PathBuf;

use clap::Parser;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

/// Scaffold a project's directories and files from a YAML template.
///
/// Without flags, the templates found in `./templates` are listed and the
/// template and base path are asked for interactively.
#[derive(Parser, Clone, Debug, Default)]
#[command(name = "mktree", version, about, next_line_help(false), styles(style::STYLES))]
pub struct AppArgs {
    /// Directory holding the `.yaml` / `.yml` template documents [default: templates]
    #[arg(long = "templates", short = 't', value_name = "DIR", help_heading = heading::TEMPLATE_SELECTION)]
    pub templates_dir: Option<PathBuf>,

    /// Use the template with this display name instead of asking
    #[arg(long, value_name = "NAME", help_heading = heading::TEMPLATE_SELECTION)]
    pub template: Option<String>,

    /// List the discovered templates and exit
    #[arg(long, short, action, conflicts_with_all = ["template", "destination"], help_heading = heading::TEMPLATE_SELECTION)]
    pub list: bool,

    /// Create the project structure under this path instead of asking
    #[arg(long, short, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Configuration file to use instead of searching for `.mktree.toml`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    AppArgs::parse()
}
