//! texmgr - compile, watch, clean and scaffold LaTeX documents
//!
//! Usage: texmgr [--flags] [file list]
//!
//! Without flags every document is compiled (tex, bibtex, tex, tex) and its
//! build files are removed afterwards.

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use texmgr::application::TemplateKind;
use texmgr::presentation::Cli;
use texmgr::{Config, Document};

use commands::App;
use ui::context::UiContext;
use ui::output::Output;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let fallback = UiContext::new(
        cli.json,
        cli.print_commands(),
        cli.silent,
        cli.color,
        &Config::default(),
    );

    if cli.version {
        println!("{}", ui::views::version::render_version(fallback.color));
        return ExitCode::SUCCESS;
    }

    let app = match load_app(&cli) {
        Ok(app) => app,
        Err(err) => {
            ui::error::print_error(&err, fallback.json, fallback.color);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &app) {
        Ok(code) => code,
        Err(err) => {
            let ui = app.output.ui();
            ui::error::print_error(&err, ui.json, ui.color);
            ExitCode::FAILURE
        }
    }
}

fn load_app(cli: &Cli) -> Result<App> {
    let cwd = std::env::current_dir().context("could not determine the current directory")?;
    let (config, warnings) = Config::discover(cli.config.as_deref(), &cwd)?;

    let ui = UiContext::new(
        cli.json,
        cli.print_commands(),
        cli.silent,
        cli.color,
        &config,
    );
    let output = Output::new(ui);
    output.config_warnings(&warnings);

    Ok(App::new(config, output, cli.dry_run))
}

fn run(cli: &Cli, app: &App) -> Result<ExitCode> {
    if cli.init {
        return commands::init::cmd_init(app, &cli.files, TemplateKind::Document, cli.open_tex);
    }
    if cli.init_beamer {
        return commands::init::cmd_init(app, &cli.files, TemplateKind::Beamer, cli.open_tex);
    }

    let documents = if cli.files.is_empty() {
        let cwd = std::env::current_dir().context("could not determine the current directory")?;
        commands::discover_documents(&cwd)?
    } else {
        cli.files.iter().map(Document::new).collect()
    };

    if cli.clean {
        commands::clean::cmd_clean(app, &documents)?;
        return Ok(ExitCode::SUCCESS);
    }
    if cli.open_tex {
        commands::open::cmd_open_tex(app, &documents)?;
        return Ok(ExitCode::SUCCESS);
    }
    if cli.find_deps {
        commands::deps::cmd_find_deps(app, &documents)?;
        return Ok(ExitCode::SUCCESS);
    }

    commands::build::cmd_build(app, &documents, cli.skip_clean())?;

    if cli.open_pdf {
        commands::open::cmd_open_pdf(app, &documents)?;
    }
    if cli.watch_mode() {
        commands::watch::cmd_watch(app, &documents, cli.clean_last)?;
    }
    Ok(ExitCode::SUCCESS)
}
