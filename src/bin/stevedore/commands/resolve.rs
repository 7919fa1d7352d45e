//! `stevedore resolve` command

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::{BackendChoice, FormatChoice, ResolveArgs};
use stevedore::inspect::{ContainerInspector, Inspect, InspectError, LocalInspector};
use stevedore::locate::NullLocator;
use stevedore::ops;
use stevedore::ops::report::InstallVerbs;
use stevedore::util::config::{Backend, Config, CONFIG_FILE_NAME};
use stevedore::util::diagnostic::{self, suggestions, Diagnostic};
use stevedore::util::shell::Status;
use stevedore::util::Shell;

pub fn execute(args: ResolveArgs, shell: &Shell) -> Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let config = Config::load_or_default(&config_path);

    let spinner = shell.progress_spinner(format!("scanning {}", args.root.display()));
    let seeds = ops::discover_packages(&args.root)?;
    spinner.finish_and_clear();

    if seeds.is_empty() {
        diagnostic::emit(
            &Diagnostic::error("no package archives found")
                .with_location(&args.root)
                .with_suggestion(suggestions::NO_PACKAGES),
            shell.use_color(),
        );
        return Ok(());
    }

    shell.status(
        Status::Resolving,
        format!("{} package archive(s)", seeds.len()),
    );

    let backend = match args.backend {
        Some(BackendChoice::Local) => Backend::Local,
        Some(BackendChoice::Container) => Backend::Container,
        None => config.inspector.backend,
    };
    let image = args.image.unwrap_or_else(|| config.inspector.image.clone());

    let inspector: Box<dyn Inspect> = match backend {
        Backend::Local => Box::new(LocalInspector::new()),
        Backend::Container => {
            match ContainerInspector::new(image, config.inspector.container_prefix.clone()) {
                Ok(inspector) => Box::new(inspector),
                Err(err) => {
                    diagnostic::emit(&err.to_diagnostic(), shell.use_color());
                    bail!("container backend unavailable");
                }
            }
        }
    };

    let locator = NullLocator::new();
    let closure = match ops::resolve_closure(seeds, inspector.as_ref(), &locator, shell) {
        Ok(closure) => closure,
        Err(err) => {
            if let Some(inspect_err) = err.downcast_ref::<InspectError>() {
                diagnostic::emit(&inspect_err.to_diagnostic(), shell.use_color());
                bail!("dependency extraction aborted");
            }
            return Err(err);
        }
    };

    let verbs = InstallVerbs {
        deb: config.install.deb_command.clone(),
        rpm: config.install.rpm_command.clone(),
    };
    let entries = ops::report_entries(&closure, &verbs);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        FormatChoice::Text => ops::report::render_text(&entries, &mut out)?,
        FormatChoice::Json => ops::report::render_json(&entries, &mut out)?,
    }

    shell.status(
        Status::Finished,
        format!("{} package(s) resolved", entries.len()),
    );

    Ok(())
}
