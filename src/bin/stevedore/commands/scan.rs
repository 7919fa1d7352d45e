//! `stevedore scan` command

use anyhow::Result;

use crate::cli::ScanArgs;
use stevedore::ops;
use stevedore::util::diagnostic::{self, suggestions, Diagnostic};
use stevedore::util::shell::Status;
use stevedore::util::Shell;

pub fn execute(args: ScanArgs, shell: &Shell) -> Result<()> {
    let found = ops::discover_packages(&args.root)?;

    if found.is_empty() {
        diagnostic::emit(
            &Diagnostic::warning("no package archives found")
                .with_location(&args.root)
                .with_suggestion(suggestions::NO_PACKAGES),
            shell.use_color(),
        );
        return Ok(());
    }

    for pkg in &found {
        println!("{}", pkg);
    }

    shell.status(Status::Finished, format!("{} archive(s)", found.len()));

    Ok(())
}
