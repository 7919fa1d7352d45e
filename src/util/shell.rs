//! Centralized shell output for the CLI.
//!
//! The Shell is an explicitly passed diagnostic sink: components that report
//! progress receive one as an argument instead of writing through ambient
//! global state. Commands never manage colors or alignment directly.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: errors only, no progress
    Quiet,
    /// Default: status messages + progress spinner
    #[default]
    Normal,
    /// --verbose: immediate status lines, no progress spinner
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
///
/// The shell handles all formatting - callers just specify the semantic
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // In-progress statuses (cyan)
    Scanning,
    Inspecting,
    Resolving,

    // Success status (green)
    Finished,

    // Warning status (yellow)
    Warning,

    // Error status (red)
    Error,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Scanning => "Scanning",
            Status::Inspecting => "Inspecting",
            Status::Resolving => "Resolving",
            Status::Finished => "Finished",
            Status::Warning => "Warning",
            Status::Error => "error",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            Status::Scanning | Status::Inspecting | Status::Resolving => "\x1b[1;36m",
            Status::Finished => "\x1b[1;32m",
            Status::Warning => "\x1b[1;33m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Central shell for all CLI output.
#[derive(Debug, Clone)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
    stderr_tty: bool,
}

impl Shell {
    /// Create a new shell with the given verbosity and color choice.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let stderr_tty = io::stderr().is_terminal();
        let use_color = match color {
            ColorChoice::Auto => stderr_tty,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
            stderr_tty,
        }
    }

    /// Create a shell from CLI flags. Quiet takes precedence over verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Shell::new(verbosity, color)
    }

    /// The active verbosity level.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Whether ANSI colors are in use.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print an aligned status line to stderr.
    ///
    /// In quiet mode only errors are printed.
    pub fn status(&self, status: Status, message: impl Display) {
        if self.verbosity == Verbosity::Quiet && status != Status::Error {
            return;
        }

        if self.use_color {
            eprintln!(
                "{}{:>12}\x1b[0m {}",
                status.color_code(),
                status.as_str(),
                message
            );
        } else {
            eprintln!("{:>12} {}", status.as_str(), message);
        }
    }

    /// Print an error status line.
    pub fn error(&self, message: impl Display) {
        self.status(Status::Error, message);
    }

    /// Print a warning status line.
    pub fn warn(&self, message: impl Display) {
        self.status(Status::Warning, message);
    }

    /// Create a spinner for a long-running step.
    ///
    /// Hidden in quiet mode, in verbose mode (status lines replace it), and
    /// when stderr is not a terminal.
    pub fn progress_spinner(&self, message: impl Into<String>) -> ProgressBar {
        if self.verbosity != Verbosity::Normal || !self.stderr_tty {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {wide_msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.into());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::default(), ColorChoice::default())
    }
}
