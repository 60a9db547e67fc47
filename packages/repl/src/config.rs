//! Runtime configuration for the shell binary.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use folio_tree::TreeStore;

/// Environment variable that overrides the detected edit mode.
pub const EDIT_MODE_ENV: &str = "FOLIO_EDIT_MODE";

/// folio - browse a portfolio through a tiny shell
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Load the tree from a JSON file instead of the built-in portfolio
    #[arg(long, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Force vi editing mode
    #[arg(long, conflicts_with = "emacs")]
    pub vi: bool,

    /// Force emacs editing mode
    #[arg(long)]
    pub emacs: bool,

    /// Disable the prompt glitch effect
    #[arg(long)]
    pub no_glitch: bool,

    /// Seed for listing timestamps and sizes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Diagnostic log level (written to stderr)
    #[arg(long, short, default_value = "silent", value_enum)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Line editing keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Vi,
    Emacs,
}

impl EditMode {
    /// Guess the user's preferred mode from their environment.
    pub fn detect() -> Self {
        if should_use_vi_mode() {
            EditMode::Vi
        } else {
            EditMode::Emacs
        }
    }
}

/// Bounds for the random pause between prompt glitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlitchSchedule {
    pub min: Duration,
    pub max: Duration,
}

impl Default for GlitchSchedule {
    fn default() -> Self {
        Self {
            min: Duration::from_secs(5),
            max: Duration::from_secs(10),
        }
    }
}

/// Everything the shell needs to start.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub tree_file: Option<PathBuf>,
    /// `None` means detect from the environment.
    pub edit_mode: Option<EditMode>,
    /// `None` disables the glitch timer.
    pub glitch: Option<GlitchSchedule>,
    pub seed: Option<u64>,
    pub log_level: LogLevel,
}

impl ReplConfig {
    /// The tree to browse: the configured JSON file, or the built-in portfolio.
    pub fn load_tree(&self) -> Result<Arc<TreeStore>, folio_tree::Error> {
        match &self.tree_file {
            Some(path) => Ok(Arc::new(TreeStore::from_json_file(path)?)),
            None => Ok(TreeStore::portfolio()),
        }
    }

    pub fn resolved_edit_mode(&self) -> EditMode {
        self.edit_mode.unwrap_or_else(EditMode::detect)
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            tree_file: None,
            edit_mode: None,
            glitch: Some(GlitchSchedule::default()),
            seed: None,
            log_level: LogLevel::default(),
        }
    }
}

impl From<Args> for ReplConfig {
    fn from(args: Args) -> Self {
        let edit_mode = if args.vi {
            Some(EditMode::Vi)
        } else if args.emacs {
            Some(EditMode::Emacs)
        } else {
            None
        };

        Self {
            tree_file: args.tree,
            edit_mode,
            glitch: (!args.no_glitch).then(GlitchSchedule::default),
            seed: args.seed,
            log_level: args.log_level,
        }
    }
}

/// Check if vi mode should be used based on environment configuration.
fn should_use_vi_mode() -> bool {
    // Explicit override wins
    if let Ok(mode) = std::env::var(EDIT_MODE_ENV) {
        return is_vi_name(&mode);
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = std::env::var(var) {
            let editor = editor.to_lowercase();
            if editor.contains("vim") || editor == "vi" {
                return true;
            }
        }
    }

    check_inputrc_vi_mode()
}

fn is_vi_name(mode: &str) -> bool {
    let mode = mode.to_lowercase();
    mode == "vi" || mode == "vim"
}

/// Check .inputrc for vi mode setting.
fn check_inputrc_vi_mode() -> bool {
    let inputrc_paths = [
        std::env::var("INPUTRC").ok().map(PathBuf::from),
        dirs::home_dir().map(|p| p.join(".inputrc")),
        Some(PathBuf::from("/etc/inputrc")),
    ];

    inputrc_paths
        .into_iter()
        .flatten()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .any(|content| inputrc_selects_vi(&content))
}

fn inputrc_selects_vi(content: &str) -> bool {
    content.lines().map(str::trim).any(|line| {
        line.starts_with("set") && line.contains("editing-mode") && line.contains("vi")
    })
}
