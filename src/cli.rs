//! `anthera-site` command line.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{
    Parser,
    Subcommand,
};
use thiserror::Error;

use crate::config::{
    ConfigError,
    ConfigManager,
    MatcherError,
    SiteSettings,
    TranslationFileMatcher,
};
use crate::context::SiteContext;
use crate::i18n::{
    LocaleError,
    OverrideSummary,
    TranslationTable,
    check_coverage,
    merge_workspace_overrides,
};
use crate::store::{
    JsonFileStore,
    MemoryStore,
    PreferenceStore,
    UnavailableStore,
};
use crate::theme::Theme;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Matcher(#[from] MatcherError),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// How a successful command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// `check` found keys missing from a supported locale.
    CoverageIncomplete,
}

#[derive(Debug, Parser)]
#[command(
    name = "anthera-site",
    about = "Inspect translations and stored preferences of the ANTHERA Systems site",
    version
)]
pub struct Cli {
    /// Directory holding `.anthera-site.json` and the translation files.
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Platform color scheme to assume when nothing else decides the theme.
    #[arg(long, global = true)]
    pub ambient: Option<Theme>,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report keys missing from any supported locale.
    Check,

    /// Resolve one translation key.
    Translate {
        key: String,

        /// Locale to resolve in instead of the stored one.
        #[arg(long)]
        locale: Option<String>,
    },

    /// Show or change stored preferences.
    #[command(subcommand)]
    Prefs(PrefsCommand),
}

#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Print the active theme and locale.
    Show,

    /// Switch between dark and light.
    #[command(name = "toggle-theme")]
    ToggleTheme,

    /// Set the theme explicitly.
    #[command(name = "set-theme")]
    SetTheme { theme: Theme },

    /// Switch to the next supported locale.
    #[command(name = "toggle-locale")]
    ToggleLocale,

    /// Set the locale by code (`it`, `en-US`, ...).
    #[command(name = "set-locale")]
    SetLocale { code: String },
}

/// Runs a parsed command, writing its report to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<CommandStatus, CliError> {
    let mut manager = ConfigManager::new();
    manager.load_settings(Some(cli.workspace.clone()))?;
    let settings = manager.get_settings();

    let (table, summary) = load_table(&cli.workspace, settings)?;
    for err in &summary.failed {
        writeln!(out, "skipped: {err}")?;
    }

    match &cli.command {
        Commands::Check => {
            let report = check_coverage(&table, &settings.locale.supported_locales);
            writeln!(out, "translation files: {}", summary.loaded.len())?;
            for (key, locales) in &report.missing {
                let codes: Vec<&str> = locales.iter().map(|locale| locale.code()).collect();
                writeln!(out, "missing {key}: {}", codes.join(", "))?;
            }
            if report.is_complete() {
                writeln!(out, "all {} keys translated", table.len(settings.locale.default_locale))?;
                Ok(CommandStatus::Success)
            } else {
                writeln!(out, "{} keys incomplete", report.missing.len())?;
                Ok(CommandStatus::CoverageIncomplete)
            }
        }
        Commands::Translate { key, locale } => {
            let store: Arc<dyn PreferenceStore> = match locale {
                Some(_) => Arc::new(MemoryStore::new()),
                None => open_store(&manager),
            };
            let mut context = SiteContext::with_table(settings, store, &cli.ambient, table);
            if let Some(code) = locale {
                context.set_locale_code(code)?;
            }
            writeln!(out, "{}", context.translate(key))?;
            Ok(CommandStatus::Success)
        }
        Commands::Prefs(command) => {
            let mut context =
                SiteContext::with_table(settings, open_store(&manager), &cli.ambient, table);
            match command {
                PrefsCommand::Show => {}
                PrefsCommand::ToggleTheme => {
                    context.toggle_theme();
                }
                PrefsCommand::SetTheme { theme } => {
                    context.set_theme(*theme);
                }
                PrefsCommand::ToggleLocale => {
                    context.toggle_locale();
                }
                PrefsCommand::SetLocale { code } => {
                    context.set_locale_code(code)?;
                }
            }
            writeln!(out, "theme: {} ({:?})", context.current_theme(), context.theme().source())?;
            writeln!(out, "locale: {}", context.current_locale())?;
            Ok(CommandStatus::Success)
        }
    }
}

/// Built-in table with the workspace overrides merged in.
fn load_table(
    workspace: &std::path::Path,
    settings: &SiteSettings,
) -> Result<(TranslationTable, OverrideSummary), CliError> {
    let matcher = TranslationFileMatcher::new(workspace.to_path_buf(), &settings.translation_files)?;
    let mut table = TranslationTable::builtin();
    let summary = merge_workspace_overrides(&mut table, &matcher, &settings.key_separator);
    Ok((table, summary))
}

/// Preference file from the settings, or a store that keeps nothing when
/// storage is disabled.
fn open_store(manager: &ConfigManager) -> Arc<dyn PreferenceStore> {
    match manager.storage_path() {
        Some(path) => Arc::new(JsonFileStore::open(path)),
        None => Arc::new(UnavailableStore),
    }
}
