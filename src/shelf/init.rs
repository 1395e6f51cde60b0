use crate::api::{CmdMessage, ShelfApi};
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct ShelfContext {
    pub api: ShelfApi<FsBackend>,
    pub config: ShelfConfig,
    pub data_file: PathBuf,
    /// Warnings raised while reading the config and loading the collection.
    pub messages: Vec<CmdMessage>,
}

/// Platform config directory, e.g. `~/.config/shelf` on Linux.
/// Falls back to `<cwd>/.shelf` when no home directory can be determined.
pub fn default_config_dir(cwd: &Path) -> PathBuf {
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".shelf"))
}

/// Build the production context: read config, resolve the data file and
/// load the collection. An unreadable config falls back to the defaults
/// with a warning instead of failing the run.
pub fn initialize(
    cwd: &Path,
    config_dir: PathBuf,
    data_file: Option<&Path>,
) -> Result<ShelfContext> {
    let mut messages = Vec::new();
    let config = ShelfConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(config_dir = %config_dir.display(), error = %e, "using default config");
        messages.push(CmdMessage::warning(format!(
            "Unreadable config file ({}). Using defaults.",
            e
        )));
        ShelfConfig::default()
    });
    let data_file = config.resolve_data_file(data_file, cwd);
    debug!(config_dir = %config_dir.display(), data_file = %data_file.display(), "initializing");

    let (api, load_messages) = ShelfApi::open(FsBackend::new(data_file.clone()), config_dir);
    messages.extend(load_messages);

    Ok(ShelfContext {
        api,
        config,
        data_file,
        messages,
    })
}
