// SPDX-License-Identifier: MPL-2.0
//! Where the gallery looks for `settings.toml`.
//!
//! The first of these wins: an explicit path handed to
//! [`get_app_config_dir_with_override`], the `--config-dir` flag recorded by
//! [`init_cli_overrides`], a non-empty `SMART_GALLERY_CONFIG_DIR`, and finally
//! a `SmartGallery` folder in the platform config directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Folder created under the platform config directory.
const APP_NAME: &str = "SmartGallery";

/// Points the gallery at another settings folder, e.g. per server.
pub const ENV_CONFIG_DIR: &str = "SMART_GALLERY_CONFIG_DIR";

/// `--config-dir`, recorded before the first config load.
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Later calls are ignored with a warning.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Folder holding `settings.toml`.
///
/// `None` when no flag or variable is set and the platform has no config
/// directory; [`super::config::load`] then runs on defaults.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`], with `override_path` taking precedence
/// over the flag and the variable.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_config_dir)
        .or_else(get_env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below share SMART_GALLERY_CONFIG_DIR.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_folder_is_named_after_the_gallery() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME), "unexpected settings folder {path:?}");
        }
    }

    #[test]
    fn variable_points_at_another_settings_folder() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/srv/gallery-a");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/srv/gallery-a")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_variable_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        assert_eq!(get_env_config_dir(), None);
        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn explicit_path_beats_the_variable() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/srv/gallery-a");

        let explicit = PathBuf::from("/tmp/gallery-test");
        assert_eq!(
            get_app_config_dir_with_override(Some(explicit.clone())),
            Some(explicit)
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
