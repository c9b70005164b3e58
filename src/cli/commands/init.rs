use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into the current directory.
pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)?;

    Ok(finish(
        CommandSummary::Init(InitSummary { created: true }),
        Vec::new(),
        0,
        0,
        0,
    ))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::config::load_config;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempdir().unwrap();
        let result = init_in(dir.path()).unwrap();
        assert!(matches!(
            result.summary,
            CommandSummary::Init(InitSummary { created: true })
        ));

        let loaded = load_config(dir.path()).unwrap();
        assert_eq!(loaded.path, Some(dir.path().join(CONFIG_FILE_NAME)));
        assert_eq!(loaded.config.primary_locale, "en");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let err = init_in(dir.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
