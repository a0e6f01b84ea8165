//! Configuration handler for waitlist CLI

use crate::cli::args::*;
use crate::cli::Console;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

pub fn handle_config(
    config: &Config,
    config_path: Option<&Path>,
    args: &ConfigArgs,
    console: &mut Console,
) -> Result<()> {
    if args.show {
        let config_json = serde_json::to_string_pretty(config)?;
        console.line(config_json)?;
    } else if args.init {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Config::default_config_path()?,
        };
        Config::default().save_to_path(&path)?;
        console.line(format!("Configuration initialized at {}", path.display()))?;
    } else if args.validate {
        match config.validate() {
            Ok(_) => console.line("Configuration is valid")?,
            Err(e) => console.line(format!("Configuration validation failed: {}", e))?,
        }
    } else {
        console.line("Use --show, --init, or --validate")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(show: bool, init: bool, validate: bool) -> ConfigArgs {
        ConfigArgs {
            show,
            init,
            validate,
        }
    }

    #[test]
    fn test_show_prints_json() {
        let mut console = Console::buffer();
        handle_config(&Config::default(), None, &args(true, false, false), &mut console).unwrap();
        assert!(console.contents().contains("\"default_list\": \"wait_entries\""));
    }

    #[test]
    fn test_init_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waitlist.json");
        let mut console = Console::buffer();

        handle_config(
            &Config::default(),
            Some(&path),
            &args(false, true, false),
            &mut console,
        )
        .unwrap();

        assert!(path.exists());
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        let mut console = Console::buffer();

        handle_config(&config, None, &args(false, false, true), &mut console).unwrap();

        assert!(console.contents().starts_with("Configuration validation failed"));
    }
}
