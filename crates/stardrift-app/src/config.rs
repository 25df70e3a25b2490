//! Loads the simulation config from an optional JSON file plus CLI overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use stardrift_sim::SimConfig;

/// Reads `path` if given (defaults otherwise) and applies the seed override.
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<SimConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimConfig::from_json_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("stardrift-{}-{name}.json", std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_seed_override_wins() {
        let path = temp_config("seed", r#"{"seed": 5, "max_level": 2}"#);
        let config = load_config(Some(&path), Some(99)).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.seed, 99);
        assert_eq!(config.max_level, 2);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = temp_config("bad", r#"{"height": -1.0}"#);
        let err = load_config(Some(&path), None).unwrap_err();
        fs::remove_file(&path).ok();

        let message = format!("{err:#}");
        assert!(message.contains("invalid config"), "got: {message}");
        assert!(message.contains("invalid field bounds"), "got: {message}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("stardrift-does-not-exist.json");
        assert!(load_config(Some(&missing), None).is_err());
    }
}
