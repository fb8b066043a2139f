use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::console::Console;
use crate::error::{PatternError, Result};

// =============================================================================
// Demo configuration (optional patterns.toml)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Seed for the demo's random generator; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Cosmetic delay between random steps, in milliseconds.
    pub pacing_ms: u64,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pacing_ms: 0,
            color: true,
        }
    }
}

impl DemoConfig {
    pub const DEFAULT_PATH: &'static str = "patterns.toml";

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path) {
            Err(PatternError::ConfigRead { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    pub fn console(&self) -> Console {
        Console::stdout(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.pacing(), Duration::ZERO);
        assert!(config.color);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = DemoConfig::parse("seed = 7\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pacing_ms, 0);
        assert!(config.color);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = DemoConfig::parse("speed = 3\n").unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 42\npacing_ms = 15\ncolor = false").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(
            config,
            DemoConfig {
                seed: Some(42),
                pacing_ms: 15,
                color: false,
            }
        );
        assert_eq!(config.pacing(), Duration::from_millis(15));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.toml");

        assert!(matches!(
            DemoConfig::load(&path),
            Err(PatternError::ConfigRead { .. })
        ));
        assert_eq!(DemoConfig::load_or_default(&path).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_invalid_file_is_not_masked() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"not a number\"").unwrap();

        assert!(DemoConfig::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = DemoConfig {
            seed: Some(99),
            ..DemoConfig::default()
        };
        let mut first = config.rng();
        let mut second = config.rng();
        let a: Vec<u32> = (0..5).map(|_| first.gen()).collect();
        let b: Vec<u32> = (0..5).map(|_| second.gen()).collect();

        assert_eq!(a, b);
    }
}
