//! Command-line configuration.

use crate::AppError;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scenario file to replay.
    pub scenario: PathBuf,
    /// Pretty-print each outcome.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scenario: PathBuf::from("scenario.json"),
            pretty: false,
        }
    }
}

impl AppConfig {
    /// Parse `[--pretty] <scenario.json>`, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut scenario = None;
        for arg in args {
            match arg.as_str() {
                "--pretty" => config.pretty = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown flag {}", flag)));
                }
                path if scenario.is_none() => scenario = Some(PathBuf::from(path)),
                extra => return Err(AppError::Usage(format!("unexpected argument {}", extra))),
            }
        }
        config.scenario = scenario
            .ok_or_else(|| AppError::Usage("dragbound [--pretty] <scenario.json>".to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_path() {
        let config = AppConfig::from_args(args(&["drag.json"])).unwrap();
        assert_eq!(config.scenario, PathBuf::from("drag.json"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_parse_pretty() {
        let config = AppConfig::from_args(args(&["--pretty", "drag.json"])).unwrap();
        assert!(config.pretty);
    }

    #[test]
    fn test_missing_path() {
        assert!(matches!(AppConfig::from_args(args(&[])), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(matches!(
            AppConfig::from_args(args(&["--fast", "drag.json"])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            AppConfig::from_args(args(&["a.json", "b.json"])),
            Err(AppError::Usage(_))
        ));
    }
}
