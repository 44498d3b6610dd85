use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "Output";

/// Settings taken from the environment. Command-line arguments override them.
#[derive(Debug, Clone)]
pub struct Config {
    pub target_id: Option<String>,
    pub output_dir: PathBuf,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_id: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: None,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(target_id) = env::var("RELOCATE_TARGET_ID") {
            if target_id.is_empty() {
                eprintln!("Warning: Empty RELOCATE_TARGET_ID value, using the default ID");
            } else {
                config.target_id = Some(target_id);
            }
        }

        if let Ok(output_dir) = env::var("RELOCATE_OUTPUT_DIR") {
            if !output_dir.is_empty() {
                config.output_dir = PathBuf::from(output_dir);
            }
        }

        if let Ok(log_level) = env::var("RELOCATE_LOG") {
            config.log_level = Some(log_level);
        }

        if let Ok(log_format) = env::var("RELOCATE_LOG_FORMAT") {
            config.log_format = match log_format.to_lowercase().as_str() {
                "text" | "plain" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    eprintln!(
                        "Warning: Invalid RELOCATE_LOG_FORMAT value '{}', using default text",
                        log_format
                    );
                    LogFormat::Text
                }
            };
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.target_id, None);
        assert_eq!(config.output_dir, PathBuf::from("Output"));
        assert_eq!(config.log_level, None);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_config_from_env() {
        let keys = [
            "RELOCATE_TARGET_ID",
            "RELOCATE_OUTPUT_DIR",
            "RELOCATE_LOG",
            "RELOCATE_LOG_FORMAT",
        ];
        let saved = keys.map(|key| env::var(key).ok());

        unsafe {
            env::set_var("RELOCATE_TARGET_ID", "submit");
            env::set_var("RELOCATE_OUTPUT_DIR", "/tmp/relocate-out");
            env::set_var("RELOCATE_LOG", "relocate_core=trace");
            env::set_var("RELOCATE_LOG_FORMAT", "JSON");
        }

        let config = Config::from_env();

        assert_eq!(config.target_id.as_deref(), Some("submit"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/relocate-out"));
        assert_eq!(config.log_level.as_deref(), Some("relocate_core=trace"));
        assert_eq!(config.log_format, LogFormat::Json);

        unsafe {
            env::set_var("RELOCATE_LOG_FORMAT", "yaml");
        }
        assert_eq!(Config::from_env().log_format, LogFormat::Text);

        unsafe {
            for (key, value) in keys.iter().zip(saved) {
                match value {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
