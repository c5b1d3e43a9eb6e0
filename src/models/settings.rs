use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime options of the inspection binary.
///
/// Read from an optional `Settings` file in the working directory, then
/// overridden by `ARKHAM_*` environment variables (e.g. `ARKHAM_VERBOSE=true`).
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Payload file used when no path is given on the command line.
    pub payload_path: Option<String>,
    /// Emit DEBUG log lines.
    pub verbose: bool,
    /// Pretty-print the re-encoded JSON.
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            payload_path: None,
            verbose: false,
            pretty: true,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        Settings::build(
            Config::builder()
                .add_source(File::with_name("Settings").required(false))
                .add_source(Environment::with_prefix("ARKHAM").try_parsing(true)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::build(Config::builder()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.pretty);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let source = File::from_str(
            "payload_path = \"attic.json\"\nverbose = true",
            FileFormat::Toml,
        );
        let settings = Settings::build(Config::builder().add_source(source)).unwrap();
        assert_eq!(settings.payload_path.as_deref(), Some("attic.json"));
        assert!(settings.verbose);
        // Untouched keys keep their default
        assert!(settings.pretty);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let source = File::from_str("verbose = [1, 2]", FileFormat::Toml);
        assert!(Settings::build(Config::builder().add_source(source)).is_err());
    }
}
