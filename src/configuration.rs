//! src/configuration.rs
use secrecy::SecretBox;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub storage: StorageSettings,
    pub pipeline: PipelineSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct StorageSettings {
    pub aws_region: String,
    pub aws_access_key_id: String,
    pub aws_secret_key: SecretBox<str>,
    pub aws_endpoint_url: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct PipelineSettings {
    pub bucket: String,
    pub source_key: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub chunk_count: usize,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory.");
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("WORDMILL")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
