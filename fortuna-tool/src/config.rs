use std::path::PathBuf;

use fortuna_core::Coordinate;
use fortuna_nominatim::NominatimClient;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Result language hint passed to the search provider.
    pub language: Option<String>,
    /// Alternative Nominatim instance to query.
    pub nominatim_url: Option<String>,
    /// Pinned position used instead of querying the device location.
    pub home: Option<Coordinate>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("fortuna").join("config.toml"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_default()
}

/// Search settings after merging CLI flags, environment and the config file.
#[derive(Debug, Default)]
pub struct SearchConfig {
    pub language: Option<String>,
    pub base_url: Option<String>,
    pub home: Option<Coordinate>,
}

impl SearchConfig {
    pub fn build_client(&self, user_agent: &str) -> NominatimClient {
        let client = match &self.base_url {
            Some(url) => NominatimClient::with_base_url(user_agent, url.clone()),
            None => NominatimClient::new(user_agent),
        };
        match &self.language {
            Some(language) => client.with_language(language.clone()),
            None => client,
        }
    }
}

pub fn resolve_search_config(cli_lang: Option<String>, cli_url: Option<String>) -> SearchConfig {
    let config = load_config();

    // CLI flag over environment over config file.
    let language = cli_lang.or_else(|| env_var("FORTUNA_LANG")).or(config.language);
    let base_url = cli_url
        .or_else(|| env_var("FORTUNA_NOMINATIM_URL"))
        .or(config.nominatim_url);

    SearchConfig {
        language,
        base_url,
        home: config.home,
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
