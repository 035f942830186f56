// Configuration module: resolves which NLA server to talk to and which user
// the requests are accounted against. Both come from an optional TOML file
// under the user's config directory, with environment variable overrides.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Base URL of the production NLA control API.
const PRODUCTION_URL: &str = "http://nla.ceda.ac.uk/nla_control";

/// Base URL of the test deployment, which uses a local disk store as an
/// analogue for the tape system.
const TEST_URL: &str = "http://0.0.0.0:8001/nla_control";

/// Resolved runtime configuration, threaded into every API call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the NLA control API, without a trailing slash.
    pub base_url: String,
    /// User name sent as the quota owner on every request.
    pub user: String,
}

/// On-disk shape of `<config-dir>/nla/config.toml`. Every key is optional;
/// `test = true` selects the test deployment when no explicit URL is given.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(rename = "server-url")]
    server_url: Option<String>,
    user: Option<String>,
    test: bool,
}

impl Config {
    /// Load the configuration: config file first, then `NLA_SERVER_URL` and
    /// `NLA_USER` overrides, falling back to the production URL and the
    /// login name from `$USER`.
    pub fn load() -> Result<Self> {
        let file = ConfigFile::load(config_path())?;
        Self::resolve(
            file,
            std::env::var("NLA_SERVER_URL").ok(),
            std::env::var("NLA_USER").ok(),
            std::env::var("USER").ok(),
        )
    }

    fn resolve(
        file: ConfigFile,
        env_url: Option<String>,
        env_user: Option<String>,
        login_user: Option<String>,
    ) -> Result<Self> {
        let base_url = env_url.or(file.server_url).unwrap_or_else(|| {
            let url = if file.test { TEST_URL } else { PRODUCTION_URL };
            url.to_string()
        });
        let user = env_user.or(file.user).or(login_user).context(
            "No user name found; set `user` in the config file or the NLA_USER environment variable",
        )?;
        Ok(Config { base_url, user })
    }
}

impl ConfigFile {
    /// A missing config file is fine; a malformed one is an error.
    fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            if path.exists() {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                return toml::from_str(&text)
                    .with_context(|| format!("Failed to parse {}", path.display()));
            }
        }
        Ok(Self::default())
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nla").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ConfigFile {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn defaults_to_production_url_and_login_user() {
        let config =
            Config::resolve(ConfigFile::default(), None, None, Some("fred".into())).unwrap();
        assert_eq!(config.base_url, PRODUCTION_URL);
        assert_eq!(config.user, "fred");
    }

    #[test]
    fn test_toggle_selects_test_url() {
        let file = parse("test = true");
        let config = Config::resolve(file, None, None, Some("fred".into())).unwrap();
        assert_eq!(config.base_url, TEST_URL);
    }

    #[test]
    fn explicit_server_url_beats_test_toggle() {
        let file = parse("server-url = \"http://nla.example.org/nla_control\"\ntest = true");
        let config = Config::resolve(file, None, None, Some("fred".into())).unwrap();
        assert_eq!(config.base_url, "http://nla.example.org/nla_control");
    }

    #[test]
    fn environment_overrides_file() {
        let file = parse("server-url = \"http://file.example.org\"\nuser = \"fileuser\"");
        let config = Config::resolve(
            file,
            Some("http://env.example.org".into()),
            Some("envuser".into()),
            Some("fred".into()),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://env.example.org");
        assert_eq!(config.user, "envuser");
    }

    #[test]
    fn file_user_beats_login_user() {
        let file = parse("user = \"fileuser\"");
        let config = Config::resolve(file, None, None, Some("fred".into())).unwrap();
        assert_eq!(config.user, "fileuser");
    }

    #[test]
    fn missing_user_is_an_error() {
        assert!(Config::resolve(ConfigFile::default(), None, None, None).is_err());
    }
}
