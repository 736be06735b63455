use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Seconds allowed per request to the recipe source
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: forkify_home().join("config.yml"),
            api_url: default_api_url(),
            storage_path: default_storage_path(),
            results_per_page: default_results_per_page(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn forkify_home() -> PathBuf {
    match std::env::var("FORKIFY_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".forkify"),
    }
}

fn default_api_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_storage_path() -> String {
    forkify_home().join("storage.json").display().to_string()
}

fn default_results_per_page() -> usize {
    10
}

fn default_request_timeout() -> u64 {
    10
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Config, anyhow::Error> {
        let config_path = match path {
            Some(p) => PathBuf::new().join(p),
            None => forkify_home().join("config.yml"),
        };

        match std::fs::File::open(&config_path) {
            Ok(file) => {
                info!("Open config from {:?}", config_path);
                let mut cfg: Self = serde_yml::from_reader(file)?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                cfg.save()?;
                info!("Write default config at {:?}", cfg.path);
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::temp_path;

    #[test]
    fn test_open_writes_defaults_when_missing() {
        let path = temp_path("config.yml");

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.results_per_page, 10);
        assert_eq!(cfg.request_timeout, 10);
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_open_fills_missing_fields() {
        let path = temp_path("config.yml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "api_url: http://localhost:8080/api\nresults_per_page: 5\n").unwrap();

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.api_url, "http://localhost:8080/api");
        assert_eq!(cfg.results_per_page, 5);
        assert_eq!(cfg.request_timeout, 10);
        assert_eq!(cfg.path(), path.as_path());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
