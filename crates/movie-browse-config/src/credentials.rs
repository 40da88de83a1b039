use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::ConfigError;

#[derive(Debug, Serialize, Deserialize, Default)]
struct CredentialsData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Secrets live in credentials.toml, apart from the regular config.
pub struct CredentialStore {
    path: PathBuf,
    credentials: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            credentials: HashMap::new(),
        }
    }

    pub fn load(&mut self) -> Result<(), ConfigError> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let creds_data: CredentialsData = toml::from_str(&content)?;
            self.credentials = creds_data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let creds_data = CredentialsData {
            data: self.credentials.clone(),
        };
        let content = toml::to_string_pretty(&creds_data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.credentials.get(key)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.credentials.insert(key, value);
    }

    pub fn clear(&mut self) -> Result<(), ConfigError> {
        self.credentials.clear();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn get_omdb_api_key(&self) -> Option<&String> {
        self.get("omdb_api_key")
    }

    pub fn set_omdb_api_key(&mut self, key: String) {
        self.set("omdb_api_key".to_string(), key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");

        let mut store = CredentialStore::new(path.clone());
        store.load().unwrap();
        assert!(store.get_omdb_api_key().is_none());

        store.set_omdb_api_key("abc123".to_string());
        store.save().unwrap();

        let mut reloaded = CredentialStore::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_omdb_api_key().map(String::as_str), Some("abc123"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");

        let mut store = CredentialStore::new(path.clone());
        store.set_omdb_api_key("abc123".to_string());
        store.save().unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.get_omdb_api_key().is_none());
    }
}
