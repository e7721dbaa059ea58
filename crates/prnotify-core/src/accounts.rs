//! Login to chat account mapping.

use std::{collections::HashMap, path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("Could not read chat accounts file '{}': {}", path, source)]
    IoError {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed chat accounts file '{}': {}", path, source)]
    JsonError {
        path: String,
        source: serde_json::Error,
    },
}

/// Source-control login to chat account id mapping.
///
/// Loaded once per invocation. Logins without an entry are rendered as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatAccounts {
    accounts: HashMap<String, String>,
}

impl ChatAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load accounts from a JSON object file (`{"login": "account_id"}`).
    ///
    /// An empty path gives an empty mapping.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AccountsError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(Self::new());
        }

        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| AccountsError::IoError {
            path: display.clone(),
            source: e,
        })?;

        Self::from_json(&content).map_err(|e| AccountsError::JsonError {
            path: display,
            source: e,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            accounts: serde_json::from_str(content)?,
        })
    }

    /// Chat account id for a login.
    pub fn get(&self, login: &str) -> Option<&str> {
        self.accounts.get(login).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl From<HashMap<String, String>> for ChatAccounts {
    fn from(accounts: HashMap<String, String>) -> Self {
        Self { accounts }
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accounts() {
        let accounts = ChatAccounts::from_json(r#"{"alice": "U01", "bob": "U02"}"#).unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts.get("alice"), Some("U01"));
        assert_eq!(accounts.get("carol"), None);
    }

    #[test]
    fn parse_malformed_accounts() {
        assert!(ChatAccounts::from_json(r#"["alice"]"#).is_err());
        assert!(ChatAccounts::from_json(r#"{"alice": 1}"#).is_err());
    }

    #[test]
    fn empty_path() {
        assert!(ChatAccounts::from_path("").unwrap().is_empty());
    }

    #[test]
    fn missing_path() {
        assert!(matches!(
            ChatAccounts::from_path("/nonexistent/accounts.json"),
            Err(AccountsError::IoError { path, .. }) if path == "/nonexistent/accounts.json"
        ));
    }

    #[test]
    fn from_map() {
        let accounts: ChatAccounts = hashmap! {
            "alice".to_string() => "U01".to_string()
        }
        .into();

        assert_eq!(accounts.get("alice"), Some("U01"));
    }
}
