//! Environment-backed credential host.
//!
//! Stands in for the hosting platform's interactive key selector when the
//! engine runs headless: a credential counts as selected when the configured
//! API key is non-empty. The interactive flow has nothing to open here, so
//! it only logs where the key must come from.

use async_trait::async_trait;

use crate::infrastructure::ports::{CredentialError, CredentialHostPort};

pub struct EnvCredentialHost {
    api_key: String,
}

impl EnvCredentialHost {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CredentialHostPort for EnvCredentialHost {
    async fn has_selected_credential(&self) -> Result<bool, CredentialError> {
        Ok(!self.api_key.trim().is_empty())
    }

    async fn open_select_credential(&self) -> Result<(), CredentialError> {
        tracing::info!("No interactive key selector in headless mode; set PALEOCAM_API_KEY");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_key_is_not_selected() {
        let host = EnvCredentialHost::new("  ");
        assert!(!host.has_selected_credential().await.expect("query"));
    }

    #[tokio::test]
    async fn configured_key_is_selected() {
        let host = EnvCredentialHost::new("sk-test");
        assert!(host.has_selected_credential().await.expect("query"));
    }
}
