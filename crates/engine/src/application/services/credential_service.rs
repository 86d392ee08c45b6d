//! Credential gate - tracks whether a usable API credential is selected.
//!
//! Selection is optimistic: the gate never validates the credential itself.
//! Validity is only proven when a generation attempt succeeds, and disproven
//! when the remote service rejects with an authentication-class failure,
//! which demotes the state and forces re-selection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::infrastructure::ports::{CredentialError, CredentialHostPort};

/// Gate over the hosting environment's credential selector.
pub struct CredentialService {
    host: Arc<dyn CredentialHostPort>,
    selected: AtomicBool,
}

impl CredentialService {
    pub fn new(host: Arc<dyn CredentialHostPort>) -> Self {
        Self {
            host,
            selected: AtomicBool::new(false),
        }
    }

    /// Query the host for an already-selected credential.
    pub async fn refresh(&self) -> Result<bool, CredentialError> {
        let selected = self.host.has_selected_credential().await?;
        self.selected.store(selected, Ordering::SeqCst);
        Ok(selected)
    }

    /// Run the interactive selection flow, then re-query the host.
    ///
    /// The dialog reports nothing beyond "completed" (the user may have
    /// cancelled it), so the outcome is taken from a fresh host query
    /// rather than assumed.
    pub async fn request_credential(&self) -> Result<bool, CredentialError> {
        self.host.open_select_credential().await?;
        self.refresh().await
    }

    pub fn is_selected(&self) -> bool {
        self.selected.load(Ordering::SeqCst)
    }

    /// Drop back to not-selected after an authentication-class failure.
    pub fn demote(&self) {
        tracing::warn!("Credential demoted; re-selection required");
        self.selected.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCredentialHostPort;

    #[tokio::test]
    async fn refresh_reflects_host_state() {
        let mut host = MockCredentialHostPort::new();
        host.expect_has_selected_credential().returning(|| Ok(true));

        let service = CredentialService::new(Arc::new(host));
        assert!(!service.is_selected());
        assert!(service.refresh().await.expect("query"));
        assert!(service.is_selected());
    }

    #[tokio::test]
    async fn request_credential_requeries_instead_of_assuming_success() {
        let mut host = MockCredentialHostPort::new();
        host.expect_open_select_credential()
            .times(1)
            .returning(|| Ok(()));
        // Dialog completed, but the user cancelled: the host still reports
        // no selection, and the gate must not flip to selected.
        host.expect_has_selected_credential().returning(|| Ok(false));

        let service = CredentialService::new(Arc::new(host));
        assert!(!service.request_credential().await.expect("flow"));
        assert!(!service.is_selected());
    }

    #[tokio::test]
    async fn demote_clears_selection() {
        let mut host = MockCredentialHostPort::new();
        host.expect_has_selected_credential().returning(|| Ok(true));

        let service = CredentialService::new(Arc::new(host));
        service.refresh().await.expect("query");
        assert!(service.is_selected());

        service.demote();
        assert!(!service.is_selected());
    }
}
