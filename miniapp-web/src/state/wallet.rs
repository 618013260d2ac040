//! Wallet state management
//!
//! The wallet runtime owns connection state; the widget mirrors it in a
//! single reactive signal and derives the render branch from it with
//! [`view_state`].

use leptos::prelude::*;

use crate::services::provider::WalletState;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.wallet.with(|state| state.chain_id())
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, chain_id: u64) {
        self.wallet.set(WalletState::Connected { address, chain_id });
    }

    /// Follow a wallet-side chain switch. No-op while disconnected.
    pub fn set_chain_id(&self, chain_id: u64) {
        self.wallet.update(|state| {
            if let WalletState::Connected { chain_id: current, .. } = state {
                *current = chain_id;
            }
        });
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

// ============================================================================
// RENDER BRANCH SELECTION
// ============================================================================

/// The one branch the widget renders for a given wallet state. The
/// variants are mutually exclusive; there is no other branching in the
/// component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// No injected provider: static informational message only.
    NoProvider,
    /// Provider present but not connected: the connect control.
    ProviderAvailable,
    /// Connected on some other network: the switch-chain prompt.
    ConnectedWrongChain { chain_id: u64 },
    /// Connected on the target network: the payment panel.
    ConnectedReady,
}

/// Pure mapping from externally-owned state to the render branch.
pub fn view_state(
    provider_available: bool,
    wallet: &WalletState,
    target_chain_id: u64,
) -> ViewState {
    match wallet {
        WalletState::Connected { chain_id, .. } if *chain_id == target_chain_id => {
            ViewState::ConnectedReady
        }
        WalletState::Connected { chain_id, .. } => ViewState::ConnectedWrongChain {
            chain_id: *chain_id,
        },
        // A connect attempt in progress still renders the connect branch.
        _ if provider_available => ViewState::ProviderAvailable,
        _ => ViewState::NoProvider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: u64 = 10143;

    fn connected(chain_id: u64) -> WalletState {
        WalletState::Connected {
            address: "0x036CbD53842c5426634e7929541eC2318f3dCF7e".to_string(),
            chain_id,
        }
    }

    #[test]
    fn test_disconnected_without_provider() {
        assert_eq!(
            view_state(false, &WalletState::Disconnected, TARGET),
            ViewState::NoProvider
        );
    }

    #[test]
    fn test_disconnected_with_provider() {
        assert_eq!(
            view_state(true, &WalletState::Disconnected, TARGET),
            ViewState::ProviderAvailable
        );
    }

    #[test]
    fn test_connecting_keeps_connect_branch() {
        assert_eq!(
            view_state(true, &WalletState::Connecting, TARGET),
            ViewState::ProviderAvailable
        );
    }

    #[test]
    fn test_connected_wrong_chain() {
        assert_eq!(
            view_state(true, &connected(1), TARGET),
            ViewState::ConnectedWrongChain { chain_id: 1 }
        );
    }

    #[test]
    fn test_connected_ready() {
        assert_eq!(
            view_state(true, &connected(TARGET), TARGET),
            ViewState::ConnectedReady
        );
    }

    #[test]
    fn test_connected_ignores_provider_flag() {
        // Connection state wins even if detection flickers off.
        assert_eq!(
            view_state(false, &connected(TARGET), TARGET),
            ViewState::ConnectedReady
        );
    }
}
