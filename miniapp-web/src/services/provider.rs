//! Injected Ethereum Provider Interop via wasm-bindgen
//!
//! The mini-app host injects an EIP-1193 provider at `window.ethereum`.
//! Everything the wallet actually does (key management, signing,
//! broadcast, chain switching) happens behind that object; this module
//! only detects it and forwards the handful of requests the widget
//! makes.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use shared::paylink::PaymentRequest;

// ============================================================================
// PROVIDER DETECTION AND REQUESTS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function detectEthProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function providerConnect() {
    const provider = window.ethereum;
    if (!provider) {
        throw new Error('No Ethereum provider injected by the host');
    }

    const accounts = await provider.request({ method: 'eth_requestAccounts' });
    if (!accounts || accounts.length === 0) {
        throw new Error('Wallet returned no accounts');
    }

    const chainIdHex = await provider.request({ method: 'eth_chainId' });
    return {
        address: accounts[0],
        chainId: parseInt(chainIdHex, 16),
    };
}

export async function providerDisconnect() {
    const provider = window.ethereum;
    if (!provider) {
        return;
    }

    // Not every host implements permission revocation; connection state
    // is cleared on the Rust side either way.
    try {
        await provider.request({
            method: 'wallet_revokePermissions',
            params: [{ eth_accounts: {} }],
        });
    } catch (e) {
        // ignored, disconnect is idempotent for the caller
    }
}

export async function providerSwitchChain(chainIdHex) {
    const provider = window.ethereum;
    if (!provider) {
        throw new Error('No Ethereum provider injected by the host');
    }

    await provider.request({
        method: 'wallet_switchEthereumChain',
        params: [{ chainId: chainIdHex }],
    });
}

export async function providerSendTransaction(params) {
    const provider = window.ethereum;
    if (!provider) {
        throw new Error('No Ethereum provider injected by the host');
    }

    return await provider.request({
        method: 'eth_sendTransaction',
        params: [params],
    });
}

export function onChainChanged(callback) {
    const provider = window.ethereum;
    if (!provider || typeof provider.on !== 'function') {
        return;
    }
    provider.on('chainChanged', (chainIdHex) => {
        callback(parseInt(chainIdHex, 16));
    });
}
")]
extern "C" {
    /// Whether the host injected an Ethereum provider
    pub fn detectEthProvider() -> bool;

    /// Request accounts and the active chain id from the provider
    #[wasm_bindgen(catch)]
    pub async fn providerConnect() -> Result<JsValue, JsValue>;

    /// Best-effort permission revocation; never throws
    pub async fn providerDisconnect();

    /// Ask the wallet to switch the active chain
    #[wasm_bindgen(catch)]
    pub async fn providerSwitchChain(chain_id_hex: &str) -> Result<(), JsValue>;

    /// Submit one transaction; resolves to the transaction hash
    #[wasm_bindgen(catch)]
    pub async fn providerSendTransaction(params: JsValue) -> Result<JsValue, JsValue>;

    /// Register a chain-changed listener on the provider
    pub fn onChainChanged(callback: &js_sys::Function);
}

// ============================================================================
// WALLET STATE
// ============================================================================

/// Wallet connection state as reported by the host provider. The wallet
/// runtime owns this; the widget only mirrors it for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String, chain_id: u64 },
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            WalletState::Connected { chain_id, .. } => Some(*chain_id),
            _ => None,
        }
    }
}

// ============================================================================
// PROVIDER SERVICE
// ============================================================================

/// Whether the host injected a provider. Level-triggered: re-read on
/// every render rather than cached.
pub fn is_eth_provider_available() -> bool {
    detectEthProvider()
}

/// Connect through the host's provider. Returns the first account and
/// the active chain id.
pub async fn connect_wallet() -> Result<(String, u64), String> {
    let result = providerConnect().await.map_err(js_error_message)?;

    let address = js_sys::Reflect::get(&result, &JsValue::from_str("address"))
        .map_err(|_| "Failed to get address from provider result".to_string())?
        .as_string()
        .ok_or_else(|| "Provider returned a non-string address".to_string())?;

    let chain_id = js_sys::Reflect::get(&result, &JsValue::from_str("chainId"))
        .map_err(|_| "Failed to get chainId from provider result".to_string())?
        .as_f64()
        .ok_or_else(|| "Provider returned a non-numeric chain id".to_string())?
        as u64;

    Ok((address, chain_id))
}

/// Disconnect from the provider. Idempotent from the caller's
/// perspective; revocation failures are swallowed on the JS side.
pub async fn disconnect_wallet() {
    providerDisconnect().await;
}

/// Request a switch to `chain_id`. The wallet negotiates the switch; a
/// rejection comes back as the provider's error message.
pub async fn switch_chain(chain_id: u64) -> Result<(), String> {
    providerSwitchChain(&format!("{:#x}", chain_id))
        .await
        .map_err(js_error_message)
}

/// Submit exactly one payment transaction from `from`. Resolves to the
/// transaction hash, or the signing/broadcast error message.
pub async fn send_payment(from: &str, request: &PaymentRequest) -> Result<String, String> {
    // Plain JS object, not the serde-wasm-bindgen Map default.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let params = request
        .to_call_params(from)
        .serialize(&serializer)
        .map_err(|e| e.to_string())?;

    let hash = providerSendTransaction(params)
        .await
        .map_err(js_error_message)?;

    hash.as_string()
        .ok_or_else(|| "Provider returned a non-string transaction hash".to_string())
}

/// Subscribe to wallet-side chain switches. The closure is leaked; the
/// widget lives for the page's lifetime.
pub fn subscribe_chain_changed(mut on_change: impl FnMut(u64) + 'static) {
    let callback = Closure::<dyn FnMut(f64)>::new(move |chain_id: f64| {
        on_change(chain_id as u64);
    });
    onChainChanged(callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Extract a human-readable message from a provider rejection. EIP-1193
/// errors arrive as objects with a `message` field.
fn js_error_message(e: JsValue) -> String {
    if let Some(message) = e.as_string() {
        return message;
    }
    js_sys::Reflect::get(&e, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_state_accessors() {
        let connected = WalletState::Connected {
            address: "0x036CbD53842c5426634e7929541eC2318f3dCF7e".to_string(),
            chain_id: 10143,
        };
        assert!(connected.is_connected());
        assert_eq!(
            connected.address(),
            Some("0x036CbD53842c5426634e7929541eC2318f3dCF7e")
        );
        assert_eq!(connected.chain_id(), Some(10143));

        assert!(!WalletState::Disconnected.is_connected());
        assert_eq!(WalletState::Disconnected.address(), None);
        assert_eq!(WalletState::Connecting.chain_id(), None);
    }
}
