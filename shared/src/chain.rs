//! # Chain Descriptors
//!
//! Static descriptions of the EVM networks the widget knows about. The
//! wallet itself owns the active chain; these descriptors only carry the
//! display metadata and the explorer link base for a target network.

/// Static description of an EVM network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// Numeric chain id as reported by `eth_chainId`.
    pub id: u64,
    pub name: &'static str,
    /// Ticker of the chain's native currency.
    pub native_symbol: &'static str,
    /// Base path of the block explorer's transaction page.
    pub explorer_tx_base: &'static str,
}

impl ChainDescriptor {
    /// Block-explorer page for a transaction on this chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared::chain::MONAD_TESTNET;
    ///
    /// let url = MONAD_TESTNET.explorer_tx_url("0xdeadbeef");
    /// assert_eq!(url, "https://testnet.monadexplorer.com/tx/0xdeadbeef");
    /// ```
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}{}", self.explorer_tx_base, tx_hash)
    }

    /// Chain id as the 0x-prefixed hex string expected by
    /// `wallet_switchEthereumChain`.
    pub fn id_hex(&self) -> String {
        format!("{:#x}", self.id)
    }
}

/// Monad testnet, the only network the payment panel targets.
pub const MONAD_TESTNET: ChainDescriptor = ChainDescriptor {
    id: 10143,
    name: "Monad Testnet",
    native_symbol: "MON",
    explorer_tx_base: "https://testnet.monadexplorer.com/tx/",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_tx_url() {
        let hash = "0x52f0e24e2b98e5e5ef7cfda11d5c27a2e1c7e9b0";
        assert_eq!(
            MONAD_TESTNET.explorer_tx_url(hash),
            format!("https://testnet.monadexplorer.com/tx/{}", hash)
        );
    }

    #[test]
    fn test_monad_testnet_id() {
        assert_eq!(MONAD_TESTNET.id, 10143);
        assert_eq!(MONAD_TESTNET.id_hex(), "0x279f");
    }

    #[test]
    fn test_native_symbol() {
        assert_eq!(MONAD_TESTNET.native_symbol, "MON");
    }
}
