//! # Shared PayLink Types Library
//!
//! This library defines the chain- and contract-facing types used by the
//! mini-app widget. Everything in here is host-testable: no wasm-only
//! dependencies, no DOM, no provider interop.
//!
//! ## Structure
//!
//! - **[`chain`]**: Static descriptors for the networks the widget targets
//!   - **[`chain::MONAD_TESTNET`]**: The only network the payment panel accepts
//! - **[`paylink`]**: PayLinkNative contract interface and payment-request
//!   construction (ABI encoding, native unit conversion)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Usage in the widget
//!
//! ```rust
//! use shared::chain::MONAD_TESTNET;
//! use shared::paylink::{build_payment_request, Product};
//!
//! let product = Product {
//!     resource_id: "demo-pdf-1mon",
//!     price_native: "0.01",
//! };
//!
//! let request = build_payment_request(
//!     Some("0x7f748f154B6D180D35fA12460C7E4C631e28A9d7"),
//!     &product,
//! )?;
//!
//! // `to_call_params` yields the JSON parameter object handed to the
//! // provider's eth_sendTransaction request.
//! let params = request.to_call_params("0x036CbD53842c5426634e7929541eC2318f3dCF7e");
//! assert_eq!(params.value, "0x2386f26fc10000");
//!
//! let url = MONAD_TESTNET.explorer_tx_url("0xabc123");
//! assert!(url.ends_with("/tx/0xabc123"));
//! # Ok::<(), shared::paylink::PaymentRequestError>(())
//! ```

pub mod chain;
pub mod paylink;
pub mod utils;

// Re-export commonly used types for convenience
pub use chain::{ChainDescriptor, MONAD_TESTNET};
pub use paylink::{build_payment_request, PaymentRequest, PaymentRequestError, Product};
pub use utils::{format_address, truncate_address};
