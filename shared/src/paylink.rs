//! # PayLinkNative Contract Interface
//!
//! ABI bindings for the deployed PayLinkNative contract plus the
//! construction of the single outbound payment transaction. The contract
//! exposes one payable entry point, `pay(string resourceId)`; the buyer
//! attaches the product price as native value and the contract splits it
//! between treasury and fee recipient on-chain.
//!
//! Signing and broadcast stay with the wallet. This module only builds
//! the `eth_sendTransaction` parameter object the widget hands to the
//! host's injected provider.

use std::str::FromStr;

use alloy_primitives::{
    utils::parse_ether,
    Address, Bytes, U256,
};
use alloy_sol_types::{sol, SolCall};
use serde::Serialize;
use thiserror::Error;

sol! {
    /// On-chain payment sink. Mirrors the deployed ABI.
    interface PayLinkNative {
        error InvalidBps();
        error NoValue();
        error TransferFailed();
        error ZeroAddress();

        event PaymentReceived(
            address indexed buyer,
            string resourceId,
            uint256 amount,
            uint256 ts,
            uint256 fee
        );

        function pay(string resourceId) external payable;

        function treasury() external view returns (address);
        function feeRecipient() external view returns (address);
        function feeBps() external view returns (uint16);
    }
}

/// Static product descriptor rendered in the payment panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub resource_id: &'static str,
    /// Price in the chain's native currency, human-readable decimal
    /// (e.g. `"0.01"`). Converted to base units at request build time.
    pub price_native: &'static str,
}

/// Reasons a payment request cannot be constructed. All of these surface
/// inline in the widget; none of them abort the app.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentRequestError {
    #[error("payment contract address is not configured")]
    MissingContractAddress,
    #[error("invalid payment contract address: {0}")]
    InvalidContractAddress(String),
    #[error("invalid price {price:?}: {reason}")]
    InvalidPrice { price: String, reason: String },
}

/// One outbound payment transaction, ready for `eth_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentRequest {
    pub to: Address,
    /// Price in base units (wei-equivalent).
    pub value: U256,
    /// ABI-encoded `pay(resourceId)` call.
    pub data: Bytes,
}

/// JSON parameter object for the provider's `eth_sendTransaction`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CallParams {
    pub from: String,
    pub to: String,
    /// 0x-prefixed hex, base units.
    pub value: String,
    /// 0x-prefixed hex calldata.
    pub data: String,
}

impl PaymentRequest {
    /// Parameter object for the provider request, with the connected
    /// account as sender.
    pub fn to_call_params(&self, from: &str) -> CallParams {
        CallParams {
            from: from.to_string(),
            to: self.to.to_string(),
            value: format!("{:#x}", self.value),
            data: self.data.to_string(),
        }
    }
}

/// Build the single payment transaction for `product`, addressed to the
/// configured contract.
///
/// `contract_address` is the environment-provided hex address; `None`
/// means the build-time configuration was absent, which is reported as a
/// payment-path error rather than a startup failure.
pub fn build_payment_request(
    contract_address: Option<&str>,
    product: &Product,
) -> Result<PaymentRequest, PaymentRequestError> {
    let raw = contract_address.ok_or(PaymentRequestError::MissingContractAddress)?;

    let to = Address::from_str(raw)
        .map_err(|e| PaymentRequestError::InvalidContractAddress(e.to_string()))?;

    let value =
        parse_ether(product.price_native).map_err(|e| PaymentRequestError::InvalidPrice {
            price: product.price_native.to_string(),
            reason: e.to_string(),
        })?;

    let data = PayLinkNative::payCall {
        resourceId: product.resource_id.to_string(),
    }
    .abi_encode();

    Ok(PaymentRequest {
        to,
        value,
        data: data.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "0x7f748f154B6D180D35fA12460C7E4C631e28A9d7";

    const DEMO: Product = Product {
        resource_id: "demo-pdf-1mon",
        price_native: "0.01",
    };

    #[test]
    fn test_build_payment_request() {
        let request = build_payment_request(Some(CONTRACT), &DEMO).unwrap();

        assert_eq!(request.to, Address::from_str(CONTRACT).unwrap());
        // 0.01 native units = 10^16 base units
        assert_eq!(request.value, U256::from(10_000_000_000_000_000u64));

        let call = PayLinkNative::payCall::abi_decode(&request.data).unwrap();
        assert_eq!(call.resourceId, "demo-pdf-1mon");
    }

    #[test]
    fn test_calldata_selector() {
        let request = build_payment_request(Some(CONTRACT), &DEMO).unwrap();
        assert_eq!(&request.data[..4], PayLinkNative::payCall::SELECTOR.as_slice());
    }

    #[test]
    fn test_call_params_hex_fields() {
        let request = build_payment_request(Some(CONTRACT), &DEMO).unwrap();
        let from = "0x036CbD53842c5426634e7929541eC2318f3dCF7e";
        let params = request.to_call_params(from);

        assert_eq!(params.from, from);
        // Display form is EIP-55 checksummed; compare case-insensitively.
        assert_eq!(params.to.to_lowercase(), CONTRACT.to_lowercase());
        assert_eq!(params.value, "0x2386f26fc10000");
        assert!(params.data.starts_with("0x"));
    }

    #[test]
    fn test_missing_contract_address() {
        assert_eq!(
            build_payment_request(None, &DEMO),
            Err(PaymentRequestError::MissingContractAddress)
        );
    }

    #[test]
    fn test_invalid_contract_address() {
        let err = build_payment_request(Some("not-an-address"), &DEMO).unwrap_err();
        assert!(matches!(
            err,
            PaymentRequestError::InvalidContractAddress(_)
        ));
    }

    #[test]
    fn test_invalid_price() {
        let bad = Product {
            resource_id: "demo-pdf-1mon",
            price_native: "one hundred",
        };
        let err = build_payment_request(Some(CONTRACT), &bad).unwrap_err();
        assert!(matches!(err, PaymentRequestError::InvalidPrice { .. }));
    }
}
