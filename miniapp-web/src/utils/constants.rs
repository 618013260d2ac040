//! Application constants

use shared::paylink::Product;

/// PayLinkNative contract address, injected at build time. Absence is
/// surfaced as a payment-path error, not a startup failure.
pub const CONTRACT_ADDRESS: Option<&str> = option_env!("PAYLINK_CONTRACT_ADDRESS");

/// The one product this demo widget sells.
pub const DEMO_PRODUCT: Product = Product {
    resource_id: "demo-pdf-1mon",
    price_native: "0.01",
};

/// Display name rendered in the payment panel.
pub const DEMO_PRODUCT_NAME: &str = "PDF Demo";
