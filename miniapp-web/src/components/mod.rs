//! UI Components

pub mod wallet_actions;

pub use wallet_actions::WalletActions;
