//! PayLink Mini App - Leptos Frontend
//!
//! Single-page shell around the wallet actions widget.

use leptos::prelude::*;

use crate::components::WalletActions;
use crate::services::provider;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let wallet_ctx = provide_wallet_context();

    // Track chain switches made from the wallet side so the displayed
    // chain id and the render branch follow the wallet. Runs once; the
    // effect has no reactive dependencies.
    Effect::new(move || {
        provider::subscribe_chain_changed(move |chain_id| {
            log::info!("Wallet switched to chain {}", chain_id);
            wallet_ctx.set_chain_id(chain_id);
        });
    });

    view! {
        <div class="app-container">
            <main class="content-wrapper">
                <h1 class="main-header">"PayLink"</h1>
                <p class="main-subheader">"Pay for content on Monad Testnet"</p>
                <WalletActions/>
            </main>
        </div>
    }
}
