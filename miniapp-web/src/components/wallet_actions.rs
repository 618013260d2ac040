//! Wallet Actions Widget
//!
//! The single widget of the mini-app: renders one of three mutually
//! exclusive wallet states (no provider / connect / connected) and wires
//! the connect, disconnect, switch-chain and pay controls to the host's
//! injected provider.

use leptos::logging::log;
use leptos::prelude::*;

use shared::chain::MONAD_TESTNET;
use shared::paylink::build_payment_request;
use shared::utils::truncate_address;

use crate::services::provider;
use crate::state::payment::PaymentAttempt;
use crate::state::wallet::{use_wallet_context, view_state, ViewState};
use crate::utils::constants::{CONTRACT_ADDRESS, DEMO_PRODUCT, DEMO_PRODUCT_NAME};

#[component]
pub fn WalletActions() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let (payment, set_payment) = signal(PaymentAttempt::default());

    let current_view = move || {
        wallet_ctx.wallet.with(|state| {
            view_state(
                provider::is_eth_provider_available(),
                state,
                MONAD_TESTNET.id,
            )
        })
    };

    let connect_wallet = move |_| {
        wallet_ctx.set_connecting();
        leptos::task::spawn_local(async move {
            match provider::connect_wallet().await {
                Ok((address, chain_id)) => {
                    log!(
                        "Wallet connected: {} on chain {}",
                        truncate_address(&address),
                        chain_id
                    );
                    wallet_ctx.set_connected(address, chain_id);
                }
                Err(e) => {
                    // Connect failures are not surfaced in the widget.
                    log::warn!("Wallet connection failed: {}", e);
                    wallet_ctx.disconnect();
                }
            }
        });
    };

    let disconnect_wallet = move |_| {
        wallet_ctx.disconnect();
        leptos::task::spawn_local(async move {
            provider::disconnect_wallet().await;
        });
    };

    let switch_network = move |_| {
        leptos::task::spawn_local(async move {
            if let Err(e) = provider::switch_chain(MONAD_TESTNET.id).await {
                log::warn!("Chain switch rejected: {}", e);
            }
        });
    };

    let submit_payment = move |_| {
        let address = match wallet_ctx.address() {
            Some(address) => address,
            None => return,
        };

        let mut started = false;
        set_payment.update(|attempt| started = attempt.begin());
        if !started {
            // A prior attempt is still outstanding.
            return;
        }

        leptos::task::spawn_local(async move {
            let request = match build_payment_request(CONTRACT_ADDRESS, &DEMO_PRODUCT) {
                Ok(request) => request,
                Err(e) => {
                    log::warn!("Payment request rejected: {}", e);
                    set_payment.update(|attempt| attempt.fail(e.to_string()));
                    return;
                }
            };

            match provider::send_payment(&address, &request).await {
                Ok(hash) => {
                    log!("Payment submitted: {}", hash);
                    set_payment.update(|attempt| attempt.succeed(hash));
                }
                Err(e) => {
                    log::warn!("Payment failed: {}", e);
                    set_payment.update(|attempt| attempt.fail(e));
                }
            }
        });
    };

    let open_explorer = move |_| {
        let hash = payment.with(|attempt| attempt.tx_hash.clone());
        if let Some(hash) = hash {
            let url = MONAD_TESTNET.explorer_tx_url(&hash);
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    log::warn!("Failed to open explorer page: {:?}", e);
                }
            }
        }
    };

    view! {
        <div class="card">
            {move || match current_view() {
                ViewState::NoProvider => view! {
                    <div>
                        <h2 class="card-title">"sdk.wallet.ethProvider"</h2>
                        <p class="hint">"Wallet connection is only available inside the host app"</p>
                    </div>
                }.into_any(),

                ViewState::ProviderAvailable => view! {
                    <div>
                        <h2 class="card-title">"sdk.wallet.ethProvider"</h2>
                        <button class="btn" style="width: 100%;" on:click=connect_wallet>
                            "Connect Wallet"
                        </button>
                    </div>
                }.into_any(),

                ViewState::ConnectedWrongChain { .. } | ViewState::ConnectedReady => view! {
                    <div>
                        <p class="field-label">"Connected to wallet"</p>
                        <p class="field-value" style="font-family: monospace; word-break: break-all;">
                            {wallet_ctx.address().unwrap_or_default()}
                        </p>
                        <p class="field-label">"Chain Id"</p>
                        <p class="field-value" style="font-family: monospace;">
                            {wallet_ctx.chain_id().map(|id| id.to_string()).unwrap_or_default()}
                        </p>

                        {move || if current_view() == ViewState::ConnectedReady {
                            view! {
                                <div class="panel">
                                    <h2 class="card-title">
                                        {format!("Pay with {} (PayLinkNative)", MONAD_TESTNET.name)}
                                    </h2>
                                    <div class="hint">
                                        {format!("Product: {}", DEMO_PRODUCT_NAME)}<br/>
                                        {format!(
                                            "Price: {} {}",
                                            DEMO_PRODUCT.price_native,
                                            MONAD_TESTNET.native_symbol
                                        )}<br/>
                                        {format!("resourceId: {}", DEMO_PRODUCT.resource_id)}
                                    </div>
                                    <button
                                        class="btn btn-primary"
                                        prop:disabled=move || payment.with(|attempt| attempt.in_flight)
                                        on:click=submit_payment
                                    >
                                        {move || if payment.with(|attempt| attempt.in_flight) {
                                            "Paying..."
                                        } else {
                                            "Pay with Monad"
                                        }}
                                    </button>
                                    {move || payment.with(|attempt| attempt.tx_hash.is_some()).then(|| view! {
                                        <button class="btn" on:click=open_explorer>
                                            "View transaction"
                                        </button>
                                    })}
                                    {move || payment.with(|attempt| attempt.error.clone()).map(|err| view! {
                                        <div class="error">{err}</div>
                                    })}
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <button class="btn" on:click=switch_network>
                                    {format!("Switch to {}", MONAD_TESTNET.name)}
                                </button>
                            }.into_any()
                        }}

                        <button class="btn" on:click=disconnect_wallet>
                            "Disconnect Wallet"
                        </button>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
