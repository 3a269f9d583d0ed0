use crate::{ChainSelect, SuccessDialog, SwapOrchestrator, TimerSettlement, TokenSelect};
use eip1193::{Ethereum, WalletCapability};
use leptos::{ev, prelude::*};
use lucide_leptos::ArrowDownUp;
use superswap_components::{ErrorBanner, Spinner2};
use superswap_core::{Error, SwapConfig, SwapIntent, SwapPhase, Toasts};
use tracing::{debug, info, warn};

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    let config = use_context::<SwapConfig>().expect("swap config context missing!");
    let toasts = use_context::<Toasts>().expect("toasts context missing!");

    let intent = RwSignal::new(SwapIntent::new(config.multiplier));
    let phase = RwSignal::new(SwapPhase::Idle);

    let source_amount = Signal::derive(move || intent.with(|i| i.source_amount().to_string()));
    let destination_amount =
        Signal::derive(move || intent.with(|i| i.destination_amount().to_string()));
    let source_chain = Signal::derive(move || intent.with(|i| i.source_chain));
    let destination_chain = Signal::derive(move || intent.with(|i| i.destination_chain));
    let source_token = Signal::derive(move || intent.with(|i| i.source_token));
    let destination_token = Signal::derive(move || intent.with(|i| i.destination_token));

    let in_flight = Memo::new(move |_| phase.with(SwapPhase::is_in_flight));
    let error_message = Signal::derive(move || phase.with(|p| p.error().map(Error::message)));
    let receipt = Signal::derive(move || phase.with(|p| p.receipt().cloned()));

    Effect::new(move |_| debug!("swap status: {:?}", phase.with(SwapPhase::status)));

    let swap = Action::new_local(move |_: &()| {
        let delay = config.settlement_delay;

        async move {
            let ethereum = Ethereum::detect();
            let wallet = ethereum
                .as_ref()
                .map(|ethereum| ethereum as &dyn WalletCapability);
            let settlement = TimerSettlement;

            let outcome = SwapOrchestrator::new(wallet, &settlement, delay)
                .execute(
                    move || intent.get_untracked(),
                    |next| {
                        debug!("swap phase: {next}");
                        phase.set(next.clone());
                    },
                )
                .await;

            if let Some(error) = outcome.error() {
                toasts.push_failure(error);
            }
        }
    });

    let handle_swap = move |_: ev::MouseEvent| {
        let Some(next) = phase.with_untracked(SwapPhase::begin) else {
            warn!("a swap is already in progress");
            return;
        };
        phase.set(next);
        swap.dispatch(());
    };

    let dismiss = move |_: ()| {
        phase.update(|phase| *phase = std::mem::take(phase).dismiss());
    };

    view! {
        <SuccessDialog receipt on_close=Callback::new(dismiss) />
        <div class="absolute inset-0 m-auto flex items-center justify-center">
            <div class="w-[477px] bg-[#222222] rounded-[36px] p-4 relative shadow-[0px_14px_22px_0px_rgba(255,0,200,0.03)]">
                <ErrorBanner message=error_message />
                <div class="space-y-0 relative">
                    // from panel
                    <div class="w-full bg-[#323232] rounded-[36px] p-4 mb-2">
                        <div class="flex items-center gap-2 mb-4">
                            <label class="text-neutral-400" for="from-chain">
                                "from"
                            </label>
                            <ChainSelect
                                id="from-chain"
                                selected=source_chain
                                on_select=Callback::new(move |name: String| {
                                    intent.update(|i| i.select_source_chain(&name))
                                })
                            />
                        </div>
                        <div class="flex items-center justify-between">
                            <input
                                id="from-amount"
                                type="text"
                                inputmode="decimal"
                                autocomplete="off"
                                class="bg-transparent text-4xl text-white outline-none w-full border-none"
                                prop:value=move || source_amount.get()
                                on:input=move |ev| {
                                    let amount = event_target_value(&ev);
                                    intent.update(|i| i.set_source_amount(amount));
                                }
                            />
                            <TokenSelect
                                id="from-token"
                                selected=source_token
                                on_select=Callback::new(move |symbol: String| {
                                    intent.update(|i| i.select_source_token(&symbol))
                                })
                            />
                        </div>
                    </div>

                    // direction toggle, sits on the seam between the two panels
                    <div class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 z-10">
                        <button
                            type="button"
                            aria-label="change swap direction"
                            class="w-[57px] h-[57px] rounded-full bg-[#FF30B0] hover:bg-[#F615B9] text-white flex items-center justify-center border-none transition-colors"
                            on:click=move |_| intent.update(SwapIntent::flip)
                        >
                            <ArrowDownUp size=24 />
                        </button>
                    </div>

                    // to panel
                    <div class="w-full bg-[#323232] rounded-[36px] p-4 mt-2">
                        <div class="flex items-center gap-2 mb-4">
                            <label class="text-neutral-400" for="to-chain">
                                "to"
                            </label>
                            <ChainSelect
                                id="to-chain"
                                selected=destination_chain
                                on_select=Callback::new(move |name: String| {
                                    intent.update(|i| i.select_destination_chain(&name))
                                })
                            />
                        </div>
                        <div class="flex items-center justify-between">
                            <input
                                id="to-amount"
                                type="text"
                                readonly
                                class="bg-transparent text-4xl text-white outline-none w-full border-none"
                                prop:value=move || destination_amount.get()
                            />
                            <TokenSelect
                                id="to-token"
                                selected=destination_token
                                on_select=Callback::new(move |symbol: String| {
                                    intent.update(|i| i.select_destination_token(&symbol))
                                })
                            />
                        </div>
                    </div>
                </div>

                <button
                    class="w-full h-[59px] mt-4 rounded-[32px] bg-[#FF30B0] hover:bg-[#F615B9] text-white text-base border border-solid border-[#F615B9] transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || in_flight.get()
                    on:click=handle_swap
                >
                    <Show when=move || in_flight.get() fallback=|| "Swap">
                        <div class="flex items-center justify-center gap-2">
                            <Spinner2 size="h-4 w-4" />
                            "Swapping..."
                        </div>
                    </Show>
                </button>
            </div>
        </div>
    }
}
