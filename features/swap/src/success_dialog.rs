use leptos::prelude::*;
use superswap_components::Modal;
use superswap_core::{constants::SWAP_SUCCEEDED_TITLE, SwapReceipt};

/// Shown once per successful swap, until closed.
#[component]
pub fn SuccessDialog(
    #[prop(into)] receipt: Signal<Option<SwapReceipt>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || receipt.with(Option::is_some));
    let summary = move || receipt.get().map(|receipt| receipt.to_string());

    view! {
        <Modal when=open title=SWAP_SUCCEEDED_TITLE on_close=on_close>
            <div class="p-4">
                <p>{summary}</p>
            </div>
            <button
                class="w-full py-2 px-6 bg-[#FF30B0] hover:bg-[#F615B9] text-white text-sm font-medium rounded-md border-none"
                on:click=move |_| on_close.run(())
            >
                "Close"
            </button>
        </Modal>
    }
}
