use leptos::prelude::*;
use superswap_core::{Chain, Token, CHAINS, TOKENS};

#[component]
pub fn ChainSelect(
    #[prop(into)] id: String,
    #[prop(into)] selected: Signal<Chain>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <img
                src=move || selected.get().icon
                alt=move || selected.get().name
                width="20"
                height="20"
            />
            <select
                id=id
                title="Select Chain"
                class="w-[120px] bg-transparent text-white rounded-md border border-solid border-neutral-600"
                prop:value=move || selected.get().name
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                {CHAINS
                    .iter()
                    .map(|chain| view! { <option value=chain.name>{chain.name}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn TokenSelect(
    #[prop(into)] id: String,
    #[prop(into)] selected: Signal<Token>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1 px-2 py-1 rounded-full border border-solid border-neutral-600">
            <img
                src=move || selected.get().icon
                alt=move || selected.get().name
                width="20"
                height="20"
            />
            <select
                id=id
                title="Select Token"
                class="bg-transparent text-sm text-white border-none"
                prop:value=move || selected.get().symbol
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                {TOKENS
                    .iter()
                    .map(|token| {
                        view! {
                            <option value=token.symbol title=token.name>
                                {token.display_symbol()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
