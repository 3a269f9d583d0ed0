use leptos::prelude::*;
use superswap_core::{Toast, ToastSeverity, Toasts};
use tracing::debug;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_context::<Toasts>().expect("toasts context missing!");

    let items = move || toasts.queue.with(|queue| queue.iter().cloned().collect::<Vec<Toast>>());

    view! {
        <ol class="fixed bottom-0 right-0 z-50 flex flex-col gap-2 p-4 w-full max-w-[420px] m-0 list-none">
            <For each=items key=|toast| toast.id let:toast>
                <ToastItem toast=toast on_close=Callback::new(move |id: u32| toasts.dismiss(id)) />
            </For>
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast, #[prop(into)] on_close: Callback<u32>) -> impl IntoView {
    let id = toast.id;
    let class = match toast.severity {
        ToastSeverity::Default => "bg-[#323232] text-white border-neutral-700",
        ToastSeverity::Destructive => "bg-red-600 text-white border-red-600",
    };

    view! {
        <li
            role="status"
            class=format!("relative p-4 pr-8 rounded-md border border-solid shadow-lg {class}")
        >
            <div class="text-sm font-semibold">{toast.title}</div>
            <div class="text-sm opacity-90">{toast.description}</div>
            <button
                type="button"
                aria-label="close"
                class="absolute right-2 top-2 p-1 bg-transparent border-none text-current"
                on:click=move |_| {
                    debug!("closing toast {id}");
                    on_close.run(id);
                }
            >
                "×"
            </button>
        </li>
    }
}
