use leptos::prelude::*;
use lucide_leptos::TriangleAlert;

/// Inline destructive alert. Renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div
                role="alert"
                class="mb-4 p-4 flex gap-3 rounded-lg border border-solid border-red-500 text-red-500"
            >
                <TriangleAlert size=16 />
                <div>
                    <h5 class="m-0 mb-1 font-medium leading-none">"Error"</h5>
                    <div class="text-sm">{move || message.get().unwrap_or_default()}</div>
                </div>
            </div>
        </Show>
    }
}
