use leptos::{html::Dialog, prelude::*};
use tracing::warn;

/// A modal `<dialog>` that is open exactly while `when` is true.
///
/// Closing it from the browser side (Escape key) reports through `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] when: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<Dialog>::new();

    Effect::new(move |_| match dialog_ref.get() {
        Some(dialog) => match when.get() {
            true => {
                if !dialog.open() {
                    if let Err(e) = dialog.show_modal() {
                        warn!("failed to open dialog: {e:?}");
                    }
                }
            }
            false => dialog.close(),
        },
        None => (),
    });

    view! {
        <dialog
            node_ref=dialog_ref
            class="z-40 w-[400px] p-6 rounded-lg bg-[#222222] text-white border border-solid border-neutral-700"
            on:close=move |_| on_close.run(())
        >
            // prevent focus ring from showing around the main div
            <div tabindex="0"></div>
            <h2 class="m-0 text-lg font-semibold">{title}</h2>
            {children()}
        </dialog>
    }
}
