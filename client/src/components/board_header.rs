//! Page header with title, search box and a single action button.

use leptos::prelude::*;

/// Header shared by every admin page.
///
/// The search text is owned by the page; the action button is disabled while
/// `disabled` is true.
#[component]
pub fn BoardHeader(
    title: &'static str,
    search: RwSignal<String>,
    button_label: Signal<String>,
    on_click: Callback<()>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <header class="board-header toolbar">
            <h1 class="board-header__title">{title}</h1>
            <span class="toolbar__spacer"></span>
            <input
                class="board-header__search"
                type="search"
                placeholder="Search"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <button
                class="btn btn--primary board-header__action"
                disabled=move || disabled.get()
                on:click=move |_| on_click.run(())
            >
                {move || button_label.get()}
            </button>
        </header>
    }
}
