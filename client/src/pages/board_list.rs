//! Board list page: paged moderation table with client-side search.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route of the admin UI. Fetches one backend page per page-button
//! click; the search box filters the fetched page locally.

use leptos::prelude::*;
use model::ApiConfig;
use model::pagination::to_request_page;

use super::LoadingMessage;
use crate::components::board_header::BoardHeader;
use crate::components::board_table::BoardTable;
use crate::state::board_list::BoardListState;

#[component]
pub fn BoardListPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let list = RwSignal::new(BoardListState::default());
    let current_page = RwSignal::new(1_u32);
    let search = RwSignal::new(String::new());
    let refresh = RwSignal::new(0_u64);

    Effect::new(move || {
        let page = current_page.get();
        refresh.track();
        load_page(config.clone(), to_request_page(page), list);
    });

    let rows = Signal::derive(move || {
        let term = search.get();
        list.with(|s| s.visible_rows(&term))
    });
    let total_pages = Signal::derive(move || list.with(|s| s.total_pages));
    let on_refresh = Callback::new(move |()| refresh.update(|n| *n += 1));

    view! {
        <div class="admin-page">
            <BoardHeader
                title="Board Management"
                search=search
                button_label=Signal::derive(|| "Refresh".to_owned())
                on_click=on_refresh
            />
            <Show when=move || !list.with(|s| s.loading) fallback=|| view! { <LoadingMessage/> }>
                <BoardTable rows=rows current_page=current_page total_pages=total_pages/>
            </Show>
        </div>
    }
}

fn load_page(config: ApiConfig, page: u32, list: RwSignal<BoardListState>) {
    list.update(BoardListState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_boards(&config, page, model::DEFAULT_PAGE_SIZE).await {
            Ok(board_page) => list.update(|s| s.apply_page(&board_page)),
            Err(err) => {
                log::error!("board list fetch failed: {err}");
                list.update(BoardListState::fail);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, page);
    }
}
