//! Board detail page: one post with a "take down" action.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use model::ApiConfig;
use model::target::comments_route;

use super::{LoadingMessage, NotFoundMessage, load_detail, parse_board_id, redirect_signal};
use crate::components::board_header::BoardHeader;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::post_body::PostBody;
use crate::state::board_detail::{BoardDetailState, PendingDelete};

#[cfg(test)]
#[path = "board_detail_test.rs"]
mod board_detail_test;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const DELETE_REJECTED_MESSAGE: &str = "Failed to delete the post.";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const DELETE_ERROR_MESSAGE: &str = "An error occurred while deleting the post.";

fn action_label(is_deleted: bool) -> &'static str {
    if is_deleted { "Deleted post" } else { "Take down post" }
}

#[component]
pub fn BoardDetailPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();
    let board_id = Memo::new(move |_| parse_board_id(params.read().get("id")));
    let state = RwSignal::new(BoardDetailState::default());
    let search = RwSignal::new(String::new());
    let redirect = redirect_signal();

    let load_config = config.clone();
    Effect::new(move || match board_id.get() {
        Some(id) => load_detail(load_config.clone(), id, state, redirect),
        None => redirect.set(Some(model::target::LIST_ROUTE.to_owned())),
    });

    let on_take_down = Callback::new(move |()| {
        if let Some(id) = board_id.get_untracked() {
            state.update(|s| s.request_delete(PendingDelete::Board(id)));
        }
    });
    let on_cancel = Callback::new(move |()| state.update(BoardDetailState::cancel_delete));
    let on_confirm = Callback::new(move |()| {
        if let Some(PendingDelete::Board(id)) = state.with_untracked(|s| s.pending_delete) {
            delete_board(config.clone(), id, state, redirect);
        }
    });

    let button_label = Signal::derive(move || {
        let is_deleted = state.with(|s| s.board.as_ref().is_some_and(|b| b.is_deleted));
        action_label(is_deleted).to_owned()
    });
    let disabled = Signal::derive(move || !state.with(BoardDetailState::can_delete_board));

    view! {
        <div class="admin-page">
            <BoardHeader
                title="Board Management"
                search=search
                button_label=button_label
                on_click=on_take_down
                disabled=disabled
            />
            {move || {
                let (loading, board) = state.with(|s| (s.loading, s.board.clone()));
                if loading {
                    return view! { <LoadingMessage/> }.into_any();
                }
                match board {
                    None => view! { <NotFoundMessage/> }.into_any(),
                    Some(board) => {
                        let id = board.id;
                        let on_open = Callback::new(move |()| redirect.set(Some(comments_route(id))));
                        view! { <PostBody board=board on_open=on_open/> }.into_any()
                    }
                }
            }}
            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog title="Delete this post?" on_cancel=on_cancel on_confirm=on_confirm/>
            </Show>
        </div>
    }
}

fn delete_board(config: ApiConfig, board_id: i64, state: RwSignal<BoardDetailState>, redirect: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::browser::alert;

        match crate::net::api::delete_board(&config, board_id).await {
            Ok(response) if response.is_success() => {
                log::info!("board {board_id} deleted");
                state.update(BoardDetailState::cancel_delete);
                redirect.set(Some(model::target::LIST_ROUTE.to_owned()));
            }
            Ok(response) => {
                log::error!("board {board_id} delete rejected: {}", response.message().unwrap_or_default());
                alert(DELETE_REJECTED_MESSAGE);
            }
            Err(err) => {
                log::error!("board {board_id} delete failed: {err}");
                alert(DELETE_ERROR_MESSAGE);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, board_id, state, redirect);
    }
}
