//! Board detail with its flattened comment tree and per-comment deletes.
//!
//! Deletes hit the server immediately; the page only tracks which ids were
//! removed so they render as placeholders. "Done" clears that session and
//! returns to the plain detail view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use model::ApiConfig;
use model::target::detail_route;

use super::{LoadingMessage, NotFoundMessage, load_detail, parse_board_id, redirect_signal};
use crate::components::board_header::BoardHeader;
use crate::components::comment_item::CommentItem;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::post_body::PostBody;
use crate::state::board_detail::{BoardDetailState, PendingDelete};

#[cfg(feature = "hydrate")]
const DELETE_REJECTED_MESSAGE: &str = "Failed to delete the comment.";
#[cfg(feature = "hydrate")]
const DELETE_ERROR_MESSAGE: &str = "An error occurred while deleting the comment.";

#[component]
pub fn BoardCommentsPage() -> impl IntoView {
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

    let comments = Memo::new(move |_| state.with(|s| s.comments.clone()));
    let post_author_id = Memo::new(move |_| state.with(|s| s.board.as_ref().and_then(|b| b.author_id.clone())));

    let on_done = Callback::new(move |()| {
        state.update(BoardDetailState::finish);
        if let Some(id) = board_id.get_untracked() {
            redirect.set(Some(detail_route(id)));
        }
    });
    let on_request_delete =
        Callback::new(move |comment_id: i64| state.update(|s| s.request_delete(PendingDelete::Comment(comment_id))));
    let on_cancel = Callback::new(move |()| state.update(BoardDetailState::cancel_delete));
    let on_confirm = Callback::new(move |()| {
        if let Some(PendingDelete::Comment(id)) = state.with_untracked(|s| s.pending_delete) {
            delete_comment(config.clone(), id, state);
        }
    });

    view! {
        <div class="admin-page">
            <BoardHeader
                title="Board Management"
                search=search
                button_label=Signal::derive(|| "Done".to_owned())
                on_click=on_done
                disabled=Signal::derive(move || !state.with(BoardDetailState::has_changes))
            />
            {move || {
                let (loading, board) = state.with(|s| (s.loading, s.board.clone()));
                if loading {
                    return view! { <LoadingMessage/> }.into_any();
                }
                match board {
                    None => view! { <NotFoundMessage/> }.into_any(),
                    Some(board) => view! { <PostBody board=board/> }.into_any(),
                }
            }}
            <section class="comments">
                <h3 class="comments__title">"Comments"</h3>
                <div class="comments__list">
                    {move || {
                        let author_id = post_author_id.get();
                        comments
                            .get()
                            .into_iter()
                            .map(|comment| {
                                let tracked = comment.clone();
                                let deleted = Signal::derive(move || state.with(|s| s.is_comment_deleted(&tracked)));
                                view! {
                                    <CommentItem
                                        comment=comment
                                        deleted=deleted
                                        on_delete=on_request_delete
                                        post_author_id=author_id.clone()
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog title="Delete this comment?" on_cancel=on_cancel on_confirm=on_confirm/>
            </Show>
        </div>
    }
}

fn delete_comment(config: ApiConfig, comment_id: i64, state: RwSignal<BoardDetailState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::browser::alert;

        match crate::net::api::delete_comment(&config, comment_id).await {
            Ok(response) if response.is_success() => {
                log::info!("comment {comment_id} deleted");
                state.update(|s| s.comment_deleted(comment_id));
            }
            Ok(response) => {
                log::error!("comment {comment_id} delete rejected: {}", response.message().unwrap_or_default());
                alert(DELETE_REJECTED_MESSAGE);
            }
            Err(err) => {
                log::error!("comment {comment_id} delete failed: {err}");
                alert(DELETE_ERROR_MESSAGE);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, comment_id, state);
    }
}
