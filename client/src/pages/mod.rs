//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, delete after
//! confirmation, redirects) and delegates rendering details to `components`.
//! Navigation is requested by writing a path into a page-local signal that a
//! single effect forwards to the router.

pub mod board_comments;
pub mod board_detail;
pub mod board_list;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use model::ApiConfig;
#[cfg(feature = "hydrate")]
use model::target::LIST_ROUTE;

use crate::state::board_detail::BoardDetailState;


/// Parse the `:id` route segment.
fn parse_board_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse().ok())
}

/// Signal that navigates whenever a path is written into it.
fn redirect_signal() -> RwSignal<Option<String>> {
    let redirect = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = redirect.get() {
            redirect.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    redirect
}

/// Fetch a board detail into `state`, redirecting to the list on failure.
///
/// Transport errors and a missing `boardDetail` are handled the same way:
/// logged, then a silent redirect instead of rendering a broken page.
fn load_detail(
    config: ApiConfig,
    board_id: i64,
    state: RwSignal<BoardDetailState>,
    redirect: RwSignal<Option<String>>,
) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::board_detail(&config, board_id).await {
            Ok((board, comments)) => {
                let today = crate::util::browser::today();
                state.update(|s| s.load(&board, &comments, today));
            }
            Err(err) => {
                log::error!("board {board_id} detail fetch failed: {err}");
                state.update(BoardDetailState::fail);
                redirect.set(Some(LIST_ROUTE.to_owned()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, board_id, redirect);
    }
}

/// Loading placeholder shared by the pages.
#[component]
fn LoadingMessage() -> impl IntoView {
    view! { <p class="admin-page__loading">"Loading..."</p> }
}

/// Shown when a detail fetch produced no post.
#[component]
fn NotFoundMessage() -> impl IntoView {
    view! { <p class="admin-page__error">"Post not found."</p> }
}
