//! Author line, content box and first image of a post.

use leptos::prelude::*;
use model::BoardView;

/// Renders a post. When `on_open` is set and the post is live, the content
/// box is clickable.
#[component]
pub fn PostBody(board: BoardView, #[prop(optional)] on_open: Option<Callback<()>>) -> impl IntoView {
    let clickable = on_open.is_some() && !board.is_deleted;
    let notice = board.deleted_notice().map(ToOwned::to_owned);
    let image = board.primary_image().map(ToOwned::to_owned);

    view! {
        <section class="post">
            {notice.map(|message| view! { <div class="post__deleted-notice">{message}</div> })}
            <div class="post__author">
                <span class="post__author-label">"Author:"</span>
                <span class="post__author-name">{board.author}</span>
            </div>
            <h3 class="post__title">{board.title}</h3>
            <div
                class="post__content-box"
                class:post__content-box--clickable=clickable
                on:click=move |_| {
                    if clickable {
                        if let Some(open) = on_open {
                            open.run(());
                        }
                    }
                }
            >
                <div class="post__content">{board.content}</div>
                {image
                    .map(|src| {
                        view! {
                            <div class="post__image-container">
                                <img class="post__image" src=src alt="Post image"/>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}
