//! One row of the flattened comment list.

use leptos::prelude::*;
use model::CommentView;

/// A comment indented by its reply level.
///
/// Replies get one spacer per level above the first plus a reply marker.
/// Deleted comments (server-flagged or removed this session) collapse to a
/// placeholder without a delete button. Comments by the post's author show
/// the author label instead of the writer name.
#[component]
pub fn CommentItem(
    comment: CommentView,
    deleted: Signal<bool>,
    on_delete: Callback<i64>,
    post_author_id: Option<String>,
) -> impl IntoView {
    let level = comment.reply_level;
    let id = comment.id;
    let likes = comment.likes;
    let author = comment.display_author(post_author_id.as_deref()).to_owned();
    let CommentView { date, content, .. } = comment;

    view! {
        <div class="comment-item" data-reply-level=level.to_string()>
            <Show when=move || { level > 0 }>
                <span class="comment-item__reply" aria-label="Reply">
                    {(1..level).map(|_| view! { <span class="comment-item__spacer"></span> }).collect::<Vec<_>>()}
                    <span class="comment-item__reply-marker">"↳"</span>
                </span>
            </Show>
            <div class="comment-item__body">
                <Show
                    when=move || !deleted.get()
                    fallback=|| view! { <div class="comment-item__deleted">"This comment has been deleted."</div> }
                >
                    <div class="comment-item__header">
                        <span class="comment-item__author">{author.clone()}</span>
                        <span class="comment-item__date">{date.clone()}</span>
                        <button class="btn comment-item__delete" on:click=move |_| on_delete.run(id)>
                            "Delete"
                        </button>
                    </div>
                    <div class="comment-item__content">{content.clone()}</div>
                    <Show when=move || { likes > 0 }>
                        <div class="comment-item__likes">{format!("♥ {likes}")}</div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
