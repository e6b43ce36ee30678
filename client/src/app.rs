//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::build_api_config;
use crate::pages::{board_comments::BoardCommentsPage, board_detail::BoardDetailPage, board_list::BoardListPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the backend connection settings and sets up the admin routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(build_api_config());

    view! {
        <Title text="Board Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/admin/board"/> }/>
                <Route path=(StaticSegment("admin"), StaticSegment("board")) view=BoardListPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("board"), ParamSegment("id"))
                    view=BoardDetailPage
                />
                <Route
                    path=(
                        StaticSegment("admin"),
                        StaticSegment("board"),
                        ParamSegment("id"),
                        StaticSegment("comments"),
                    )
                    view=BoardCommentsPage
                />
            </Routes>
        </Router>
    }
}
