//! Board list table with server-side pagination buttons.

use leptos::prelude::*;
use model::BoardRow;
use model::filter::Column;
use model::pagination::page_numbers;

#[component]
pub fn BoardTable(rows: Signal<Vec<BoardRow>>, current_page: RwSignal<u32>, total_pages: Signal<u32>) -> impl IntoView {
    view! {
        <table class="board-table">
            <thead>
                <tr>
                    {Column::VISIBLE
                        .iter()
                        .map(|col| view! { <th class="board-table__head">{col.header()}</th> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr class="board-table__row">
                                    {Column::VISIBLE
                                        .iter()
                                        .map(|col| render_cell(*col, &row))
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
        <nav class="pagination" aria-label="Pages">
            {move || {
                page_numbers(total_pages.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="btn pagination__page"
                                class:pagination__page--active=move || current_page.get() == page
                                on:click=move |_| current_page.set(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}

fn render_cell(col: Column, row: &BoardRow) -> AnyView {
    let value = col.value(row).to_owned();
    match col {
        Column::Manage => view! {
            <td class="board-table__cell">
                <a class="btn board-table__manage" href=value>"Manage"</a>
            </td>
        }
        .into_any(),
        _ => view! { <td class="board-table__cell">{value}</td> }.into_any(),
    }
}
