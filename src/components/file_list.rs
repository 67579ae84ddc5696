//! File list component.
//!
//! Renders the current directory's listing into the file list region, or
//! the fixed loading/empty/error message in its place.

use leptos::prelude::*;
use leptos_icons::Icon;
use repo_browser_core::{
    EMPTY_DIRECTORY_MESSAGE, LOAD_ERROR_MESSAGE, Listing, ListingRow, LoadState, RowAction,
};

use crate::app::{AppContext, NavSource};
use crate::components::icons as ic;
use crate::config::{FILE_LIST_REGION_ID, LOADING_MESSAGE};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/file_list.module.css");

/// What the file list region currently shows.
#[derive(Clone, Debug, PartialEq)]
enum RegionContent {
    Message(&'static str),
    Rows(Vec<ListingRow>),
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let content = Memo::new(move |_| {
        ctx.browser.with(|b| match b.load_state() {
            LoadState::Pending => RegionContent::Message(LOADING_MESSAGE),
            LoadState::Failed(_) => RegionContent::Message(LOAD_ERROR_MESSAGE),
            LoadState::Loaded => match b.view().map(|v| &v.listing) {
                Some(Listing::Entries(rows)) => RegionContent::Rows(rows.clone()),
                Some(Listing::Empty) | None => RegionContent::Message(EMPTY_DIRECTORY_MESSAGE),
            },
        })
    });

    view! {
        <div id=FILE_LIST_REGION_ID class=css::region>
            {move || match content.get() {
                RegionContent::Message(message) => view! {
                    <div class=css::empty>{message}</div>
                }.into_any(),
                RegionContent::Rows(rows) => view! {
                    <ul class=css::list aria-label="File list">
                        {rows
                            .into_iter()
                            .map(|row| view! { <FileListItem row=row /> })
                            .collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn FileListItem(row: ListingRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_kind(row.icon);
    let size = row.size.clone().unwrap_or_default();
    let name = row.name.clone();

    // Directories navigate in place; files are plain links off the page
    let link = match row.action {
        RowAction::Navigate(target) => {
            let href = Route::new(target.clone()).to_hash();
            let handle_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                let _ = ctx.navigate(target.clone(), NavSource::Click);
            };
            view! {
                <a class=format!("{} {}", css::name, css::folder) href=href on:click=handle_click>
                    {name}
                </a>
            }
            .into_any()
        }
        RowAction::Link(href) => view! {
            <a class=css::name href=href>{name}</a>
        }
        .into_any(),
    };

    view! {
        <li class=css::item>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            {link}
            <span class=css::size>{size}</span>
        </li>
    }
}
