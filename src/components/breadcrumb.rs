//! Breadcrumb component.
//!
//! Renders the trail of the current path into the breadcrumb region.

use leptos::prelude::*;
use leptos_icons::Icon;
use repo_browser_core::Crumb;

use crate::app::{AppContext, NavSource};
use crate::components::icons as ic;
use crate::config::BREADCRUMB_REGION_ID;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/breadcrumb.module.css");

/// Breadcrumb trail for the current directory.
///
/// Left empty until a directory has been shown, so a failed load leaves the
/// region unrendered.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Memo::new(move |_| {
        ctx.browser
            .with(|b| b.view().map(|v| v.breadcrumb.clone()))
            .unwrap_or_default()
    });

    view! {
        <nav id=BREADCRUMB_REGION_ID class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                crumbs
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| view! { <CrumbLink crumb=crumb show_separator={idx > 0} /> })
                    .collect_view()
            }}
        </nav>
    }
}

/// One clickable crumb.
#[component]
fn CrumbLink(crumb: Crumb, show_separator: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let href = Route::new(crumb.target.clone()).to_hash();
    let is_root = crumb.target.is_root();
    let target = crumb.target.clone();

    let handle_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let _ = ctx.navigate(target.clone(), NavSource::Click);
    };

    view! {
        <>
            {show_separator.then(|| view! {
                <span class=css::separator aria-hidden="true">"/"</span>
            })}
            <a class=css::crumb href=href on:click=handle_click>
                {is_root.then(|| view! {
                    <span class=css::icon><Icon icon=ic::HOME /></span>
                })}
                <span class=css::label>{crumb.label}</span>
            </a>
        </>
    }
}
