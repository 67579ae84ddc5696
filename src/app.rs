//! Root application module.
//!
//! Contains the main App component, the AppContext holding browser state,
//! and the one-time structure load.

use leptos::prelude::*;
use repo_browser_core::{Browser, Directory, LoadError, NavError, TreePath};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::components::{Breadcrumb, FileList};
use crate::config::{APP_TITLE, STRUCTURE_URL};
use crate::models::Route;
use crate::utils::fetch_structure;

// ============================================================================
// AppContext
// ============================================================================

/// Where a navigation request came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    /// A breadcrumb or directory row was clicked; success adds a history entry.
    Click,
    /// The URL hash changed (deep link, back/forward); a miss restores the
    /// hash of the view still on screen.
    Location,
}

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; the breadcrumb and file list
/// read the current view from it and route clicks back through
/// [`AppContext::navigate`].
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Tree store and current view.
    pub browser: RwSignal<Browser>,
}

impl AppContext {
    /// Creates a context with nothing loaded.
    pub fn new() -> Self {
        Self {
            browser: RwSignal::new(Browser::new()),
        }
    }

    /// Apply the structure load result. Returns whether the tree is now loaded.
    pub fn load(&self, result: Result<Directory, LoadError>) -> bool {
        let outcome = self
            .browser
            .try_update(|b| b.load(result).map(|view| view.listing.rows().len()));

        match outcome {
            Some(Ok(entries)) => {
                web_sys::console::log_1(
                    &format!("Repository structure loaded ({} root entries)", entries).into(),
                );
                true
            }
            Some(Err(err)) => {
                web_sys::console::warn_1(
                    &format!("Failed to load repository structure: {}", err).into(),
                );
                false
            }
            None => false,
        }
    }

    /// Navigate to a directory path.
    ///
    /// Only a successful resolution notifies the views; a miss leaves them
    /// untouched and is reported in the returned error only.
    pub fn navigate(&self, path: TreePath, source: NavSource) -> Result<TreePath, NavError> {
        let outcome = self
            .browser
            .try_maybe_update(|b| match b.navigate_to(path) {
                Ok(view) => (true, Ok(view.path.clone())),
                Err(err) => (false, Err(err)),
            })
            .unwrap_or(Err(NavError::NotLoaded));

        match (&outcome, source) {
            (Ok(path), NavSource::Click) => {
                if Route::current().path() != path {
                    Route::new(path.clone()).push();
                }
            }
            (Ok(_), NavSource::Location) => {}
            (Err(err), _) => {
                web_sys::console::warn_1(&format!("Navigation ignored: {}", err).into());
                if source == NavSource::Location
                    && let Some(route) = self.browser.with_untracked(route_on_screen)
                {
                    route.replace();
                }
            }
        }

        outcome
    }
}

/// Route of the view currently shown, if any.
///
/// Before a successful load nothing is on screen, so a deep link in the URL
/// must be left alone rather than rewritten to the root.
fn route_on_screen(browser: &Browser) -> Option<Route> {
    browser.view().map(|view| Route::new(view.path.clone()))
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the structure document once and show the initial directory.
///
/// The root is rendered first; a non-root hash in the URL is then followed
/// like any other location change.
fn load_structure(ctx: AppContext) {
    spawn_local(async move {
        let result = fetch_structure(STRUCTURE_URL).await;
        if !ctx.load(result) {
            return;
        }

        let initial = Route::current();
        if !initial.path().is_root() {
            let _ = ctx.navigate(initial.path().clone(), NavSource::Location);
        }
    });
}

/// Follow back/forward and manual hash edits.
#[cfg(target_arch = "wasm32")]
fn listen_for_hash_changes(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move || {
        let route = Route::current();
        let _ = ctx.navigate(route.path().clone(), NavSource::Location);
    }) as Box<dyn Fn()>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// Root application component.
///
/// This component:
/// - Creates and provides the AppContext
/// - Starts the structure load and hash listener
/// - Renders the breadcrumb and listing regions
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    #[cfg(target_arch = "wasm32")]
    listen_for_hash_changes(ctx);
    load_structure(ctx);

    view! {
        <main class="browser">
            <h1 class="title">{APP_TITLE}</h1>
            <Breadcrumb />
            <FileList />
        </main>
    }
}
