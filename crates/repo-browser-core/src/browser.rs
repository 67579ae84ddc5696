//! Application state: the tree store plus the currently rendered view.

use crate::breadcrumb::{Crumb, breadcrumb};
use crate::error::{LoadError, NavError, StoreError};
use crate::listing::{Listing, listing};
use crate::navigate::resolve;
use crate::path::TreePath;
use crate::store::TreeStore;
use crate::tree::Directory;

/// Fixed message shown in the listing region when loading fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading repository structure";

/// Progress of the one-time structure load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    /// Load failed; carries the error description
    Failed(String),
}

/// Both display regions for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub path: TreePath,
    pub breadcrumb: Vec<Crumb>,
    pub listing: Listing,
}

impl View {
    fn render(dir: &Directory, path: TreePath) -> Self {
        Self {
            breadcrumb: breadcrumb(&path),
            listing: listing(dir, &path),
            path,
        }
    }
}

/// Browser state machine.
///
/// Starts with an empty store and no view. [`Browser::load`] is accepted once;
/// a successful load renders the root. Every [`Browser::navigate`] either
/// replaces the view or fails and leaves it exactly as it was.
#[derive(Debug, Default)]
pub struct Browser {
    store: TreeStore,
    load_state: LoadState,
    view: Option<View>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of fetching the structure document.
    ///
    /// Only the first call has any effect; later calls return
    /// [`StoreError::AlreadyLoaded`].
    pub fn load(&mut self, result: Result<Directory, LoadError>) -> Result<&View, LoadError> {
        if self.load_state != LoadState::Pending {
            return Err(StoreError::AlreadyLoaded.into());
        }

        let root = match result {
            Ok(root) => root,
            Err(err) => {
                self.load_state = LoadState::Failed(err.to_string());
                return Err(err);
            }
        };

        let view = View::render(&root, TreePath::root());
        self.store.set(root)?;
        self.load_state = LoadState::Loaded;
        Ok(&*self.view.insert(view))
    }

    /// Navigate to a raw path string.
    pub fn navigate(&mut self, raw: &str) -> Result<&View, NavError> {
        self.navigate_to(TreePath::parse(raw))
    }

    /// Navigate to a parsed path. On failure the current view is kept.
    pub fn navigate_to(&mut self, path: TreePath) -> Result<&View, NavError> {
        let root = self.store.get().ok_or(NavError::NotLoaded)?;
        let dir = resolve(root, &path)?;
        let view = View::render(dir, path);
        Ok(&*self.view.insert(view))
    }

    /// Resolve a path without touching the view.
    pub fn resolve(&self, path: &TreePath) -> Result<&Directory, NavError> {
        let root = self.store.get().ok_or(NavError::NotLoaded)?;
        resolve(root, path)
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn tree(&self) -> Option<&Directory> {
        self.store.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::RowAction;

    const DOC: &str = r#"{
        "a": {
            "b": {
                "c": {},
                "pkg.apk": { "type": "apk", "size": 2048 }
            },
            "readme.html": { "type": "html", "size": 500 }
        },
        "keys": { "signing.pub": { "type": "pub", "size": 800 } },
        "empty": {}
    }"#;

    fn loaded() -> Browser {
        let mut browser = Browser::new();
        browser.load(Directory::from_json(DOC)).unwrap();
        browser
    }

    #[test]
    fn test_initial_state() {
        let browser = Browser::new();
        assert_eq!(browser.load_state(), &LoadState::Pending);
        assert!(browser.view().is_none());
        assert!(browser.tree().is_none());
    }

    #[test]
    fn test_load_renders_root() {
        let mut browser = Browser::new();
        let view = browser.load(Directory::from_json(DOC)).unwrap();

        assert!(view.path.is_root());
        assert_eq!(view.breadcrumb.len(), 1);
        let names: Vec<_> = view.listing.rows().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["a", "empty", "keys"]);
        assert_eq!(browser.load_state(), &LoadState::Loaded);
    }

    #[test]
    fn test_load_failure_leaves_store_empty() {
        let mut browser = Browser::new();
        let err = browser
            .load(Err(LoadError::Fetch("connection refused".to_string())))
            .unwrap_err();

        assert_eq!(err, LoadError::Fetch("connection refused".to_string()));
        assert!(matches!(browser.load_state(), LoadState::Failed(_)));
        assert!(browser.view().is_none());
        assert!(browser.tree().is_none());
        assert_eq!(browser.navigate(""), Err(NavError::NotLoaded));
    }

    #[test]
    fn test_root_file_document_fails_load() {
        let mut browser = Browser::new();
        let result = Directory::from_json(r#"{ "type": "html" }"#);
        assert_eq!(browser.load(result), Err(LoadError::RootIsFile));
        assert!(matches!(browser.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn test_load_happens_once() {
        let mut browser = loaded();
        let second = browser.load(Ok(Directory::new()));

        assert_eq!(second, Err(LoadError::Store(StoreError::AlreadyLoaded)));
        assert_eq!(browser.tree().map(Directory::len), Some(3));

        let mut failed = Browser::new();
        let _ = failed.load(Err(LoadError::Parse("bad".to_string())));
        assert!(failed.load(Directory::from_json(DOC)).is_err());
        assert!(failed.tree().is_none());
    }

    #[test]
    fn test_navigate_before_load() {
        let mut browser = Browser::new();
        assert_eq!(browser.navigate("a"), Err(NavError::NotLoaded));
    }

    #[test]
    fn test_navigate_renders_both_regions() {
        let mut browser = loaded();
        let view = browser.navigate("/a//b/").unwrap();

        assert_eq!(view.path.to_string(), "a/b");
        let labels: Vec<_> = view.breadcrumb.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["root", "a", "b"]);
        assert_eq!(
            view.listing.rows()[1].action,
            RowAction::Link("a/b/pkg.apk".to_string())
        );
    }

    #[test]
    fn test_navigate_to_file_keeps_view() {
        let mut browser = loaded();
        browser.navigate("a").unwrap();
        let before = browser.view().cloned();

        assert!(matches!(
            browser.navigate("a/readme.html"),
            Err(NavError::NotADirectory { .. })
        ));
        assert_eq!(browser.view().cloned(), before);
    }

    #[test]
    fn test_navigate_to_missing_keeps_view() {
        let mut browser = loaded();
        browser.navigate("keys").unwrap();
        let before = browser.view().cloned();

        assert_eq!(
            browser.navigate("keys/nope"),
            Err(NavError::NotFound {
                segment: "nope".to_string(),
                parent: "keys".to_string(),
            })
        );
        assert_eq!(browser.view().cloned(), before);
    }

    #[test]
    fn test_empty_directory_view() {
        let mut browser = loaded();
        let view = browser.navigate("empty").unwrap();
        assert_eq!(view.listing, Listing::Empty);
    }

    #[test]
    fn test_breadcrumb_targets_match_direct_navigation() {
        let mut browser = loaded();
        for raw in ["", "a", "a/b", "a/b/c", "keys", "empty"] {
            let crumbs = browser.navigate(raw).unwrap().breadcrumb.clone();
            for crumb in crumbs {
                let via_crumb = browser.navigate_to(crumb.target.clone()).unwrap().clone();
                let direct = browser.navigate(&crumb.target.to_string()).unwrap().clone();
                assert_eq!(via_crumb, direct);
                assert_eq!(
                    browser.resolve(&crumb.target),
                    browser.resolve(&TreePath::parse(&crumb.target.to_string()))
                );
            }
        }
    }

    #[test]
    fn test_breadcrumb_round_trip() {
        let mut browser = loaded();
        let crumbs = browser.navigate("a/b").unwrap().breadcrumb.clone();
        let a_crumb = crumbs.iter().find(|c| c.label == "a").unwrap();

        let via_crumb = browser.navigate_to(a_crumb.target.clone()).unwrap().listing.clone();
        let direct = browser.navigate("a").unwrap().listing.clone();
        assert_eq!(via_crumb, direct);
        assert_eq!(browser.resolve(&a_crumb.target), browser.resolve(&"a".into()));
    }
}
