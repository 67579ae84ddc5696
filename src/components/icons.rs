//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps listing icon kinds to the selected theme's icons.

use icondata::Icon;
use repo_browser_core::IconKind;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as Archive, LuFile as File, LuFileCode as Document, LuFolder as Folder,
        LuHouse as Home, LuKey as PublicKey, LuPackage as Package,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBox as Package, BsFileEarmark as File, BsFileEarmarkCode as Document,
        BsFileEarmarkZip as Archive, BsFolderFill as Folder, BsHouseFill as Home,
        BsKey as PublicKey,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(PACKAGE, Package);
themed_icon!(ARCHIVE, Archive);
themed_icon!(PUBLIC_KEY, PublicKey);
themed_icon!(DOCUMENT, Document);
themed_icon!(FILE, File);

/// Icon for a listing row.
pub fn for_kind(kind: IconKind) -> Icon {
    match kind {
        IconKind::Folder => FOLDER,
        IconKind::Package => PACKAGE,
        IconKind::Archive => ARCHIVE,
        IconKind::PublicKey => PUBLIC_KEY,
        IconKind::Document => DOCUMENT,
        IconKind::Generic => FILE,
    }
}
