//! Application configuration.
//!
//! Centralizes the constants used by the web app.

// =============================================================================
// Application Metadata
// =============================================================================

/// Page title shown above the breadcrumb.
pub const APP_TITLE: &str = "Repository Browser";

// =============================================================================
// Structure Document
// =============================================================================

/// Location of the structure document, relative to the page.
pub const STRUCTURE_URL: &str = "structure.json";

/// Shown in the listing region until the structure document arrives.
pub const LOADING_MESSAGE: &str = "Loading repository structure...";

// =============================================================================
// Display Regions
// =============================================================================

/// Element id of the breadcrumb region.
pub const BREADCRUMB_REGION_ID: &str = "breadcrumb";

/// Element id of the file listing region.
pub const FILE_LIST_REGION_ID: &str = "fileList";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
