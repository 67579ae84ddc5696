//! Command-line companion to the repository browser.
//!
//! - `generate` scans a directory and emits the structure document the
//!   browser page fetches
//! - `ls` loads a structure document and prints the breadcrumb and listing
//!   the page would show for a path

pub mod scan;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use repo_browser_core::{
    Browser, Directory, EMPTY_DIRECTORY_MESSAGE, Listing, LoadError, NavError, View,
};
use thiserror::Error;

/// Structure document generator and viewer.
#[derive(Debug, Parser)]
#[command(name = "repo-browser-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a directory and print its structure document
    Generate {
        /// Directory to scan
        #[arg(env = "REPO_DIR", default_value = "gh-pages")]
        dir: PathBuf,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the listing of a path inside a structure document
    Ls {
        /// Structure document (structure.json)
        file: PathBuf,
        /// Directory path inside the tree (root when omitted)
        #[arg(default_value = "")]
        path: String,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode structure document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Nav(#[from] NavError),
}

/// Execute a parsed command, writing normal output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Command::Generate { dir, output } => {
            let tree = scan::scan_directory(&dir).map_err(|source| CliError::Io {
                path: dir.clone(),
                source,
            })?;
            let json = serde_json::to_string_pretty(&tree)?;
            match output {
                Some(path) => fs::write(&path, format!("{json}\n"))
                    .map_err(|source| CliError::Io { path, source })?,
                None => writeln!(out, "{json}")?,
            }
        }
        Command::Ls { file, path } => {
            let json = fs::read_to_string(&file).map_err(|source| CliError::Io {
                path: file.clone(),
                source,
            })?;
            let mut browser = Browser::new();
            browser.load(Directory::from_json(&json))?;
            let view = browser.navigate(&path)?;
            write!(out, "{}", render_view(view))?;
        }
    }
    Ok(())
}

/// Render a view as terminal text: breadcrumb line, then one row per entry.
pub fn render_view(view: &View) -> String {
    let trail: Vec<&str> = view.breadcrumb.iter().map(|c| c.label.as_str()).collect();
    let mut text = format!("{}\n", trail.join(" / "));

    match &view.listing {
        Listing::Empty => {
            text.push_str(EMPTY_DIRECTORY_MESSAGE);
            text.push('\n');
        }
        Listing::Entries(rows) => {
            let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
            for row in rows {
                let name = if row.is_directory() {
                    format!("{}/", row.name)
                } else {
                    row.name.clone()
                };
                let size = row.size.as_deref().unwrap_or("");
                let line = format!("{} {:<w$}  {:>9}", row.icon.glyph(), name, size, w = width + 1);
                text.push_str(line.trim_end());
                text.push('\n');
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "x86_64": {
            "app.apk": { "type": "apk", "size": 1536 },
            "old": {}
        },
        "KEY.pub": { "type": "pub", "size": 451 }
    }"#;

    fn ls(doc: &str, path: &str) -> Result<String, CliError> {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("structure.json");
        fs::write(&file, doc).unwrap();

        let cli = Cli::parse_from(["repo-browser-cli", "ls", file.to_str().unwrap(), path]);
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_ls_root() {
        let out = ls(DOC, "").unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "root");
        assert!(lines[1].starts_with("📁 x86_64/"));
        assert!(lines[2].starts_with("🔑 KEY.pub"));
        assert!(lines[2].ends_with("451.0 B"));
    }

    #[test]
    fn test_ls_nested() {
        let out = ls(DOC, "/x86_64/").unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "root / x86_64");
        assert_eq!(lines[1], "📁 old/");
        assert!(lines[2].starts_with("📦 app.apk"));
        assert!(lines[2].ends_with("1.5 KB"));
    }

    #[test]
    fn test_ls_empty_directory() {
        let out = ls(DOC, "x86_64/old").unwrap();
        assert_eq!(out, "root / x86_64 / old\nThis directory is empty\n");
    }

    #[test]
    fn test_ls_errors() {
        assert!(matches!(
            ls(DOC, "KEY.pub"),
            Err(CliError::Nav(NavError::NotADirectory { .. }))
        ));
        assert!(matches!(
            ls(DOC, "missing"),
            Err(CliError::Nav(NavError::NotFound { .. }))
        ));
        assert!(matches!(
            ls(r#"{ "type": "apk" }"#, ""),
            Err(CliError::Load(LoadError::RootIsFile))
        ));
    }

    #[test]
    fn test_generate_to_file() {
        let tmp = TempDir::new().unwrap();
        let repo = tmp.path().join("repo");
        fs::create_dir_all(repo.join("keys")).unwrap();
        fs::write(repo.join("keys/a.pub"), "abc").unwrap();
        let output = tmp.path().join("structure.json");

        let cli = Cli::parse_from([
            "repo-browser-cli",
            "generate",
            repo.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        let mut out = Vec::new();
        run(cli, &mut out).unwrap();

        assert!(out.is_empty());
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "{\n  \"keys\": {\n    \"a.pub\": {\n      \"type\": \"pub\",\n      \"size\": 3\n    }\n  }\n}\n"
        );
        assert!(Directory::from_json(&written).is_ok());
    }
}
