//! Content discovery: turning a directory of markdown files into pages.
//!
//! Routes mirror the file tree: `about/what-is-depin.md` under the content
//! root becomes the route `/about/what-is-depin`. The navigation map is
//! fixed configuration, so a file with no map entry is still loadable (it
//! just has no sidebar link or footer neighbors) and a map entry with no
//! file renders a placeholder.

use crate::markdown;
use crate::page::Page;
use std::io;
use std::path::{Path, PathBuf};

/// Collect documentation sources under the given paths.
///
/// Directories are walked recursively; files are kept when their extension
/// matches one of `extensions`. The result is sorted for stable ordering.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: &[PathBuf], extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        collect(path, extensions, &mut found)?;
    }
    found.sort();
    Ok(found)
}

fn collect(path: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> io::Result<()> {
    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            collect(&entry?.path(), extensions, found)?;
        }
        return Ok(());
    }
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext));
    if matches {
        found.push(path.to_path_buf());
    }
    Ok(())
}

/// Load every page under a content root.
///
/// # Errors
///
/// Returns an error if the root cannot be walked, a source cannot be read,
/// or markdown parsing fails.
pub fn load_pages(root: &Path, extensions: &[String]) -> io::Result<Vec<Page>> {
    let sources = find_documents(&[root.to_path_buf()], extensions)?;
    let mut pages = Vec::with_capacity(sources.len());
    for source_path in sources {
        let source = std::fs::read_to_string(&source_path)?;
        let document = markdown::parse(&source)?;
        let route = route_for(root, &source_path);
        let title = document
            .title()
            .map_or_else(|| stem_title(&source_path), ToString::to_string);
        pages.push(Page::new(route, title, document));
    }
    Ok(pages)
}

/// Site route for a content file relative to the content root.
fn route_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let without_ext = relative.with_extension("");
    let mut route = String::from("/");
    let joined = without_ext
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    route.push_str(&joined);
    route
}

fn stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace('-', " "))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
