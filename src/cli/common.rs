//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use url::Url;

use crate::collab::{self, Libs};
use crate::config::BrickConfig;
use crate::dom::{Document, parse_document};
use crate::page::{PageReport, decorate_page};

/// An input HTML file and its path relative to the input it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative: PathBuf,
}

/// Expand files and directories into the HTML files to process.
///
/// Directories are walked recursively for `*.html`; explicit files are
/// taken as given.
pub fn collect_html_files(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            let relative = path.file_name().map(PathBuf::from).unwrap_or_else(|| path.clone());
            files.push(SourceFile {
                path: path.clone(),
                relative,
            });
        } else if path.is_dir() {
            let mut found: Vec<_> = WalkDir::new(path)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
                .map(|e| e.path())
                .filter(|p| is_html(p))
                .collect();
            found.sort();
            files.extend(found.into_iter().map(|file| {
                let relative = file.strip_prefix(path).unwrap_or(&file).to_path_buf();
                SourceFile {
                    path: file,
                    relative,
                }
            }));
        } else {
            bail!("Path not found: {}", path.display());
        }
    }
    Ok(files)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Read, parse and decorate one page.
pub async fn decorate_file(path: &Path, config: &BrickConfig) -> Result<(Document, PageReport)> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    decorate_html(&html, config).await
}

/// Decorate a page held in memory.
///
/// Each page gets its own collaborator set, loaded for the page URL.
pub async fn decorate_html(html: &str, config: &BrickConfig) -> Result<(Document, PageReport)> {
    let page_url = config.page.url.as_deref().map(Url::parse).transpose()?;
    let libs = Libs::resolve(&config.libs, page_url.as_ref());
    let collab = collab::load(libs, &config.analytics).await?;

    let mut doc = parse_document(html);
    let mut report = decorate_page(&mut doc.root, &collab, config).await?;
    report.libs = collab.libs().base().to_string();
    Ok((doc, report))
}

/// `1 file`, `3 files`.
pub fn plural_count(count: usize, noun: &str) -> String {
    let s = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{s}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_walks_directories_for_html() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("en/sub")).unwrap();
        fs::write(dir.path().join("en/index.html"), "").unwrap();
        fs::write(dir.path().join("en/sub/page.HTML"), "").unwrap();
        fs::write(dir.path().join("en/notes.txt"), "").unwrap();

        let files = collect_html_files(&[dir.path().to_path_buf()]).unwrap();
        let relative: Vec<_> = files.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(
            relative,
            vec![PathBuf::from("en/index.html"), PathBuf::from("en/sub/page.HTML")]
        );
    }

    #[test]
    fn test_collect_single_file_and_missing_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("home.html");
        fs::write(&file, "").unwrap();

        let files = collect_html_files(std::slice::from_ref(&file)).unwrap();
        assert_eq!(files[0].relative, PathBuf::from("home.html"));

        let missing = collect_html_files(&[dir.path().join("nope")]);
        assert!(missing.is_err());
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(1, "block"), "1 block");
        assert_eq!(plural_count(0, "file"), "0 files");
    }

    #[tokio::test]
    async fn test_decorate_html_uses_page_url() {
        let mut config = BrickConfig::default();
        config.page.url = Some("https://www.example.com/en/".to_string());
        let html = r#"<!DOCTYPE html><main><div class="homepage-brick"><div><div><p><a href="offers">Offers</a></p></div></div></div></main>"#;

        let (doc, report) = decorate_html(html, &config).await.unwrap();
        assert_eq!(report.decorated(), 1);
        let anchor = doc.root.find_first(|e| e.has_class("foreground")).unwrap();
        assert_eq!(
            doc.root.get(&anchor).unwrap().get_attr("href"),
            Some("https://www.example.com/en/offers")
        );
        assert!(doc.to_html().starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_decorate_html_keeps_inline_scripts() {
        let script = "<script>for (var i = 0; i<n; i++) { go(i); }</script>";
        let html = format!(
            r#"<!DOCTYPE html><html><head>{script}</head><body><main><div class="homepage-brick"><div><div><h2>Hi</h2></div></div></div></main></body></html>"#
        );

        let (doc, report) = decorate_html(&html, &BrickConfig::default()).await.unwrap();
        assert_eq!(report.decorated(), 1);
        let out = doc.to_html();
        assert!(out.contains(&format!("<head>{script}</head><body><main>")));
        assert!(out.ends_with("</main></body></html>"));
    }
}
