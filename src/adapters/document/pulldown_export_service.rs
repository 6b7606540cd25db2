//! Pulldown-cmark based export service adapter.
//!
//! - HTML conversion using pulldown-cmark (pure Rust)
//! - PDF conversion using Pandoc (requires external Pandoc installation)

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Event, Options, Parser};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::analysis::REPORT_TITLE;
use crate::ports::{DocumentExportService, ExportError};

/// Default timeout for PDF conversion.
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 30;

/// Export service using pulldown-cmark for HTML and Pandoc for PDF.
///
/// If Pandoc is not available, PDF conversion returns `ServiceUnavailable`.
/// HTML is always available.
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,

    pdf_timeout_secs: u64,

    include_default_css: bool,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
            include_default_css: true,
        }
    }

    /// Set a custom path to the Pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Wrap an HTML body in a complete printable document.
    fn wrap_html(&self, body: String, title: &str) -> String {
        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="intake-document">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body
        )
    }

    /// First level-one heading, or the report title.
    fn extract_title(&self, markdown: &str) -> String {
        markdown
            .lines()
            .find_map(|line| line.trim().strip_prefix("# "))
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| REPORT_TITLE.to_string())
    }

    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }
}

#[async_trait]
impl DocumentExportService for PulldownExportService {
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            warn!(pandoc = self.pandoc_command(), "pandoc not found, PDF export unavailable");
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc. \
                 Install from https://pandoc.org/installing.html",
            ));
        }

        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=1in",
                "-V",
                "fontsize=11pt",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        debug!(bytes = output.stdout.len(), "pdf rendered");
        Ok(output.stdout)
    }

    async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        // Raw HTML is shown as text, never passed through as markup
        let parser = Parser::new_ext(markdown, options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

        let mut html_body = String::new();
        html::push_html(&mut html_body, parser);

        let title = self.extract_title(markdown);
        Ok(self.wrap_html(html_body, &title))
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Print-friendly stylesheet for exported intake summaries.
const DEFAULT_CSS: &str = r#"
:root {
    --accent-color: #1d4ed8;
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
    --panel-bg: #f3f4f6;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
    color: var(--text-color);
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    font-size: 1.9rem;
    border-bottom: 2px solid var(--accent-color);
    padding-bottom: 0.5rem;
}

h2 {
    font-size: 1.4rem;
    margin-top: 1.5em;
    border-bottom: 1px solid var(--border-color);
}

blockquote {
    margin: 1em 0;
    padding: 0.5em 1em;
    border-left: 4px solid var(--accent-color);
    background-color: var(--panel-bg);
    color: var(--muted-color);
}

hr {
    border: none;
    border-top: 1px solid var(--border-color);
    margin: 2em 0;
}

@media print {
    body {
        font-size: 12pt;
        padding: 0;
    }

    h1, h2 {
        page-break-after: avoid;
    }
}
"#;

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
