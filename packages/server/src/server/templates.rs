//! Upload page rendering.

use rust_embed::RustEmbed;

// Embedded at compile time from packages/server/templates
#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

const ERROR_PLACEHOLDER: &str = "{{error}}";

/// Render the upload page, optionally with an error message.
pub fn render_index(error: Option<&str>) -> String {
    let page = Templates::get("index.html")
        .map(|file| String::from_utf8_lossy(&file.data).into_owned())
        .unwrap_or_else(|| format!("<!doctype html><html><body>{}</body></html>", ERROR_PLACEHOLDER));

    let error_block = match error {
        Some(message) => format!(
            r#"<p class="error" role="alert">{}</p>"#,
            html_escape::encode_text(message)
        ),
        None => String::new(),
    };

    page.replace(ERROR_PLACEHOLDER, &error_block)
}
