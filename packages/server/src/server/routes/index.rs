use axum::response::Html;

use crate::server::templates::render_index;

/// Upload form page
pub async fn index_handler() -> Html<String> {
    Html(render_index(None))
}
