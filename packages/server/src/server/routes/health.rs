/// Health check endpoint
pub async fn health_handler() -> &'static str {
    "ok"
}
