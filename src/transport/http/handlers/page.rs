use axum::response::Html;

const DEPLOY_PAGE: &str = include_str!("../deploy_page.html");

/// Deploy page: file chooser plus "Deploy" and "Lamports" buttons.
pub async fn deploy_page_handler() -> Html<&'static str> {
    Html(DEPLOY_PAGE)
}
