use axum::response::IntoResponse;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate)
}
