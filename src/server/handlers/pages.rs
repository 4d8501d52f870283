use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Template)]
#[template(path = "pages/chat.html")]
struct ChatTemplate<'a> {
    title: &'a str,
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn chat_page() -> Response {
    let template = ChatTemplate {
        title: "Nurse Assistant",
    };
    Html(template.render().unwrap()).into_response()
}
