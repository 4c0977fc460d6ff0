use actix_web::{get, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serves the single-page exam screen.
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
