use actix_web::HttpResponse;
use serde_json::json;

pub async fn hello_world() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello from Django Backend!" }))
}

pub async fn root_view() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome to the Django Backend!" }))
}
