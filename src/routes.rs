use actix_web::{web, HttpRequest};

use crate::handlers::{department, fallback, greeting, location};

const READ_ONLY: &str = "GET, HEAD";
const LIST_CREATE: &str = "GET, HEAD, POST";

/// Mounts every endpoint under `/api`. Expects `web::Data<dyn Store>` to be
/// registered on the app and trailing slashes to be normalized beforehand.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/")
                    .route(web::get().to(greeting::root_view))
                    .route(web::head().to(greeting::root_view))
                    .default_service(web::to(|req: HttpRequest| {
                        fallback::method_not_allowed(req, READ_ONLY)
                    })),
            )
            .service(
                web::resource("/hello/")
                    .route(web::get().to(greeting::hello_world))
                    .route(web::head().to(greeting::hello_world))
                    .default_service(web::to(|req: HttpRequest| {
                        fallback::method_not_allowed(req, READ_ONLY)
                    })),
            )
            .service(
                web::resource("/departments/")
                    .name("departments-list-create")
                    .route(web::get().to(department::get_departments))
                    .route(web::head().to(department::get_departments))
                    .route(web::post().to(department::create_department))
                    .default_service(web::to(|req: HttpRequest| {
                        fallback::method_not_allowed(req, LIST_CREATE)
                    })),
            )
            .service(
                web::resource("/locations/")
                    .name("locations-list-create")
                    .route(web::get().to(location::get_locations))
                    .route(web::head().to(location::get_locations))
                    .route(web::post().to(location::create_location))
                    .default_service(web::to(|req: HttpRequest| {
                        fallback::method_not_allowed(req, LIST_CREATE)
                    })),
            ),
    )
    .default_service(web::to(fallback::not_found));
}
