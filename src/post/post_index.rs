use super::post_controller::{handle_submission, list_posts, new_post};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(list_posts))
            .route("", web::post().to(handle_submission))
            .route("/new", web::get().to(new_post)),
    );
}
