use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

mod database;
mod middleware;
mod post;
mod router;
mod utils;

use middleware::not_found::not_found;
use post::post_service::PostService;
use router::index::routes;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Found()
        .insert_header(("Location", "/posts"))
        .finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let pool = database::db::connect_to_sqlite()
        .await
        .expect("Failed to connect to SQLite");

    let post_service = web::Data::new(PostService::new(pool));

    let host = std::env::var("HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    // Log the server start
    info!("Starting server on http://{host}:{port}");

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(post_service.clone())
            .configure(routes)
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
            .service(default)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    // Log after server has started (this line will only be reached when the server shuts down)
    info!("Server has stopped");

    Ok(())
}
