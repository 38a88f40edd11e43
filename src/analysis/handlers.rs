use super::API;
use crate::window::Window;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header::ContentType;
use actix_web::web;

#[rustfmt::skip]
const WELCOME: &str = const_format::concatcp!(
    "Welcome to the Hawaiian Weather API!<br/><br/>",
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/><br/>",
    "Available Routes with Customizable Input:<br/>",
    "/api/v1.0/start/yyyy-mm-dd<br/>",
    "/api/v1.0/start/yyyy-mm-dd/end/yyyy-mm-dd"
);

pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(WELCOME)
}
pub async fn health(api: web::Data<API>) -> impl Responder {
    match api
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {:#}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}
pub async fn precipitation(api: web::Data<API>) -> impl Responder {
    match api
        .precipitation()
        .await
        .inspect_err(|e| log::error!("precipitation: {:#}", e))
    {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(rows) => HttpResponse::Ok().json(rows),
    }
}
pub async fn stations(api: web::Data<API>) -> impl Responder {
    match api
        .stations()
        .await
        .inspect_err(|e| log::error!("stations: {:#}", e))
    {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(rows) => HttpResponse::Ok().json(rows),
    }
}
pub async fn tobs(api: web::Data<API>) -> impl Responder {
    match api
        .tobs()
        .await
        .inspect_err(|e| log::error!("tobs: {:#}", e))
    {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(rows) => HttpResponse::Ok().json(rows),
    }
}
/// Out-of-range dates answer 200 with a JSON string, not an error status.
pub async fn start(api: web::Data<API>, path: web::Path<String>) -> impl Responder {
    match Window::starting(path.into_inner()) {
        Err(bounds) => HttpResponse::Ok().json(bounds.to_string()),
        Ok(window) => summarize(&api, &window).await,
    }
}
/// Same contract as [`start`]. No check that `end >= start`.
pub async fn start_end(api: web::Data<API>, path: web::Path<(String, String)>) -> impl Responder {
    let (start, end) = path.into_inner();
    match Window::between(start, end) {
        Err(bounds) => HttpResponse::Ok().json(bounds.to_string()),
        Ok(window) => summarize(&api, &window).await,
    }
}
async fn summarize(api: &API, window: &Window) -> HttpResponse {
    match api
        .summary(window)
        .await
        .inspect_err(|e| log::error!("summary {}: {:#}", window, e))
    {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(summary) => HttpResponse::Ok().json(summary),
    }
}
