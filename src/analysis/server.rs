use super::API;
use super::handlers;
use crate::Config;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(api: API, config: &Config) -> Result<(), std::io::Error> {
        let api = web::Data::new(api);
        log::info!("starting HTTP server on {}", config.bind);
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(api.clone())
                .configure(routes)
        });
        match config.workers {
            Some(n) => server.workers(n.get()),
            None => server,
        }
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}

/// Route table, shared by the server and the handler tests.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/",                                  web::get().to(handlers::welcome))
       .route("/health",                            web::get().to(handlers::health))
       .route("/api/v1.0/precipitation",            web::get().to(handlers::precipitation))
       .route("/api/v1.0/stations",                 web::get().to(handlers::stations))
       .route("/api/v1.0/tobs",                     web::get().to(handlers::tobs))
       .route("/api/v1.0/start/{start}",            web::get().to(handlers::start))
       .route("/api/v1.0/start/{start}/end/{end}",  web::get().to(handlers::start_end));
}
