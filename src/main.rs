use actix_web::{App, HttpServer, web};

use grocery_catalog::db::establish_connection_pool;
use grocery_catalog::models::config::ServerConfig;
use grocery_catalog::repository::DieselRepository;
use grocery_catalog::routes::{json_config, main::health};
use grocery_catalog::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::load().map_err(|err| {
        log::error!("Failed to load configuration: {err}");
        std::io::Error::other(err)
    })?;

    let pool = establish_connection_pool(&config.database_url).map_err(|err| {
        log::error!("Failed to establish database pool: {err}");
        std::io::Error::other(err)
    })?;
    let repo = DieselRepository::new(pool);

    log::info!(
        "Starting grocery catalog server on {}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(json_config())
            .app_data(web::Data::new(repo.clone()))
            .service(health)
            .service(
                web::scope("/products")
                    .service(list_products)
                    .service(get_product)
                    .service(create_product)
                    .service(update_product)
                    .service(delete_product),
            )
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
