use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use warehouse_dashboard::config::AppConfig;
use warehouse_dashboard::db::establish_connection_pool;
use warehouse_dashboard::repository::DieselRepository;
use warehouse_dashboard::routes::api::{api_v1_customers, api_v1_sales, api_v1_years};
use warehouse_dashboard::routes::dashboard::{show_customer_analysis, show_sales_overview};
use warehouse_dashboard::services::years::YearCache;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish warehouse connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    let year_cache = web::Data::new(YearCache::new());

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let bind_address = config.bind_address.clone();
    let bind_port = config.bind_port;

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_sales_overview)
            .service(show_customer_analysis)
            .service(api_v1_years)
            .service(api_v1_sales)
            .service(api_v1_customers)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(year_cache.clone())
    })
    .bind((bind_address, bind_port))?
    .run()
    .await
}
