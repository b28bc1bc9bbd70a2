use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::years::YearCache;
use crate::services::{DashboardQuery, customers as customer_service, sales as sales_service};

#[get("/v1/years")]
/// Return the calendar years available in the warehouse as JSON.
pub async fn api_v1_years(
    repo: web::Data<DieselRepository>,
    years: web::Data<YearCache>,
) -> impl Responder {
    match years.get_or_load(repo.get_ref()) {
        Ok(years) => HttpResponse::Ok().json(years),
        Err(err) => {
            log::error!("Failed to list warehouse years: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/sales")]
/// Return the sales overview payload as JSON for chart consumers.
pub async fn api_v1_sales(
    params: web::Query<DashboardQuery>,
    repo: web::Data<DieselRepository>,
    years: web::Data<YearCache>,
) -> impl Responder {
    match sales_service::load_sales_overview(repo.get_ref(), years.get_ref(), params.0) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::error!("Failed to load the sales overview: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/customers")]
/// Return the customer analysis payload as JSON for chart consumers.
pub async fn api_v1_customers(
    params: web::Query<DashboardQuery>,
    repo: web::Data<DieselRepository>,
    years: web::Data<YearCache>,
) -> impl Responder {
    match customer_service::load_customer_analysis(repo.get_ref(), years.get_ref(), params.0) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::error!("Failed to load the customer analysis: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
