use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{dashboard_context, render_template};
use crate::services::years::YearCache;
use crate::services::{DashboardQuery, customers as customer_service, sales as sales_service};

#[get("/")]
pub async fn show_sales_overview(
    params: web::Query<DashboardQuery>,
    repo: web::Data<DieselRepository>,
    years: web::Data<YearCache>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match sales_service::load_sales_overview(repo.get_ref(), years.get_ref(), params.0) {
        Ok(data) => match dashboard_context(&data) {
            Ok(context) => render_template(&tera, "dashboard/sales.html", &context),
            Err(err) => {
                log::error!("Failed to build the sales overview context: {err}");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(err) => {
            log::error!("Failed to load the sales overview: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/customers")]
pub async fn show_customer_analysis(
    params: web::Query<DashboardQuery>,
    repo: web::Data<DieselRepository>,
    years: web::Data<YearCache>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customer_service::load_customer_analysis(repo.get_ref(), years.get_ref(), params.0) {
        Ok(data) => match dashboard_context(&data) {
            Ok(context) => render_template(&tera, "dashboard/customers.html", &context),
            Err(err) => {
                log::error!("Failed to build the customer analysis context: {err}");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(err) => {
            log::error!("Failed to load the customer analysis: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
