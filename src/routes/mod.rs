use actix_web::HttpResponse;
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::dashboard::{DashboardPage, PageLink};

pub mod api;
pub mod dashboard;

/// Build the template context for a dashboard page: the serialized page
/// data plus the sidebar navigation links.
pub(crate) fn dashboard_context<T: Serialize>(data: &T) -> Result<Context, tera::Error> {
    let mut context = Context::from_serialize(data)?;
    let nav: Vec<PageLink> = DashboardPage::ALL.into_iter().map(PageLink::from).collect();
    context.insert("nav", &nav);
    Ok(context)
}

/// Render a tera template, answering 500 when rendering fails.
pub(crate) fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
