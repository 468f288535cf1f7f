use actix_web::{get, web, HttpResponse};

use crate::services::FeaturedCatalog;

/// Serves the bundled featured shelf and search suggestions.
#[get("/books/featured")]
pub async fn featured_books(catalog: web::Data<FeaturedCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.get_ref())
}
