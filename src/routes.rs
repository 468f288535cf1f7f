use actix_web::{web, Scope};

use crate::handlers::{featured_books, health_check, recommendations_config};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(featured_books)
        .configure(recommendations_config)
}
