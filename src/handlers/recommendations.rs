use crate::{
    error::ApiError,
    models::{RecommendationRequest, RecommendationsView},
    services::RecommendationService,
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/recommendations").route(web::post().to(get_recommendations)));
}

/// Get book recommendations for a title the reader loved. Input checks
/// live in the service so they run identically for every caller.
pub async fn get_recommendations(
    request: Json<RecommendationRequest>,
    recommendation_service: web::Data<RecommendationService>,
) -> Result<HttpResponse, ApiError> {
    let recommendations = recommendation_service
        .recommend(&request.book, &request.preferences)
        .await?;

    Ok(HttpResponse::Ok().json(RecommendationsView::new(
        request.book.trim(),
        recommendations,
    )))
}
