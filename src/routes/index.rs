use actix_web::HttpResponse;

/// Describe the service and its endpoints.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Random Address Generator API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/address": "Generate a single random address",
            "/addresses": "Generate multiple random addresses (use count parameter)",
            "/countries": "Get list of supported countries",
        }
    }))
}
