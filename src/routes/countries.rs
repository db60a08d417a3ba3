use crate::domain::CountrySummary;
use crate::generator::AddressGenerator;
use actix_web::{HttpResponse, web};

#[derive(serde::Serialize)]
struct CountriesResponse {
    countries: Vec<CountrySummary>,
}

#[tracing::instrument(name = "Listing supported countries", skip(generator))]
pub async fn list_countries(generator: web::Data<AddressGenerator>) -> HttpResponse {
    HttpResponse::Ok().json(CountriesResponse {
        countries: generator.list_countries(),
    })
}
