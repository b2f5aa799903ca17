// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Report liveness and whether a camp lookup is in flight

use crate::services::{CampLocator, LocationProvider};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check<P: LocationProvider + 'static>(
    locator: web::Data<CampLocator<P>>,
) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "lookup_in_flight": locator.is_busy()
    }))
}

pub fn config<P: LocationProvider + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check::<P>));
}
