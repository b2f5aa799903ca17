// src/handlers/camps.rs
// DOCUMENTATION: HTTP handlers for camp lookups
// PURPOSE: Run lookups and expose the locator status as JSON

use crate::errors::LookupError;
use crate::models::LookupStatus;
use crate::services::{CampLocator, LocationProvider};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

/// Query string of GET /camps
#[derive(Debug, Deserialize)]
pub struct CampSearchQuery {
    /// Raw user input; validated by the locator
    #[serde(default)]
    pub zip: String,
}

/// GET /camps?zip=12345
/// Look up campgrounds near a zip code
pub async fn find_camps<P: LocationProvider + 'static>(
    locator: web::Data<CampLocator<P>>,
    query: web::Query<CampSearchQuery>,
) -> Result<impl Responder, LookupError> {
    match locator.lookup(&query.zip).await {
        LookupStatus::Error(e) => Err(e),
        status => Ok(HttpResponse::Ok().json(status)),
    }
}

/// GET /camps/status
/// Current locator status
pub async fn lookup_status<P: LocationProvider + 'static>(
    locator: web::Data<CampLocator<P>>,
) -> impl Responder {
    HttpResponse::Ok().json(locator.status())
}

/// Configuration for camp routes
pub fn config<P: LocationProvider + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/camps")
            .route("", web::get().to(find_camps::<P>))
            .route("/status", web::get().to(lookup_status::<P>)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use crate::services::camp_locator::tests::{place, FakeProvider};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    fn locator_with(provider: FakeProvider) -> web::Data<CampLocator<FakeProvider>> {
        web::Data::new(CampLocator::new(provider))
    }

    #[actix_web::test]
    async fn test_find_camps_success() {
        let locator = locator_with(FakeProvider::returning(
            Ok(Coordinate::new(40.0, -75.0)),
            Ok(vec![place("p1", "Camp A", "1 Main St")]),
        ));
        let app = test::init_service(
            App::new()
                .app_data(locator.clone())
                .configure(config::<FakeProvider>),
        )
        .await;

        let req = test::TestRequest::get().uri("/camps?zip=00000").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["state"], "success");
        assert_eq!(body["camps"][0]["id"], "p1");
        assert_eq!(
            body["camps"][0]["link"],
            "https://www.google.com/maps/place/?q=place_id:p1"
        );

        let req = test::TestRequest::get().uri("/camps/status").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["state"], "success");
    }

    #[actix_web::test]
    async fn test_find_camps_error_mapping() {
        let cases = [
            ("/camps?zip=abc12", FakeProvider::default(), StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            ("/camps", FakeProvider::default(), StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            (
                "/camps?zip=99999",
                FakeProvider::returning(Ok(None), Ok(vec![])),
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
            ),
            (
                "/camps?zip=12345",
                FakeProvider::returning(Ok(Coordinate::new(1.0, 2.0)), Ok(vec![])),
                StatusCode::NOT_FOUND,
                "EMPTY_RESULTS",
            ),
            (
                "/camps?zip=12345",
                FakeProvider::returning(
                    Err(LookupError::TransportOrParse("timed out".to_string())),
                    Ok(vec![]),
                ),
                StatusCode::BAD_GATEWAY,
                "TRANSPORT_OR_PARSE",
            ),
        ];

        for (uri, provider, expected_status, expected_code) in cases {
            let app = test::init_service(
                App::new()
                    .app_data(locator_with(provider))
                    .configure(config::<FakeProvider>),
            )
            .await;

            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected_status, "{}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], expected_code, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_status_starts_idle() {
        let app = test::init_service(
            App::new()
                .app_data(locator_with(FakeProvider::default()))
                .configure(config::<FakeProvider>),
        )
        .await;

        let req = test::TestRequest::get().uri("/camps/status").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({ "state": "idle" }));
    }
}
