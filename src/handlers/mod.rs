pub mod destination;
pub mod location;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::StatusResponse;

pub use destination::{set_alert_radius, set_destination};
pub use location::location;

pub async fn status() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusResponse::running()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, create_router, services::destination::DestinationService};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt; // for oneshot

    fn test_app() -> axum::Router {
        create_router(Arc::new(DestinationService::default()), &Config::default())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let response = test_app()
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "Server is running"}));
    }

    #[tokio::test]
    async fn test_set_destination_missing_latitude() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_json("/set_destination", json!({"longitude": 3.0})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Missing required field: latitude"})
        );

        // Rejected request leaves the destination unset
        let response = app
            .oneshot(post_json("/location", json!({"latitude": 0.0, "longitude": 3.0})))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({"alert": "No destination set"}));
    }

    #[tokio::test]
    async fn test_set_destination_missing_longitude() {
        let response = test_app()
            .oneshot(post_json("/set_destination", json!({"latitude": 3.0})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_location_with_out_of_range_latitude_after_destination() {
        let app = test_app();

        app.clone()
            .oneshot(post_json("/set_destination", json!({"latitude": 0.0, "longitude": 0.0})))
            .await
            .unwrap();

        let response = app
            .oneshot(post_json("/location", json!({"latitude": -91.0, "longitude": 0.0})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Latitude must be between -90 and 90 degrees, got -91"})
        );
    }

    #[tokio::test]
    async fn test_location_with_malformed_body_is_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/location")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_location_with_non_numeric_coordinate_is_rejected() {
        let response = test_app()
            .oneshot(post_json(
                "/location",
                json!({"latitude": "north", "longitude": 0.0}),
            ))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .header(header::ORIGIN, "http://127.0.0.1:5500")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://127.0.0.1:5500"
        );
    }

    #[tokio::test]
    async fn test_cors_ignores_unknown_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Server-to-server callers still get a response, just without the CORS grant
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_preflight_for_deployed_origin() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/location")
                    .header(header::ORIGIN, "https://locationtrackerappui.onrender.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://locationtrackerappui.onrender.com"
        );
    }
}
