use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wayfarer_api::{app, AppState};
use wayfarer_core::clock::{Clock, FixedClock};
use wayfarer_store::app_config::{BookingRules, DatabaseConfig};
use wayfarer_store::{Database, DbClient, FsBlobStore, SnapshotCache};

fn seed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 3, 1).unwrap()
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2030, 2, 20, 9, 0, 0).unwrap()))
}

async fn test_app() -> Router {
    let db = Arc::new(Database::in_memory(seed_date()).await.unwrap());
    let state = AppState::new(db, clock(), BookingRules::default()).unwrap();
    app(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn invoke(app: &Router, agent: &str, payload: Value) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/v1/agents/{}/invoke", agent))
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, envelope) = send(app, request).await;
    assert_eq!(status, StatusCode::OK, "{}", envelope);
    envelope
}

/// The function result carried as text inside the envelope.
fn result(envelope: &Value) -> Value {
    let body = envelope["response"]["functionResponse"]["responseBody"]["TEXT"]["body"]
        .as_str()
        .unwrap();
    serde_json::from_str(body).unwrap()
}

fn call(function: &str, parameters: Value) -> Value {
    json!({ "function": function, "parameters": parameters })
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_unknown_agent_is_not_found() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/v1/agents/weather-agent/invoke")
        .header("content-type", "application/json")
        .body(Body::from(call("forecast", json!([])).to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown agent: weather-agent");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/v1/agents/flight-booking-agent/invoke")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_flight_search_envelope() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "flight-booking-agent",
        json!({
            "actionGroup": "flights",
            "function": "search_flights",
            "parameters": [
                {"name": "origin", "value": "JFK"},
                {"name": "destination", "value": "Los Angeles"},
                {"name": "departure_date", "value": "2030-03-01"},
                {"name": "passengers", "value": "2"}
            ],
            "sessionAttributes": {"conversation": "abc"},
            "promptSessionAttributes": {"locale": "en-US"}
        }),
    )
    .await;

    assert_eq!(envelope["messageVersion"], "1.0");
    assert_eq!(envelope["response"]["actionGroup"], "flights");
    assert_eq!(envelope["response"]["function"], "search_flights");
    assert_eq!(envelope["sessionAttributes"], json!({"conversation": "abc"}));
    assert_eq!(envelope["promptSessionAttributes"], json!({"locale": "en-US"}));

    let body = result(&envelope);
    assert_eq!(body["success"], true);
    let outbound = body["outbound_flights"].as_array().unwrap();
    assert_eq!(outbound.len(), 3);
    assert!(outbound.iter().all(|f| f["route"]["destination"]["code"] == "LAX"));
    assert_eq!(body["return_flights"], json!([]));
}

#[tokio::test]
async fn test_flight_search_without_matches() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "flight-booking-agent",
        call(
            "search_flights",
            json!([
                {"name": "origin", "value": "JFK"},
                {"name": "destination", "value": "LAX"},
                {"name": "departure_date", "value": "2031-01-01"},
                {"name": "passengers", "value": 1}
            ]),
        ),
    )
    .await;

    assert_eq!(envelope["response"]["actionGroup"], "flight-operations");
    let body = result(&envelope);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "no_results");
    assert_eq!(body["error"], "No flights found for the specified criteria");
}

#[tokio::test]
async fn test_flight_validation_errors() {
    let app = test_app().await;

    let missing = invoke(
        &app,
        "flight-booking-agent",
        call("search_flights", json!([{"name": "origin", "value": "JFK"}])),
    )
    .await;
    let body = result(&missing);
    assert_eq!(body["error"], "Missing required parameter: destination");
    assert_eq!(body["error_type"], "validation_error");

    let too_many = invoke(
        &app,
        "flight-booking-agent",
        call(
            "search_flights",
            json!([
                {"name": "origin", "value": "JFK"},
                {"name": "destination", "value": "LAX"},
                {"name": "departure_date", "value": "2030-03-01"},
                {"name": "passengers", "value": 12}
            ]),
        ),
    )
    .await;
    assert_eq!(result(&too_many)["error"], "Passenger count must be between 1 and 9");
}

#[tokio::test]
async fn test_flight_book_then_cancel() {
    let app = test_app().await;

    let booked = invoke(
        &app,
        "flight-booking-agent",
        call(
            "book_flight",
            json!([
                {"name": "flight_id", "value": "2"},
                {"name": "passenger_details", "value": "{\"passengers\": [{\"name\": \"Ada\"}, {\"name\": \"Grace\"}]}"}
            ]),
        ),
    )
    .await;
    let body = result(&booked);
    assert_eq!(body["success"], true, "{}", body);
    let reference = body["booking_confirmation"]["booking_reference"].as_str().unwrap().to_string();
    assert!(reference.starts_with("FL20300220090000-"));
    assert_eq!(body["booking_confirmation"]["booking_date"], "2030-02-20T09:00:00Z");
    assert_eq!(
        body["message"],
        format!("Flight successfully booked! Your booking reference is {}", reference)
    );

    let cancel = call("cancel_flight", json!([{"name": "booking_reference", "value": reference}]));
    let first = result(&invoke(&app, "flight-booking-agent", cancel.clone()).await);
    assert_eq!(first["success"], true);
    assert_eq!(first["cancellation_status"]["status"], "CANCELLED");

    let second = result(&invoke(&app, "flight-booking-agent", cancel).await);
    assert_eq!(second["success"], false);
    assert_eq!(second["error_type"], "already_cancelled");
}

#[tokio::test]
async fn test_unknown_function() {
    let app = test_app().await;
    let envelope = invoke(&app, "hotel-booking-agent", call("teleport", json!([]))).await;
    let body = result(&envelope);
    assert_eq!(body["error"], "Unknown function: teleport");
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(envelope["response"]["actionGroup"], "hotel-operations");
}

#[tokio::test]
async fn test_hotel_search_and_date_checks() {
    let app = test_app().await;
    let search = |check_in: &str, check_out: &str| {
        call(
            "search_hotels",
            json!([
                {"name": "location", "value": "New York"},
                {"name": "check_in_date", "value": check_in},
                {"name": "check_out_date", "value": check_out},
                {"name": "guests", "value": "2"}
            ]),
        )
    };

    let found = result(&invoke(&app, "hotel-booking-agent", search("2030-03-10", "2030-03-13")).await);
    assert_eq!(found["success"], true, "{}", found);
    assert_eq!(found["search_criteria"]["nights"], 3);
    assert!(!found["hotels"].as_array().unwrap().is_empty());

    let inverted = result(&invoke(&app, "hotel-booking-agent", search("2030-03-13", "2030-03-10")).await);
    assert_eq!(inverted["error"], "Check-out date must be after check-in date");

    let past = result(&invoke(&app, "hotel-booking-agent", search("2030-02-01", "2030-02-03")).await);
    assert_eq!(past["error"], "Check-in date cannot be in the past");
}

#[tokio::test]
async fn test_car_booking_requires_license() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "car-rental-agent",
        call(
            "book_car",
            json!([
                {"name": "car_id", "value": "1"},
                {"name": "pickup_location_id", "value": "1"},
                {"name": "dropoff_location_id", "value": "1"},
                {"name": "pickup_date", "value": "2030-03-10 10:00:00"},
                {"name": "dropoff_date", "value": "2030-03-13 10:00:00"},
                {"name": "driver_details", "value": {"name": "Ada"}}
            ]),
        ),
    )
    .await;
    let body = result(&envelope);
    assert_eq!(body["error"], "Driver license number is required");
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_destination_info_lists_attractions_by_rating() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "travel-planner-agent",
        call("get_destination_info", json!([{"name": "destination", "value": "Paris"}])),
    )
    .await;
    let body = result(&envelope);
    assert_eq!(body["success"], true, "{}", body);
    let details = &body["destination_details"];
    assert_eq!(details["basic_info"]["name"], "Paris");
    assert_eq!(details["top_attractions"][0]["name"], "Louvre Museum");
    assert!(details["travel_info"]["safety_rating"].as_str().unwrap().ends_with("/5"));
}

#[tokio::test]
async fn test_itinerary_duration_bounds() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "travel-planner-agent",
        call(
            "create_itinerary",
            json!([
                {"name": "destination", "value": "Paris"},
                {"name": "duration", "value": "45"}
            ]),
        ),
    )
    .await;
    assert_eq!(result(&envelope)["error"], "Duration must be between 1 and 30 days");
}

#[tokio::test]
async fn test_supervisor_analysis() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "travel-supervisor-agent",
        call(
            "analyze_request",
            json!([{"name": "user_request", "value": "Book a flight and a hotel in Paris"}]),
        ),
    )
    .await;
    let body = result(&envelope);
    assert_eq!(body["success"], true);
    assert_eq!(body["analysis_result"]["request_type"], "multi-service");
    assert_eq!(body["message"], "Travel request analyzed. 2 specialist agents required.");
    assert_eq!(envelope["response"]["actionGroup"], "supervisor-operations");
}

#[tokio::test]
async fn test_supervisor_rejects_non_object_responses() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "travel-supervisor-agent",
        call(
            "coordinate_specialists",
            json!([
                {"name": "specialist_responses", "value": "[1, 2]"},
                {"name": "request_context", "value": "{}"}
            ]),
        ),
    )
    .await;
    assert_eq!(
        result(&envelope)["error"],
        "Invalid specialist_responses format. Must be valid JSON."
    );
}

#[tokio::test]
async fn test_metrics_count_invocations() {
    let app = test_app().await;
    invoke(&app, "hotel-booking-agent", call("teleport", json!([]))).await;

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(
        r#"wayfarer_invocations_total{agent="hotel-booking-agent",function="unknown",outcome="validation_error"} 1"#
    ));
    assert!(!text.contains("teleport"));
}

#[tokio::test]
async fn test_metrics_keep_routed_function_names() {
    let app = test_app().await;
    for name in ["warp-1", "warp-2", "warp-3"] {
        invoke(&app, "car-rental-agent", call(name, json!([]))).await;
    }
    invoke(
        &app,
        "travel-supervisor-agent",
        call("analyze_request", json!([{"name": "user_request", "value": "Rent a car"}])),
    )
    .await;

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(
        r#"wayfarer_invocations_total{agent="car-rental-agent",function="unknown",outcome="validation_error"} 3"#
    ));
    assert!(text.contains(
        r#"wayfarer_invocations_total{agent="travel-supervisor-agent",function="analyze_request",outcome="success"} 1"#
    ));
}

#[tokio::test]
async fn test_serves_from_downloaded_snapshot() {
    let remote = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();

    let source = DbClient::new(&remote.path().join("travel_booking.db"), 1).await.unwrap();
    source.bootstrap(seed_date()).await.unwrap();
    source.pool.close().await;

    let clock = clock();
    let cache = SnapshotCache::new(
        Arc::new(FsBlobStore::new(remote.path())),
        "travel_booking.db",
        work.path().join("copy.db"),
        chrono::Duration::seconds(3600),
        clock.clone(),
    );
    let config = DatabaseConfig {
        path: work.path().join("unused.db").display().to_string(),
        max_connections: 2,
    };
    let db = Database::open(&config, Some(cache), seed_date()).await.unwrap();
    assert!(work.path().join("copy.db").exists());

    let app = app(AppState::new(Arc::new(db), clock, BookingRules::default()).unwrap());
    let envelope = invoke(
        &app,
        "travel-planner-agent",
        call("get_travel_advisories", json!([{"name": "destination", "value": "Bali"}])),
    )
    .await;
    let body = result(&envelope);
    assert_eq!(body["success"], true, "{}", body);
    assert_eq!(body["travel_advisories"]["destination"], "Bali");
}

#[tokio::test]
async fn test_failed_refresh_reports_system_error() {
    let remote = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();

    let source = DbClient::new(&remote.path().join("travel_booking.db"), 1).await.unwrap();
    source.bootstrap(seed_date()).await.unwrap();
    source.pool.close().await;

    let clock = clock();
    let cache = SnapshotCache::new(
        Arc::new(FsBlobStore::new(remote.path())),
        "travel_booking.db",
        work.path().join("copy.db"),
        chrono::Duration::seconds(3600),
        clock.clone(),
    );
    let config = DatabaseConfig {
        path: work.path().join("unused.db").display().to_string(),
        max_connections: 2,
    };
    let db = Database::open(&config, Some(cache), seed_date()).await.unwrap();

    // No remote object and no local copy left to fall back on.
    std::fs::remove_file(remote.path().join("travel_booking.db")).unwrap();
    std::fs::remove_file(work.path().join("copy.db")).unwrap();

    let app = app(AppState::new(Arc::new(db), clock, BookingRules::default()).unwrap());
    let envelope = invoke(
        &app,
        "travel-planner-agent",
        call("get_destination_info", json!([{"name": "destination", "value": "Paris"}])),
    )
    .await;
    let body = result(&envelope);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "system_error");
    assert!(body["error"].is_string());
    assert_eq!(envelope["response"]["actionGroup"], "travel-planning-operations");

    // The supervisor never reads the store.
    let supervisor = invoke(
        &app,
        "travel-supervisor-agent",
        call("analyze_request", json!([{"name": "user_request", "value": "Find a hotel"}])),
    )
    .await;
    assert_eq!(result(&supervisor)["success"], true);
}

fn hotel_booking(check_in: &str, check_out: &str) -> Value {
    call(
        "book_hotel",
        json!([
            {"name": "hotel_id", "value": "1"},
            {"name": "room_type_id", "value": "1"},
            {"name": "check_in_date", "value": check_in},
            {"name": "check_out_date", "value": check_out},
            {"name": "guest_details", "value": "{\"guests\": [{\"name\": \"Ada\"}], \"room_count\": 1}"}
        ]),
    )
}

#[tokio::test]
async fn test_hotel_booking_confirmation() {
    let app = test_app().await;
    let envelope = invoke(&app, "hotel-booking-agent", hotel_booking("2030-03-10", "2030-03-13")).await;
    let body = result(&envelope);
    assert_eq!(body["success"], true, "{}", body);

    let confirmation = &body["reservation_confirmation"];
    let reference = confirmation["booking_reference"].as_str().unwrap().to_string();
    assert_eq!(confirmation["nights"], 3);
    assert_eq!(confirmation["total_price"], 1350.0);
    assert_eq!(confirmation["currency"], "USD");
    assert_eq!(confirmation["check_in_date"], "2030-03-10");
    assert_eq!(confirmation["status"], "CONFIRMED");
    assert_eq!(confirmation["booking_date"], "2030-02-20T09:00:00Z");
    assert_eq!(body["check_in_instructions"]["check_in_time"], "15:00");
    assert_eq!(body["check_in_instructions"]["check_out_time"], "11:00");
    assert_eq!(
        body["message"],
        format!("Hotel successfully booked! Your booking reference is {}", reference)
    );
}

#[tokio::test]
async fn test_hotel_booking_rejects_inverted_dates() {
    let app = test_app().await;
    let envelope = invoke(&app, "hotel-booking-agent", hotel_booking("2030-03-13", "2030-03-10")).await;
    let body = result(&envelope);
    assert_eq!(body["error"], "Check-out date must be after check-in date");
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_modify_reservation_acknowledges_changes() {
    let app = test_app().await;
    let envelope = invoke(
        &app,
        "hotel-booking-agent",
        call(
            "modify_reservation",
            json!([
                {"name": "reservation_id", "value": "HT-42"},
                {"name": "modifications", "value": "{\"new_total\": 500, \"room_type\": \"Suite\"}"}
            ]),
        ),
    )
    .await;
    let body = result(&envelope);
    assert_eq!(body["success"], true, "{}", body);
    let updated = &body["updated_reservation"];
    assert_eq!(updated["reservation_id"], "HT-42");
    assert_eq!(updated["new_total"], 500);
    assert_eq!(updated["change_fees"], 0.0);
    assert_eq!(updated["status"], "MODIFIED");
    assert_eq!(updated["modifications_applied"]["room_type"], "Suite");
    assert_eq!(body["message"], "Reservation HT-42 has been successfully modified");

    let unchanged = invoke(
        &app,
        "hotel-booking-agent",
        call(
            "modify_reservation",
            json!([
                {"name": "reservation_id", "value": "HT-43"},
                {"name": "modifications", "value": "{}"}
            ]),
        ),
    )
    .await;
    assert_eq!(result(&unchanged)["updated_reservation"]["new_total"], "unchanged");
}

#[tokio::test]
async fn test_car_search_date_checks() {
    let app = test_app().await;
    let search = |pickup: &str, dropoff: &str| {
        call(
            "search_cars",
            json!([
                {"name": "pickup_location", "value": "JFK"},
                {"name": "dropoff_location", "value": "JFK"},
                {"name": "pickup_date", "value": pickup},
                {"name": "dropoff_date", "value": dropoff}
            ]),
        )
    };

    let malformed = result(&invoke(&app, "car-rental-agent", search("2030-03-10", "2030-03-13 10:00:00")).await);
    assert_eq!(malformed["error"], "Invalid date format. Use YYYY-MM-DD HH:MM:SS");

    let inverted = result(
        &invoke(&app, "car-rental-agent", search("2030-03-13 10:00:00", "2030-03-10 10:00:00")).await,
    );
    assert_eq!(inverted["error"], "Drop-off date must be after pickup date");

    let past = result(
        &invoke(&app, "car-rental-agent", search("2030-02-20 08:59:59", "2030-02-22 10:00:00")).await,
    );
    assert_eq!(past["error"], "Pickup date cannot be in the past");
    assert_eq!(past["error_type"], "validation_error");
}

fn car_booking(driver_details: Value) -> Value {
    call(
        "book_car",
        json!([
            {"name": "car_id", "value": "1"},
            {"name": "pickup_location_id", "value": "1"},
            {"name": "dropoff_location_id", "value": "1"},
            {"name": "pickup_date", "value": "2030-03-10 10:00:00"},
            {"name": "dropoff_date", "value": "2030-03-13 10:00:00"},
            {"name": "driver_details", "value": driver_details}
        ]),
    )
}

#[tokio::test]
async fn test_car_booking_accepts_numeric_license() {
    let app = test_app().await;
    let envelope = invoke(&app, "car-rental-agent", car_booking(json!({"license_number": 12345}))).await;
    let body = result(&envelope);
    assert_eq!(body["success"], true, "{}", body);
    assert_eq!(body["rental_confirmation"]["rental_days"], 3);

    let null_license = invoke(&app, "car-rental-agent", car_booking(json!({"license_number": null}))).await;
    assert_eq!(result(&null_license)["error"], "Driver license number is required");
}

#[tokio::test]
async fn test_cancel_rental_leaves_vehicle_rented() {
    let app = test_app().await;
    let booked = result(&invoke(&app, "car-rental-agent", car_booking(json!({"license_number": "NY-D1"}))).await);
    assert_eq!(booked["success"], true, "{}", booked);
    let booking_id = booked["rental_confirmation"]["booking_id"].to_string();

    let cancelled = result(
        &invoke(
            &app,
            "car-rental-agent",
            call("cancel_rental", json!([{"name": "booking_id", "value": booking_id.clone()}])),
        )
        .await,
    );
    assert_eq!(cancelled["success"], true);
    let status = &cancelled["cancellation_status"];
    assert_eq!(status["status"], "CANCELLED");
    assert_eq!(status["refund_amount"], 0.0);
    assert_eq!(status["refund_timeline"], "5-7 business days");
    assert_eq!(
        cancelled["message"],
        format!("Car rental booking {} has been successfully cancelled", booking_id)
    );

    let again = result(&invoke(&app, "car-rental-agent", car_booking(json!({"license_number": "NY-D2"}))).await);
    assert_eq!(again["success"], false);
    assert_eq!(again["error_type"], "capacity_error");
}

#[tokio::test]
async fn test_supervisor_consolidation() {
    let app = test_app().await;
    let responses = json!({
        "flight-booking-agent": {"success": true, "outbound_flights": [{"flight_id": 1}, {"flight_id": 2}]},
        "hotel-booking-agent": {"success": true, "hotels": [{"hotel_id": 1}]}
    });
    let envelope = invoke(
        &app,
        "travel-supervisor-agent",
        call(
            "consolidate_response",
            json!([
                {"name": "multiple_agent_responses", "value": responses.to_string()},
                {"name": "user_context", "value": "{\"destination\": \"Paris\"}"}
            ]),
        ),
    )
    .await;
    let body = result(&envelope);
    assert_eq!(body["success"], true, "{}", body);
    let unified = &body["unified_response"];
    assert_eq!(unified["travel_package_summary"]["destination"], "Paris");
    assert_eq!(
        unified["travel_package_summary"]["services_included"],
        json!(["Flights", "Accommodation"])
    );
    assert_eq!(unified["recommendations"][0], "Found 2 flight options");
    assert_eq!(body["next_steps"].as_array().unwrap().len(), 4);
    assert_eq!(body["message"], "Consolidated travel package created with 1 booking options");

    let not_object = invoke(
        &app,
        "travel-supervisor-agent",
        call(
            "consolidate_response",
            json!([
                {"name": "multiple_agent_responses", "value": "\"flights\""},
                {"name": "user_context", "value": "{}"}
            ]),
        ),
    )
    .await;
    assert_eq!(
        result(&not_object)["error"],
        "Invalid multiple_agent_responses format. Must be valid JSON."
    );
}
