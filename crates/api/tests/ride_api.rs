//! HTTP-level integration tests for the `/api/rides` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, count, create, delete, get, put_json};
use serde_json::json;

#[tokio::test]
async fn test_ride_lifecycle() {
    let state = common::test_state();

    let created = create(
        &state,
        "/api/rides",
        json!({"driverId": 1, "numberOfSeats": 3, "price": 10.0}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // GET returns the same fields.
    let response = get(build_test_app(state.clone()), &format!("/api/rides/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["driverId"], 1);
    assert_eq!(fetched["numberOfSeats"], 3);
    assert_eq!(fetched["price"], 10.0);
    assert_eq!(fetched, created);

    // PUT with the same id updates in place.
    let mut changed = fetched.clone();
    changed["numberOfSeats"] = json!(5);
    let response = put_json(build_test_app(state.clone()), "/api/rides", changed).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(state.clone()), &format!("/api/rides/{id}")).await;
    assert_eq!(body_json(response).await["numberOfSeats"], 5);
    assert_eq!(count(&state, "/api/rides").await, 1);

    // DELETE then GET is 404.
    let response = delete(build_test_app(state.clone()), &format!("/api/rides/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(state), &format!("/api/rides/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ride_full_field_round_trip() {
    let state = common::test_state();
    let start = create(&state, "/api/places", json!({"cityName": "Berlin"})).await;
    let end = create(&state, "/api/places", json!({"cityName": "Leipzig"})).await;

    let created = create(
        &state,
        "/api/rides",
        json!({
            "driverId": 4,
            "startDateTime": "2024-05-01T08:30:00+02:00",
            "flexibleStartPlace": 5,
            "flexibleEndPlace": 10,
            "price": 12.5,
            "numberOfSeats": 7,
            "description": "Morning ride",
            "createdAt": "2024-04-20T12:00:00Z",
            "deleted": false,
            "startPlace": {"id": start["id"]},
            "endPlace": {"id": end["id"]},
        }),
    )
    .await;

    assert_eq!(created["startDateTime"], "2024-05-01T06:30:00Z");
    assert_eq!(created["createdAt"], "2024-04-20T12:00:00Z");
    assert_eq!(created["flexibleStartPlace"], 5);
    assert_eq!(created["flexibleEndPlace"], 10);
    assert_eq!(created["price"], 12.5);
    assert_eq!(created["description"], "Morning ride");
    assert_eq!(created["deleted"], false);
    assert_eq!(created["startPlace"], json!({"id": start["id"]}));
    assert_eq!(created["endPlace"], json!({"id": end["id"]}));
    assert!(created.get("reservations").is_none());
}

#[tokio::test]
async fn test_deleted_flag_is_not_filtered() {
    let state = common::test_state();
    create(&state, "/api/rides", json!({"driverId": 1, "deleted": true})).await;
    create(&state, "/api/rides", json!({"driverId": 2, "deleted": false})).await;

    assert_eq!(count(&state, "/api/rides").await, 2);
}

#[tokio::test]
async fn test_seats_out_of_range_rejected() {
    let state = common::test_state();
    for seats in [0, 8] {
        let response = common::post_json(
            build_test_app(state.clone()),
            "/api/rides",
            json!({"driverId": 1, "numberOfSeats": seats}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let response = put_json(
        build_test_app(state.clone()),
        "/api/rides",
        json!({"id": 1, "numberOfSeats": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&state, "/api/rides").await, 0);
}

#[tokio::test]
async fn test_list_rides_sorted_by_price_then_id() {
    let state = common::test_state();
    let cheap = create(&state, "/api/rides", json!({"price": 5.0})).await;
    let dear_a = create(&state, "/api/rides", json!({"price": 20.0})).await;
    let dear_b = create(&state, "/api/rides", json!({"price": 20.0})).await;

    let response = get(
        build_test_app(state),
        "/api/rides?sort=price,desc&sort=id,asc",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let ids: Vec<_> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].clone())
        .collect();
    assert_eq!(ids, vec![dear_a["id"].clone(), dear_b["id"].clone(), cheap["id"].clone()]);
}

#[tokio::test]
async fn test_list_rides_sorted_by_start_place() {
    let state = common::test_state();
    let first = create(&state, "/api/places", json!({"cityName": "Aachen"})).await;
    let second = create(&state, "/api/places", json!({"cityName": "Bonn"})).await;

    let late = create(&state, "/api/rides", json!({"startPlace": {"id": second["id"]}})).await;
    let early = create(&state, "/api/rides", json!({"startPlace": {"id": first["id"]}})).await;
    let nowhere = create(&state, "/api/rides", json!({})).await;

    let response = get(build_test_app(state), "/api/rides?sort=startPlace").await;
    assert_eq!(response.status(), StatusCode::OK);

    let ids: Vec<_> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].clone())
        .collect();
    assert_eq!(ids, vec![early["id"].clone(), late["id"].clone(), nowhere["id"].clone()]);
}

// ---------------------------------------------------------------------------
// Reservations of a ride
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_reservations_of_ride() {
    let state = common::test_state();
    let ride = create(&state, "/api/rides", json!({"numberOfSeats": 3})).await;
    let other = create(&state, "/api/rides", json!({"numberOfSeats": 1})).await;
    let ride_id = ride["id"].as_i64().unwrap();

    for (passenger, target) in [(1, &ride), (2, &other), (3, &ride)] {
        create(
            &state,
            "/api/reservations",
            json!({"passengerId": passenger, "ride": {"id": target["id"]}}),
        )
        .await;
    }

    let response = get(
        build_test_app(state.clone()),
        &format!("/api/rides/{ride_id}/reservations"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let passengers: Vec<_> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["passengerId"].as_i64().unwrap())
        .collect();
    assert_eq!(passengers, vec![1, 3]);
}

#[tokio::test]
async fn test_reservations_of_ride_without_bookings_is_empty() {
    let state = common::test_state();
    let ride = create(&state, "/api/rides", json!({})).await;
    let ride_id = ride["id"].as_i64().unwrap();

    let response = get(
        build_test_app(state),
        &format!("/api/rides/{ride_id}/reservations"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_reservations_of_unknown_ride_is_404() {
    let state = common::test_state();
    let response = get(build_test_app(state), "/api/rides/77/reservations").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
