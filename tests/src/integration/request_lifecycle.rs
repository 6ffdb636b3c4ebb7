//! # Request Lifecycle
//!
//! The end-to-end workflow: a donor lists food, a requester claims it, and
//! the requester's detailed history reflects the join - including graceful
//! degradation when the referenced item disappears.

use super::{donor, fields, requester, wired_core};
use fb_food_store::FoodStoreApi;
use fb_request_store::RequestStoreApi;
use fb_workflow::WorkflowApi;
use serde_json::json;
use shared_types::{CoreError, Fields, FoodId, FoodStatus, IdentityClaims, MISSING_FIELD};

#[tokio::test]
async fn bread_travels_from_listing_to_request_history() {
    let (foods, _, workflow) = wired_core();

    let bread = foods
        .create(
            &donor(),
            fields(json!({
                "name": "Bread",
                "donorName": "Alice",
                "location": "Fridge A",
                "expire": "2026-09-01",
            })),
        )
        .await
        .unwrap();

    // Listed as available.
    let available = foods.list_by_status(FoodStatus::Available).await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].donor_email, "a@x.com");

    // Requested by another user.
    let request = workflow
        .request_food(&requester(), bread.id, fields(json!({ "note": "tonight" })))
        .await
        .unwrap();
    assert_eq!(request.requester_email, "b@x.com");

    // Gone from the available listing, present in the donor's own listing.
    assert!(foods
        .list_by_status(FoodStatus::Available)
        .await
        .unwrap()
        .is_empty());
    let mine = foods.list_by_owner("donor-1").await.unwrap();
    assert_eq!(mine[0].status, FoodStatus::Requested);

    // Detailed history joins the food fields and carries the engine stamp.
    let views = workflow.my_requests_detailed(&requester()).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, request.id);
    assert_eq!(views[0].donor_name, "Alice");
    assert_eq!(views[0].location, "Fridge A");
    assert_eq!(views[0].request_date, request.request_date);
}

#[tokio::test]
async fn requesting_an_unknown_item_is_not_found() {
    let (_, requests, workflow) = wired_core();
    let err = workflow
        .request_food(&requester(), FoodId::generate(), Fields::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
    assert!(requests.list_by_requester("user-2").await.unwrap().is_empty());
}

#[tokio::test]
async fn history_spans_multiple_requests_in_order() {
    let (foods, _, workflow) = wired_core();

    let first = foods
        .create(&donor(), fields(json!({ "donorName": "Alice" })))
        .await
        .unwrap();
    let second = foods
        .create(
            &IdentityClaims::new("donor-2", "c@x.com"),
            fields(json!({ "donorName": "Carol" })),
        )
        .await
        .unwrap();

    workflow
        .request_food(&requester(), first.id, Fields::new())
        .await
        .unwrap();
    workflow
        .request_food(&requester(), second.id, Fields::new())
        .await
        .unwrap();

    let views = workflow.my_requests_detailed(&requester()).await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].donor_name, "Alice");
    assert_eq!(views[1].donor_name, "Carol");
}

#[tokio::test]
async fn deleting_a_requested_item_orphans_the_record_but_not_the_view() {
    let (foods, requests, workflow) = wired_core();
    let bread = foods
        .create(&donor(), fields(json!({ "donorName": "Alice" })))
        .await
        .unwrap();
    workflow
        .request_food(&requester(), bread.id, Fields::new())
        .await
        .unwrap();

    // Owner deletes regardless of status; the request record stays.
    foods.delete(bread.id, "donor-1").await.unwrap();
    assert_eq!(requests.list_by_requester("user-2").await.unwrap().len(), 1);

    let views = workflow.my_requests_detailed(&requester()).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].donor_name, MISSING_FIELD);
    assert_eq!(views[0].location, MISSING_FIELD);
    assert_eq!(views[0].expire, None);
}

#[tokio::test]
async fn requesters_only_see_their_own_history() {
    let (foods, _, workflow) = wired_core();
    let bread = foods.create(&donor(), Fields::new()).await.unwrap();
    workflow
        .request_food(&requester(), bread.id, Fields::new())
        .await
        .unwrap();

    let other = IdentityClaims::new("user-3", "c@x.com");
    assert!(workflow.my_requests_detailed(&other).await.unwrap().is_empty());
}
