//! # Concurrency
//!
//! Racing requesters against a single item: the compare-and-swap on the
//! status transition must admit at most one winner, and the loser must see
//! `Conflict` rather than a silent second success.

use super::{donor, wired_core};
use fb_food_store::FoodStoreApi;
use fb_request_store::RequestStoreApi;
use fb_workflow::WorkflowApi;
use futures::future::join_all;
use shared_types::{CoreError, Fields, FoodStatus, IdentityClaims};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_concurrent_requesters_exactly_one_wins() {
    let (foods, requests, workflow) = wired_core();
    let item = foods.create(&donor(), Fields::new()).await.unwrap();

    let tasks = (0..16).map(|i| {
        let workflow = Arc::clone(&workflow);
        let id = item.id;
        tokio::spawn(async move {
            let claims = IdentityClaims::new(format!("user-{i}"), format!("u{i}@x.com"));
            workflow.request_food(&claims, id, Fields::new()).await
        })
    });

    let outcomes: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("task must not panic"))
        .collect();

    let winners = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    assert_eq!(winners, 1, "exactly one requester may claim the item");
    for outcome in outcomes.iter().filter(|outcome| outcome.is_err()) {
        assert!(matches!(
            outcome.as_ref().unwrap_err(),
            CoreError::Conflict { .. }
        ));
    }

    // One status flip, one record.
    assert_eq!(
        foods.get_by_id(item.id).await.unwrap().status,
        FoodStatus::Requested
    );
    let mut total_records = 0;
    for i in 0..16 {
        total_records += requests
            .list_by_requester(&format!("user-{i}"))
            .await
            .unwrap()
            .len();
    }
    assert_eq!(total_records, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_requesters_on_different_items_do_not_interfere() {
    let (foods, _, workflow) = wired_core();
    let first = foods.create(&donor(), Fields::new()).await.unwrap();
    let second = foods.create(&donor(), Fields::new()).await.unwrap();

    let a = {
        let workflow = Arc::clone(&workflow);
        let id = first.id;
        tokio::spawn(async move {
            workflow
                .request_food(&IdentityClaims::new("user-2", "b@x.com"), id, Fields::new())
                .await
        })
    };
    let b = {
        let workflow = Arc::clone(&workflow);
        let id = second.id;
        tokio::spawn(async move {
            workflow
                .request_food(&IdentityClaims::new("user-3", "c@x.com"), id, Fields::new())
                .await
        })
    };

    assert!(a.await.unwrap().is_ok());
    assert!(b.await.unwrap().is_ok());
}

#[tokio::test]
async fn sweep_reports_nothing_when_both_writes_landed() {
    let (foods, _, workflow) = wired_core();
    let item = foods.create(&donor(), Fields::new()).await.unwrap();
    workflow
        .request_food(&IdentityClaims::new("user-2", "b@x.com"), item.id, Fields::new())
        .await
        .unwrap();

    assert!(workflow.reconcile_orphans().await.unwrap().is_empty());
}
