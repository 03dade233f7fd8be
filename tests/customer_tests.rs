mod common;

use paygate::domain::customer::CustomerRequest;
use paygate::error::GatewayError;

#[tokio::test]
async fn test_find_after_create_resolves_with_matching_id() {
    let (gateway, _client) = common::gateway();

    let err = gateway.find_customer("c1").await.unwrap_err();
    assert!(err.is_not_found());

    let created = gateway.create_customer(common::customer("c1")).await.unwrap();
    assert_eq!(created.id, "c1");

    let found = gateway.find_customer("c1").await.unwrap();
    assert_eq!(found.id, "c1");
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let (gateway, _client) = common::gateway();
    gateway
        .create_customer(CustomerRequest {
            id: Some("c1".into()),
            first_name: Some("jen".into()),
            last_name: Some("smith".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = gateway
        .update_customer(
            "c1",
            CustomerRequest {
                first_name: Some("chicken".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("chicken"));
    assert_eq!(updated.last_name.as_deref(), Some("smith"));
}

#[tokio::test]
async fn test_update_unknown_customer_is_not_found() {
    let (gateway, _client) = common::gateway();

    let err = gateway
        .update_customer("ghost", CustomerRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_twice_fails_not_found_the_second_time() {
    let (gateway, _client) = common::gateway();
    gateway.create_customer(common::customer("c1")).await.unwrap();

    gateway.delete_customer("c1").await.unwrap();

    let err = gateway.delete_customer("c1").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_remote_email_rejection_passes_through() {
    let (gateway, _client) = common::gateway();

    let err = gateway
        .create_customer(CustomerRequest {
            id: Some("c1".into()),
            email: Some("not-an-email".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Rejected(_)));
    assert!(!err.is_not_found());
}
