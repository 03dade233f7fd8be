//! Every operation with a missing required argument must fail locally,
//! before any remote call is made.

mod common;

use paygate::domain::customer::CustomerRequest;
use paygate::domain::payment_method::PaymentMethodRequest;
use paygate::domain::subscription::SubscriptionRequest;
use paygate::domain::transaction::{Amount, CloneTransactionRequest, TransactionRequest};
use paygate::error::GatewayError;
use rust_decimal_macros::dec;

fn assert_missing(err: GatewayError, field: &str) {
    match err {
        GatewayError::MissingField(f) => assert_eq!(f, field),
        other => panic!("expected missing {field}, got {other}"),
    }
}

#[tokio::test]
async fn test_customer_operations_require_id() {
    let (gateway, client) = common::gateway();

    assert_missing(
        gateway.find_customer("").await.unwrap_err(),
        "customer id",
    );
    assert_missing(
        gateway
            .update_customer("", CustomerRequest::default())
            .await
            .unwrap_err(),
        "customer id",
    );
    assert_missing(
        gateway.delete_customer("").await.unwrap_err(),
        "customer id",
    );
    assert_missing(
        gateway
            .create_customer(common::customer(""))
            .await
            .unwrap_err(),
        "customer id",
    );

    assert_eq!(client.remote_calls(), 0);
}

#[tokio::test]
async fn test_transaction_operations_require_source_and_id() {
    let (gateway, client) = common::gateway();
    let amount = Amount::new(dec!(10)).unwrap();

    assert_missing(
        gateway
            .create_transaction(TransactionRequest::by_nonce(amount, ""))
            .await
            .unwrap_err(),
        "payment method nonce",
    );
    assert_missing(
        gateway
            .create_transaction(TransactionRequest::by_token(amount, ""))
            .await
            .unwrap_err(),
        "payment method token",
    );
    assert_missing(
        gateway
            .clone_transaction("", CloneTransactionRequest::new(amount))
            .await
            .unwrap_err(),
        "transaction id",
    );

    assert_eq!(client.remote_calls(), 0);
}

#[tokio::test]
async fn test_payment_method_operations_require_arguments() {
    let (gateway, client) = common::gateway();

    assert_missing(
        gateway
            .create_payment_method(PaymentMethodRequest::new("", "fake-valid-nonce"))
            .await
            .unwrap_err(),
        "customer id",
    );
    assert_missing(
        gateway
            .create_payment_method(PaymentMethodRequest::new("c1", ""))
            .await
            .unwrap_err(),
        "payment method nonce",
    );
    assert_missing(
        gateway.find_payment_method("").await.unwrap_err(),
        "payment method token",
    );
    assert_missing(
        gateway.delete_payment_method("").await.unwrap_err(),
        "payment method token",
    );

    assert_eq!(client.remote_calls(), 0);
}

#[tokio::test]
async fn test_subscription_operations_require_arguments() {
    let (gateway, client) = common::gateway();

    assert_missing(
        gateway
            .create_subscription(SubscriptionRequest::new("", "tok_1"))
            .await
            .unwrap_err(),
        "plan id",
    );
    assert_missing(
        gateway
            .create_subscription(SubscriptionRequest::new("monthly", ""))
            .await
            .unwrap_err(),
        "payment method token",
    );
    assert_missing(
        gateway.find_subscription("").await.unwrap_err(),
        "subscription id",
    );
    assert_missing(
        gateway.cancel_subscription("").await.unwrap_err(),
        "subscription id",
    );

    assert_eq!(client.remote_calls(), 0);
}

#[tokio::test]
async fn test_invalid_amount_never_constructs_a_request() {
    assert!(matches!(
        Amount::new(dec!(0)),
        Err(GatewayError::InvalidAmount(_))
    ));
    assert!(matches!(
        Amount::new(dec!(-15)),
        Err(GatewayError::InvalidAmount(_))
    ));
}
