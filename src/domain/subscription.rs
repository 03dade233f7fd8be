use serde::{Deserialize, Serialize};

use super::transaction::Amount;

/// Payload for starting a subscription on a vaulted payment method.
///
/// `price` overrides the plan's default price when supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub plan_id: String,
    pub payment_method_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
}

impl SubscriptionRequest {
    pub fn new(plan_id: impl Into<String>, payment_method_token: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            payment_method_token: payment_method_token.into(),
            price: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Canceled,
    Expired,
}

/// A subscription record as the remote gateway reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub plan_id: String,
    pub payment_method_token: String,
    pub price: Option<Amount>,
    pub status: SubscriptionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_wire_shape_is_camel_case() {
        let req = SubscriptionRequest {
            price: Some(Amount::new(dec!(9.99)).unwrap()),
            ..SubscriptionRequest::new("monthly", "tok_1")
        };
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "planId": "monthly",
                "paymentMethodToken": "tok_1",
                "price": "9.99",
            })
        );
    }
}
