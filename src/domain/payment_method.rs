use serde::{Deserialize, Serialize};

/// Payload for vaulting a payment method under a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRequest {
    pub customer_id: String,
    pub payment_method_nonce: String,
}

impl PaymentMethodRequest {
    pub fn new(customer_id: impl Into<String>, payment_method_nonce: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            payment_method_nonce: payment_method_nonce.into(),
        }
    }
}

/// A vaulted payment method as the remote gateway reports it.
///
/// The token is the handle used for later sales and subscriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub token: String,
    pub customer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape_is_camel_case() {
        let req = PaymentMethodRequest::new("c1", "fake-nonce");
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "customerId": "c1",
                "paymentMethodNonce": "fake-nonce",
            })
        );
    }
}
