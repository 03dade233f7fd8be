use std::sync::Arc;

use async_trait::async_trait;

use super::client_token::ClientToken;
use super::customer::{Customer, CustomerRequest};
use super::payment_method::{PaymentMethod, PaymentMethodRequest};
use super::subscription::{Subscription, SubscriptionRequest};
use super::transaction::{CloneTransactionRequest, Transaction, TransactionRequest};
use crate::error::Result;

/// Customer operations of the remote client.
///
/// Each method maps to one remote call; the `Result` is the single-resolution
/// translation of the underlying SDK's error-first completion contract.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn create_customer(&self, req: CustomerRequest) -> Result<Customer>;
    async fn find_customer(&self, id: &str) -> Result<Customer>;
    async fn update_customer(&self, id: &str, req: CustomerRequest) -> Result<Customer>;
    async fn delete_customer(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait TransactionApi: Send + Sync {
    async fn sale(&self, req: TransactionRequest) -> Result<Transaction>;
    async fn clone_transaction(&self, id: &str, req: CloneTransactionRequest)
    -> Result<Transaction>;
}

#[async_trait]
pub trait PaymentMethodApi: Send + Sync {
    async fn create_payment_method(&self, req: PaymentMethodRequest) -> Result<PaymentMethod>;
    async fn find_payment_method(&self, token: &str) -> Result<PaymentMethod>;
    async fn delete_payment_method(&self, token: &str) -> Result<()>;
}

#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    async fn create_subscription(&self, req: SubscriptionRequest) -> Result<Subscription>;
    async fn find_subscription(&self, id: &str) -> Result<Subscription>;
    async fn cancel_subscription(&self, id: &str) -> Result<Subscription>;
}

#[async_trait]
pub trait ClientTokenApi: Send + Sync {
    async fn generate_client_token(&self) -> Result<ClientToken>;
}

/// The full per-resource surface of the remote client, as one object-safe
/// bound. Blanket-implemented for anything covering all five resources.
pub trait RemoteClient:
    CustomerApi + TransactionApi + PaymentMethodApi + SubscriptionApi + ClientTokenApi
{
}

impl<T> RemoteClient for T where
    T: CustomerApi + TransactionApi + PaymentMethodApi + SubscriptionApi + ClientTokenApi
{
}

/// Shared handle to a remote client implementation; all gateway operations go
/// through one of these.
pub type RemoteClientHandle = Arc<dyn RemoteClient>;
