use futures::future::try_join_all;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::domain::client_token::ClientToken;
use crate::domain::customer::{Customer, CustomerRequest};
use crate::domain::payment_method::{PaymentMethod, PaymentMethodRequest};
use crate::domain::ports::RemoteClientHandle;
use crate::domain::subscription::{Subscription, SubscriptionRequest};
use crate::domain::transaction::{
    CloneTransactionRequest, Transaction, TransactionOptions, TransactionRequest,
};
use crate::domain::validation::{require, require_non_empty};
use crate::error::Result;

/// The adapter exposing every remote gateway operation.
///
/// `Gateway` validates arguments locally, then issues exactly one remote call
/// per operation (zero on validation failure). It owns a validated
/// [`GatewayConfig`] and a shared remote client handle; cloning shares both,
/// so several handles (or several differently configured gateways) can
/// coexist in one process.
#[derive(Clone)]
pub struct Gateway {
    config: GatewayConfig,
    client: RemoteClientHandle,
}

impl Gateway {
    /// Creates a new `Gateway` over an already-validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials and environment, validated at construction.
    /// * `client` - The remote client performing the actual network I/O.
    pub fn new(config: GatewayConfig, client: RemoteClientHandle) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Generates a fresh client token for browser/mobile SDK initialization.
    pub async fn generate_client_token(&self) -> Result<ClientToken> {
        self.client.generate_client_token().await
    }

    /// Charges the request's payment source.
    ///
    /// When the caller supplies no options, the sale is submitted for
    /// settlement by default.
    pub async fn create_transaction(&self, mut req: TransactionRequest) -> Result<Transaction> {
        require(req.source.field_name(), req.source.value())?;
        if req.options.is_none() {
            req.options = Some(TransactionOptions::default());
        }
        self.client.sale(req).await
    }

    /// Clones an existing transaction under a new amount.
    ///
    /// Like a sale, the clone defaults to settlement submission unless the
    /// caller explicitly set `submit_for_settlement` to false.
    pub async fn clone_transaction(
        &self,
        transaction_id: &str,
        mut req: CloneTransactionRequest,
    ) -> Result<Transaction> {
        require("transaction id", transaction_id)?;
        if req.options.is_none() {
            req.options = Some(TransactionOptions::default());
        }
        self.client.clone_transaction(transaction_id, req).await
    }

    /// Creates a customer.
    ///
    /// The remote assigns an id when the payload carries none; a supplied id
    /// must be non-empty.
    pub async fn create_customer(&self, req: CustomerRequest) -> Result<Customer> {
        if let Some(id) = &req.id {
            require("customer id", id)?;
        }
        self.client.create_customer(req).await
    }

    pub async fn find_customer(&self, id: &str) -> Result<Customer> {
        require("customer id", id)?;
        self.client.find_customer(id).await
    }

    pub async fn update_customer(&self, id: &str, req: CustomerRequest) -> Result<Customer> {
        require("customer id", id)?;
        self.client.update_customer(id, req).await
    }

    pub async fn delete_customer(&self, id: &str) -> Result<()> {
        require("customer id", id)?;
        self.client.delete_customer(id).await
    }

    /// Update-or-create.
    ///
    /// Attempts the update first. When the remote reports the target missing
    /// and `upsert` is set, the target id is attached to the payload and a
    /// create is attempted instead; any other failure propagates untouched.
    ///
    /// The update leg intentionally skips the id presence check used by
    /// [`Gateway::update_customer`]: an empty target id surfaces as the
    /// remote's not-found and, with `upsert`, falls through to a create whose
    /// payload carries no id, letting the remote assign one.
    pub async fn find_one_and_update(
        &self,
        id: &str,
        update: CustomerRequest,
        upsert: bool,
    ) -> Result<Customer> {
        match self.client.update_customer(id, update.clone()).await {
            Ok(customer) => Ok(customer),
            Err(err) if upsert && err.is_not_found() => {
                debug!(customer_id = %id, "update target missing, falling back to create");
                let req = if id.is_empty() {
                    update
                } else {
                    update.with_id(id)
                };
                self.create_customer(req).await
            }
            Err(err) => Err(err),
        }
    }

    /// Creates every customer in `requests` concurrently.
    ///
    /// All creates are initiated before any is awaited; the call resolves
    /// with the created customers in input order once every one succeeded,
    /// or with the first failure otherwise. Creates that already completed
    /// when a sibling fails are not rolled back.
    pub async fn create_multiple_customers(
        &self,
        requests: Vec<CustomerRequest>,
    ) -> Result<Vec<Customer>> {
        require_non_empty("customers", &requests)?;
        debug!(count = requests.len(), "fanning out customer creates");
        try_join_all(requests.into_iter().map(|req| self.create_customer(req))).await
    }

    /// Deletes every customer in `ids` concurrently.
    ///
    /// Same fan-out/fan-in and no-rollback semantics as
    /// [`Gateway::create_multiple_customers`].
    pub async fn delete_multiple_customers(&self, ids: Vec<String>) -> Result<()> {
        require_non_empty("customer ids", &ids)?;
        debug!(count = ids.len(), "fanning out customer deletes");
        try_join_all(ids.iter().map(|id| self.delete_customer(id))).await?;
        Ok(())
    }

    /// Vaults a payment method under an existing customer.
    pub async fn create_payment_method(
        &self,
        req: PaymentMethodRequest,
    ) -> Result<PaymentMethod> {
        require("customer id", &req.customer_id)?;
        require("payment method nonce", &req.payment_method_nonce)?;
        self.client.create_payment_method(req).await
    }

    pub async fn find_payment_method(&self, token: &str) -> Result<PaymentMethod> {
        require("payment method token", token)?;
        self.client.find_payment_method(token).await
    }

    pub async fn delete_payment_method(&self, token: &str) -> Result<()> {
        require("payment method token", token)?;
        self.client.delete_payment_method(token).await
    }

    /// Starts a subscription billing the vaulted payment method.
    pub async fn create_subscription(&self, req: SubscriptionRequest) -> Result<Subscription> {
        require("plan id", &req.plan_id)?;
        require("payment method token", &req.payment_method_token)?;
        self.client.create_subscription(req).await
    }

    pub async fn find_subscription(&self, id: &str) -> Result<Subscription> {
        require("subscription id", id)?;
        self.client.find_subscription(id).await
    }

    pub async fn cancel_subscription(&self, id: &str) -> Result<Subscription> {
        require("subscription id", id)?;
        self.client.cancel_subscription(id).await
    }
}
