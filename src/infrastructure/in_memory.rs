use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::client_token::ClientToken;
use crate::domain::customer::{Customer, CustomerRequest};
use crate::domain::payment_method::{PaymentMethod, PaymentMethodRequest};
use crate::domain::ports::{
    ClientTokenApi, CustomerApi, PaymentMethodApi, SubscriptionApi, TransactionApi,
};
use crate::domain::subscription::{Subscription, SubscriptionRequest, SubscriptionStatus};
use crate::domain::transaction::{
    CloneTransactionRequest, PaymentSource, Transaction, TransactionRequest, TransactionStatus,
};
use crate::error::{GatewayError, Result};

/// An in-memory stand-in for the remote gateway client.
///
/// Emulates the remote's observable semantics — id assignment for id-less
/// creates, duplicate detection, reference checks, the not-found
/// classification — so the adapter can be exercised without network access.
/// Uses `Arc<RwLock<HashMap>>` per resource; `Clone` shares the state, which
/// lets tests keep a handle for inspecting the call counter.
#[derive(Default, Clone)]
pub struct InMemoryRemoteClient {
    customers: Arc<RwLock<HashMap<String, Customer>>>,
    payment_methods: Arc<RwLock<HashMap<String, PaymentMethod>>>,
    transactions: Arc<RwLock<HashMap<String, Transaction>>>,
    subscriptions: Arc<RwLock<HashMap<String, Subscription>>>,
    sequence: Arc<AtomicU64>,
    calls: Arc<AtomicU64>,
}

impl InMemoryRemoteClient {
    /// Creates a new, empty in-memory client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of remote operations received so far.
    ///
    /// Validation short-circuits in the adapter never reach the client, so
    /// this stays at zero for locally rejected calls.
    pub fn remote_calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{prefix}_{n}")
    }

    // The remote rejects malformed emails on create and update; this is a
    // remote-side validation failure, distinct from not-found.
    fn check_email(req: &CustomerRequest) -> Result<()> {
        match &req.email {
            Some(email) if !email.contains('@') => Err(GatewayError::Rejected(format!(
                "email is an invalid format: {email}"
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CustomerApi for InMemoryRemoteClient {
    async fn create_customer(&self, req: CustomerRequest) -> Result<Customer> {
        self.record_call();
        Self::check_email(&req)?;

        let mut customers = self.customers.write().await;
        let id = match req.id {
            Some(id) => {
                if customers.contains_key(&id) {
                    return Err(GatewayError::Rejected(format!(
                        "customer id already in use: {id}"
                    )));
                }
                id
            }
            None => self.next_id("cus"),
        };

        let customer = Customer {
            id: id.clone(),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            website: req.website,
        };
        customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn find_customer(&self, id: &str) -> Result<Customer> {
        self.record_call();
        let customers = self.customers.read().await;
        customers
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::not_found("customer", id))
    }

    async fn update_customer(&self, id: &str, req: CustomerRequest) -> Result<Customer> {
        self.record_call();
        Self::check_email(&req)?;

        let mut customers = self.customers.write().await;
        let customer = customers
            .get_mut(id)
            .ok_or_else(|| GatewayError::not_found("customer", id))?;

        // Only supplied fields change; absent fields keep their value.
        if let Some(first_name) = req.first_name {
            customer.first_name = Some(first_name);
        }
        if let Some(last_name) = req.last_name {
            customer.last_name = Some(last_name);
        }
        if let Some(email) = req.email {
            customer.email = Some(email);
        }
        if let Some(phone) = req.phone {
            customer.phone = Some(phone);
        }
        if let Some(company) = req.company {
            customer.company = Some(company);
        }
        if let Some(website) = req.website {
            customer.website = Some(website);
        }
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: &str) -> Result<()> {
        self.record_call();
        let mut customers = self.customers.write().await;
        customers
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| GatewayError::not_found("customer", id))
    }
}

#[async_trait]
impl TransactionApi for InMemoryRemoteClient {
    async fn sale(&self, req: TransactionRequest) -> Result<Transaction> {
        self.record_call();

        // Sales against a vaulted token require the token to exist; nonces
        // are one-time values the real remote mints, so any non-empty one
        // is accepted here.
        if let PaymentSource::PaymentMethodToken(token) = &req.source {
            let payment_methods = self.payment_methods.read().await;
            if !payment_methods.contains_key(token) {
                return Err(GatewayError::not_found("payment method", token));
            }
        }

        let status = match req.options {
            Some(options) if !options.submit_for_settlement => TransactionStatus::Authorized,
            _ => TransactionStatus::SubmittedForSettlement,
        };

        let transaction = Transaction {
            id: self.next_id("txn"),
            amount: req.amount,
            currency_iso_code: "USD".to_string(),
            status,
        };
        let mut transactions = self.transactions.write().await;
        transactions.insert(transaction.id.clone(), transaction.clone());
        Ok(transaction)
    }

    async fn clone_transaction(
        &self,
        id: &str,
        req: CloneTransactionRequest,
    ) -> Result<Transaction> {
        self.record_call();

        let mut transactions = self.transactions.write().await;
        let original = transactions
            .get(id)
            .ok_or_else(|| GatewayError::not_found("transaction", id))?;

        let status = match req.options {
            Some(options) if !options.submit_for_settlement => TransactionStatus::Authorized,
            _ => TransactionStatus::SubmittedForSettlement,
        };

        let clone = Transaction {
            id: self.next_id("txn"),
            amount: req.amount,
            currency_iso_code: original.currency_iso_code.clone(),
            status,
        };
        transactions.insert(clone.id.clone(), clone.clone());
        Ok(clone)
    }
}

#[async_trait]
impl PaymentMethodApi for InMemoryRemoteClient {
    async fn create_payment_method(&self, req: PaymentMethodRequest) -> Result<PaymentMethod> {
        self.record_call();

        let customers = self.customers.read().await;
        if !customers.contains_key(&req.customer_id) {
            return Err(GatewayError::not_found("customer", &req.customer_id));
        }

        let payment_method = PaymentMethod {
            token: self.next_id("pm"),
            customer_id: req.customer_id,
        };
        let mut payment_methods = self.payment_methods.write().await;
        payment_methods.insert(payment_method.token.clone(), payment_method.clone());
        Ok(payment_method)
    }

    async fn find_payment_method(&self, token: &str) -> Result<PaymentMethod> {
        self.record_call();
        let payment_methods = self.payment_methods.read().await;
        payment_methods
            .get(token)
            .cloned()
            .ok_or_else(|| GatewayError::not_found("payment method", token))
    }

    async fn delete_payment_method(&self, token: &str) -> Result<()> {
        self.record_call();
        let mut payment_methods = self.payment_methods.write().await;
        payment_methods
            .remove(token)
            .map(|_| ())
            .ok_or_else(|| GatewayError::not_found("payment method", token))
    }
}

#[async_trait]
impl SubscriptionApi for InMemoryRemoteClient {
    async fn create_subscription(&self, req: SubscriptionRequest) -> Result<Subscription> {
        self.record_call();

        let payment_methods = self.payment_methods.read().await;
        if !payment_methods.contains_key(&req.payment_method_token) {
            return Err(GatewayError::not_found(
                "payment method",
                &req.payment_method_token,
            ));
        }

        let subscription = Subscription {
            id: self.next_id("sub"),
            plan_id: req.plan_id,
            payment_method_token: req.payment_method_token,
            price: req.price,
            status: SubscriptionStatus::Active,
        };
        let mut subscriptions = self.subscriptions.write().await;
        subscriptions.insert(subscription.id.clone(), subscription.clone());
        Ok(subscription)
    }

    async fn find_subscription(&self, id: &str) -> Result<Subscription> {
        self.record_call();
        let subscriptions = self.subscriptions.read().await;
        subscriptions
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::not_found("subscription", id))
    }

    async fn cancel_subscription(&self, id: &str) -> Result<Subscription> {
        self.record_call();
        let mut subscriptions = self.subscriptions.write().await;
        let subscription = subscriptions
            .get_mut(id)
            .ok_or_else(|| GatewayError::not_found("subscription", id))?;

        if subscription.status == SubscriptionStatus::Canceled {
            return Err(GatewayError::Rejected(format!(
                "subscription is already canceled: {id}"
            )));
        }
        subscription.status = SubscriptionStatus::Canceled;
        Ok(subscription.clone())
    }
}

#[async_trait]
impl ClientTokenApi for InMemoryRemoteClient {
    async fn generate_client_token(&self) -> Result<ClientToken> {
        self.record_call();
        Ok(ClientToken {
            value: self.next_id("ctok"),
        })
    }
}
