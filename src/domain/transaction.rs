use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

/// A positive transaction amount.
///
/// Wraps `rust_decimal::Decimal` to enforce positivity at construction and to
/// carry the remote's string wire format (two decimal places).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(GatewayError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = GatewayError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Amounts travel as strings on the wire ("15.00"), not as JSON numbers.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let value = Decimal::from_str(&raw).map_err(serde::de::Error::custom)?;
        Amount::new(value).map_err(serde::de::Error::custom)
    }
}

/// The funding source of a transaction.
///
/// A sale charges exactly one of a one-time payment method nonce or a vaulted
/// payment method token; the enum makes supplying both or neither
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentSource {
    PaymentMethodNonce(String),
    PaymentMethodToken(String),
}

impl PaymentSource {
    pub fn value(&self) -> &str {
        match self {
            Self::PaymentMethodNonce(nonce) => nonce,
            Self::PaymentMethodToken(token) => token,
        }
    }

    pub(crate) fn field_name(&self) -> &'static str {
        match self {
            Self::PaymentMethodNonce(_) => "payment method nonce",
            Self::PaymentMethodToken(_) => "payment method token",
        }
    }
}

/// Per-sale options forwarded to the remote gateway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOptions {
    pub submit_for_settlement: bool,
}

impl Default for TransactionOptions {
    fn default() -> Self {
        Self {
            submit_for_settlement: true,
        }
    }
}

/// Payload for a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub amount: Amount,
    #[serde(flatten)]
    pub source: PaymentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TransactionOptions>,
}

impl TransactionRequest {
    pub fn by_nonce(amount: Amount, nonce: impl Into<String>) -> Self {
        Self {
            amount,
            source: PaymentSource::PaymentMethodNonce(nonce.into()),
            options: None,
        }
    }

    pub fn by_token(amount: Amount, token: impl Into<String>) -> Self {
        Self {
            amount,
            source: PaymentSource::PaymentMethodToken(token.into()),
            options: None,
        }
    }
}

/// Payload for cloning an existing transaction under a new amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneTransactionRequest {
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TransactionOptions>,
}

impl CloneTransactionRequest {
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            options: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Authorized,
    SubmittedForSettlement,
    Settling,
    Settled,
    Voided,
}

/// A transaction record as the remote gateway reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Amount,
    pub currency_iso_code: String,
    pub status: TransactionStatus,
}
