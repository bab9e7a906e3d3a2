//! Error types for balance resolution.
//!
//! The engine never converts a failure into a zero or stale balance.
//! Transient store errors are surfaced distinctly from "no entries
//! found" so callers can retry instead of rendering a wrong figure.

use thiserror::Error;

use khata_shared::AppError;
use khata_shared::types::{CompanyId, CustomerId};

/// Errors that can occur while resolving a customer balance.
#[derive(Debug, Error)]
pub enum BalanceError {
    /// The (customer, company) pair does not resolve to an active customer.
    #[error("Customer {customer_id} not found in company {company_id}")]
    CustomerNotFound {
        /// The customer that was requested.
        customer_id: CustomerId,
        /// The tenant scope of the request.
        company_id: CompanyId,
    },

    /// The ledger store is unreachable or timed out.
    #[error("Ledger store unavailable: {0}")]
    StoreUnavailable(String),

    /// The invoice aggregation query timed out.
    #[error("Invoice aggregation timed out: {0}")]
    AggregationTimeout(String),

    /// Malformed date range; rejected before any I/O.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl BalanceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CustomerNotFound { .. } => "CUSTOMER_NOT_FOUND",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::AggregationTimeout(_) => "AGGREGATION_TIMEOUT",
            Self::InvalidFilter(_) => "INVALID_FILTER",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::CustomerNotFound { .. } => 404,
            Self::StoreUnavailable(_) | Self::AggregationTimeout(_) => 503,
            Self::InvalidFilter(_) => 400,
            Self::Database(_) => 500,
        }
    }

    /// Returns true if the caller may retry with backoff.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::AggregationTimeout(_))
    }
}

impl From<BalanceError> for AppError {
    fn from(err: BalanceError) -> Self {
        match err {
            BalanceError::CustomerNotFound { .. } => Self::NotFound(err.to_string()),
            BalanceError::StoreUnavailable(_) | BalanceError::AggregationTimeout(_) => {
                Self::Unavailable(err.to_string())
            }
            BalanceError::InvalidFilter(msg) => Self::Validation(msg),
            BalanceError::Database(msg) => Self::Database(msg),
        }
    }
}
