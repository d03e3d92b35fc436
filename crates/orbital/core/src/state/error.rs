//! Inventory mutation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{LocationKey, LocationKind};

/// Errors raised by the inventory mutation API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// The location is not tracked by the store.
    ///
    /// Reconciliation registers every active location, so hitting this after
    /// reconciliation is a logic error in the caller.
    #[error("{kind} '{key}' is not tracked by the inventory store")]
    UnknownLocation { kind: LocationKind, key: LocationKey },

    /// Fewer units are held than were requested; nothing was removed.
    #[error("cannot remove {requested} '{item}', only {available} held")]
    InsufficientQuantity {
        item: String,
        requested: u32,
        available: u32,
    },

    /// Amounts must be strictly positive.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// Adding would exceed the representable quantity.
    #[error("quantity of '{item}' would overflow")]
    QuantityOverflow { item: String },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            UnknownLocation { .. } => ErrorSeverity::Internal,
            InsufficientQuantity { .. } => ErrorSeverity::Recoverable,
            InvalidAmount | QuantityOverflow { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            UnknownLocation { .. } => "INVENTORY_UNKNOWN_LOCATION",
            InsufficientQuantity { .. } => "INVENTORY_INSUFFICIENT_QUANTITY",
            InvalidAmount => "INVENTORY_INVALID_AMOUNT",
            QuantityOverflow { .. } => "INVENTORY_QUANTITY_OVERFLOW",
        }
    }
}
