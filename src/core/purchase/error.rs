//=========================================================================
// Purchase Errors
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== ValidationError =====================================================

/// Commit or option change refused before anything was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing selected.
    EmptySelection,

    /// Selection needs extra text and none (or only whitespace) was given.
    MissingExtraData,

    /// Quantity outside `1..=max`.
    QuantityOutOfRange { requested: u32, max: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "No offer selected"),
            Self::MissingExtraData => write!(f, "Selected offer requires extra data"),
            Self::QuantityOutOfRange { requested, max } => {
                write!(f, "Quantity {} outside allowed range 1..={}", requested, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

//=== PurchaseError =======================================================

/// Failure of a purchase interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// Rejected locally; no request left the core.
    Validation(ValidationError),

    /// Reported by the commerce collaborator, reason kept verbatim.
    Rejected { reason: String },
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Purchase validation failed: {}", e),
            Self::Rejected { reason } => write!(f, "Purchase rejected: {}", reason),
        }
    }
}

impl std::error::Error for PurchaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Rejected { .. } => None,
        }
    }
}

impl From<ValidationError> for PurchaseError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
