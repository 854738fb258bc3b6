//=========================================================================
// Purchase Offers
//=========================================================================
//
// Offer data as delivered with a catalog page. Read-only from the core's
// point of view; prices are informational since currency accounting
// belongs to the commerce authority.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::ops::{Add, Mul};

//=== OfferId =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OfferId(pub u32);

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offer {}", self.0)
    }
}

//=== ProductInfo =========================================================

/// Product metadata attached to an offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    /// Server product code (furniture class name, badge code, ...).
    pub code: String,
    pub name: String,
    /// Product needs free text before purchase (gift message, trophy
    /// inscription).
    pub requires_extra_data: bool,
}

impl ProductInfo {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            requires_extra_data: false,
        }
    }
}

//=== OfferPrice ==========================================================

/// Price in credits plus an optional secondary currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OfferPrice {
    pub credits: u64,
    pub points: u64,
    /// Secondary currency kind; meaningless when `points == 0`.
    pub points_type: u32,
}

impl OfferPrice {
    pub const FREE: OfferPrice = OfferPrice {
        credits: 0,
        points: 0,
        points_type: 0,
    };

    pub fn credits(credits: u64) -> Self {
        Self {
            credits,
            ..Self::FREE
        }
    }
}

impl Add for OfferPrice {
    type Output = OfferPrice;

    // Mixed point kinds keep the left-hand kind
    fn add(self, rhs: Self) -> Self::Output {
        let points_type = if self.points > 0 {
            self.points_type
        } else {
            rhs.points_type
        };
        OfferPrice {
            credits: self.credits.saturating_add(rhs.credits),
            points: self.points.saturating_add(rhs.points),
            points_type,
        }
    }
}

impl Mul<u32> for OfferPrice {
    type Output = OfferPrice;

    fn mul(self, quantity: u32) -> Self::Output {
        OfferPrice {
            credits: self.credits.saturating_mul(u64::from(quantity)),
            points: self.points.saturating_mul(u64::from(quantity)),
            points_type: self.points_type,
        }
    }
}

//=== PurchaseOffer =======================================================

/// A purchasable catalog offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOffer {
    pub id: OfferId,
    pub product: ProductInfo,
    pub price: OfferPrice,
    /// Largest quantity that may be bought in one commit (at least 1).
    pub max_quantity: u32,
}

impl PurchaseOffer {
    pub fn new(id: u32, product: ProductInfo, price: OfferPrice) -> Self {
        Self {
            id: OfferId(id),
            product,
            price,
            max_quantity: 1,
        }
    }

    /// Sets the per-commit quantity limit.
    ///
    /// # Panics
    ///
    /// Panics if `max_quantity == 0`.
    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        assert!(max_quantity > 0, "Offer quantity limit must be positive");
        self.max_quantity = max_quantity;
        self
    }

    pub fn requires_extra_data(&self) -> bool {
        self.product.requires_extra_data
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
