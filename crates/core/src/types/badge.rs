//! Promotional badge labels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A short promotional label attached to a product.
///
/// Badges come from a fixed set; the serialized form is the storefront
/// display string (e.g. `"Best Seller"`), which is also what clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    /// Recently added to the catalog.
    New,
    /// Top-selling product.
    #[serde(rename = "Best Seller")]
    BestSeller,
    /// Limited availability.
    Limited,
    /// Vintage or collector's item.
    Vintage,
    /// Discounted price.
    Sale,
}

impl Badge {
    /// The storefront display string for this badge.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::BestSeller => "Best Seller",
            Self::Limited => "Limited",
            Self::Vintage => "Vintage",
            Self::Sale => "Sale",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
