//! Catalog products and their value objects

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::identifiers::{CategoryId, ImageId, ProductId};
use crate::money::Money;

/// A sellable product
///
/// `category_id` is a reference only. Products do not own their category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub sku: String,
    pub stock: u32,
    pub category_id: CategoryId,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Product image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: ImageId,
    pub url: String,
    pub alt: String,
    pub is_primary: bool,
}

impl ProductImage {
    /// Picks the primary image, falling back to the first one
    pub fn primary(images: &[ProductImage]) -> Option<&ProductImage> {
        images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| images.first())
    }
}
