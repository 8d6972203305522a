use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stock level bucket shown next to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InventoryStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

/// Represents a product in the catalog, as stored in `{ "products": [...] }`.
///
/// # Resource Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be served by a [`ResourceActor`](resource_actor::ResourceActor).
/// Creation and update payloads are [`ProductDraft`]s.
///
/// Fields missing from the stored document fall back to their defaults; payloads are not
/// validated beyond their JSON types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub inventory_status: InventoryStatus,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
}

impl Product {
    /// Creates a product with the given id, name and price and every other field defaulted.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            code: String::new(),
            name: name.into(),
            description: String::new(),
            price,
            quantity: 0,
            inventory_status: InventoryStatus::default(),
            category: String::new(),
            image: String::new(),
            rating: 0.0,
        }
    }
}

/// A partial product, as accepted by create, update and patch.
///
/// Every field is optional. [`ProductDraft::apply_to`] overlays the fields that are present
/// onto an existing product and leaves the rest alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_status: Option<InventoryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl ProductDraft {
    /// Field-by-field overlay: present fields overwrite, absent fields are retained.
    ///
    /// This includes `id`. Callers that must keep the stored id restore it afterwards.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(id) = self.id {
            product.id = id;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(status) = self.inventory_status {
            product.inventory_status = status;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
    }

    /// Builds the product a create request produces. A draft `id` is ignored.
    pub fn into_product(self, id: ProductId) -> Product {
        let mut product = Product::new(id, String::new(), 0.0);
        self.apply_to(&mut product);
        product.id = id;
        product
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}
