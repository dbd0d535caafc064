/// Represents a product in the remote catalog.
///
/// # Collection Store
/// This struct implements the
/// [`CollectionEntity`](collection_store::CollectionEntity) trait, allowing
/// it to be mirrored by a
/// [`CollectionStore`](collection_store::CollectionStore).
///
/// Wire shape: `{id?, title, category, price, description, discount?: {type}}`.
use collection_store::CollectionEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned id; absent until the remote catalog assigns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

/// Optional discount attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Discount kind, serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Product {
    /// Creates a not-yet-persisted product (no id, no discount).
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            category: category.into(),
            price,
            description: description.into(),
            discount: None,
        }
    }
}

impl CollectionEntity for Product {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
