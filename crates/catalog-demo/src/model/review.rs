/// Represents a review of one product.
///
/// # Collection Store
/// This struct implements the
/// [`CollectionEntity`](collection_store::CollectionEntity) trait, allowing
/// it to be mirrored by a
/// [`CollectionStore`](collection_store::CollectionStore).
///
/// Wire shape: `{id?, rating, comment, productId}`.
use collection_store::CollectionEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Server-assigned id; absent until the remote collection assigns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub rating: u8,
    pub comment: String,
    /// Id of the reviewed product. The link is by value only; neither store
    /// validates it against the other collection.
    pub product_id: u64,
}

impl Review {
    /// Creates a not-yet-persisted review.
    pub fn new(rating: u8, comment: impl Into<String>, product_id: u64) -> Self {
        Self {
            id: None,
            rating,
            comment: comment.into(),
            product_id,
        }
    }
}

impl CollectionEntity for Review {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
