//! JSON serialization contract for orders and items.
//!
//! # Responsibility
//! - Encode each item into its own JSON text for the `orders.items` array.
//! - Decode stored item texts back into `Item` values.
//! - Provide whole-order JSON encoding as explicit functions.
//!
//! # Invariants
//! - One array element holds exactly one JSON-encoded `Item`.
//! - Item decoding is strict: all keys required, `id`/`price` within `u8`.
//! - Any failure aborts the whole batch; no partial output is returned.

use crate::model::order::{Item, Order, OrderId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Failure to move between `Item`/`Order` values and their JSON text.
#[derive(Debug)]
pub enum CodecError {
    Encode {
        item: Item,
        source: serde_json::Error,
    },
    Decode(serde_json::Error),
    EncodeOrder {
        id: OrderId,
        source: serde_json::Error,
    },
    DecodeOrder(serde_json::Error),
}

impl CodecError {
    /// Whether the failure happened while producing JSON.
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. } | Self::EncodeOrder { .. })
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode { item, source } => write!(
                f,
                "failed to marshal item {{id:{} name:{:?} price:{}}}: {source}",
                item.id, item.name, item.price
            ),
            Self::Decode(source) => write!(f, "failed to unmarshal item: {source}"),
            Self::EncodeOrder { id, source } => {
                write!(f, "failed to marshal order {id}: {source}")
            }
            Self::DecodeOrder(source) => write!(f, "failed to unmarshal order: {source}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode { source, .. } | Self::EncodeOrder { source, .. } => Some(source),
            Self::Decode(source) | Self::DecodeOrder(source) => Some(source),
        }
    }
}

/// Encodes one item as a standalone JSON object text.
pub fn encode_item(item: &Item) -> CodecResult<String> {
    serde_json::to_string(item).map_err(|source| CodecError::Encode {
        item: item.clone(),
        source,
    })
}

/// Encodes every item, preserving order. Stops at the first failing item.
pub fn encode_items(items: &[Item]) -> CodecResult<Vec<String>> {
    items.iter().map(encode_item).collect()
}

/// Decodes one stored item text.
pub fn decode_item(text: &str) -> CodecResult<Item> {
    serde_json::from_str(text).map_err(CodecError::Decode)
}

/// Decodes stored item texts in array order. Stops at the first malformed text.
pub fn decode_items<S: AsRef<str>>(texts: &[S]) -> CodecResult<Vec<Item>> {
    texts.iter().map(|text| decode_item(text.as_ref())).collect()
}

/// Encodes a whole order as one JSON document (`{"id":..,"items":[..]}`).
///
/// The repository does not use this shape; it stores items as a text array.
pub fn encode_order(order: &Order) -> CodecResult<Vec<u8>> {
    serde_json::to_vec(order).map_err(|source| CodecError::EncodeOrder {
        id: order.id,
        source,
    })
}

/// Decodes a whole order from JSON bytes produced by [`encode_order`].
pub fn decode_order(bytes: &[u8]) -> CodecResult<Order> {
    serde_json::from_slice(bytes).map_err(CodecError::DecodeOrder)
}
