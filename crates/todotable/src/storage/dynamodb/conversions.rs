//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! table items. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todotable_core::storage::{Attribute, Item, RepositoryError, SortKey};
use todotable_core::user::UserId;

pub const PK: &str = "pk";
pub const SK: &str = "sk";

/// Convert a table item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::with_capacity(item.attributes.len() + 2);

    // Keys
    attributes.insert(PK.to_string(), AttributeValue::S(item.pk.to_string()));
    attributes.insert(SK.to_string(), AttributeValue::S(item.sk.encode()));

    // Data
    for (name, value) in &item.attributes {
        let value = match value {
            Attribute::S(s) => AttributeValue::S(s.clone()),
            Attribute::Bool(b) => AttributeValue::Bool(*b),
        };
        attributes.insert(name.clone(), value);
    }

    attributes
}

/// Convert a DynamoDB item to a table item.
///
/// Attributes of types the domain never writes are skipped.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    let pk = UserId::parse(get_string(attributes, PK)?)?;
    let sk = SortKey::decode(&get_string(attributes, SK)?)?;

    let mut item = Item::new(pk, sk);
    for (name, value) in attributes {
        if name == PK || name == SK {
            continue;
        }
        match value {
            AttributeValue::S(s) => item = item.with_string(name, s.clone()),
            AttributeValue::Bool(b) => item = item.with_bool(name, *b),
            _ => tracing::debug!(attribute = %name, "Skipping unsupported attribute type"),
        }
    }

    Ok(item)
}

/// Key map used by GetItem and DeleteItem.
pub fn key(pk: &UserId, sk: &SortKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (PK.to_string(), AttributeValue::S(pk.to_string())),
        (SK.to_string(), AttributeValue::S(sk.encode())),
    ])
}

fn get_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
