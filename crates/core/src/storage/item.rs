use std::collections::BTreeMap;

use crate::user::UserId;

use super::{RepositoryError, SortKey};

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    S(String),
    Bool(bool),
}

/// One row of the table: composite key plus attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub pk: UserId,
    pub sk: SortKey,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Item {
    pub fn new(pk: UserId, sk: SortKey) -> Self {
        Self {
            pk,
            sk,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_string(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.to_string(), Attribute::S(value.into()));
        self
    }

    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.attributes
            .insert(name.to_string(), Attribute::Bool(value));
        self
    }

    /// Get a required string attribute.
    pub fn get_string(&self, name: &str) -> Result<&str, RepositoryError> {
        match self.attributes.get(name) {
            Some(Attribute::S(value)) => Ok(value),
            _ => Err(RepositoryError::InvalidData(format!(
                "Missing or invalid field: {name}"
            ))),
        }
    }

    /// Get a required boolean attribute.
    pub fn get_bool(&self, name: &str) -> Result<bool, RepositoryError> {
        match self.attributes.get(name) {
            Some(Attribute::Bool(value)) => Ok(*value),
            _ => Err(RepositoryError::InvalidData(format!(
                "Missing or invalid field: {name}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let item = Item::new(UserId::from_email("a@x.com"), SortKey::Email)
            .with_string("email", "a@x.com")
            .with_bool("flag", true);

        assert_eq!(item.get_string("email").unwrap(), "a@x.com");
        assert!(item.get_bool("flag").unwrap());
    }

    #[test]
    fn test_getter_rejects_wrong_type_or_missing() {
        let item =
            Item::new(UserId::from_email("a@x.com"), SortKey::Email).with_bool("email", true);

        assert!(matches!(
            item.get_string("email"),
            Err(RepositoryError::InvalidData(_))
        ));
        assert!(item.get_bool("missing").is_err());
    }
}
