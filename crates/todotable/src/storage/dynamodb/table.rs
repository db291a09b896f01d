//! DynamoDB table client.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use todotable_core::storage::{Item, Result, SortKey, TableClient};
use todotable_core::user::UserId;

use super::conversions::{attributes_to_item, item_to_attributes, key, PK, SK};
use super::error::{
    map_connection_error, map_delete_item_error, map_get_item_error, map_put_item_error,
    map_query_error,
};

/// `TableClient` over a single DynamoDB table.
pub struct DynamoDbTable {
    client: Client,
    table_name: String,
}

impl DynamoDbTable {
    /// Creates a new table client with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl TableClient for DynamoDbTable {
    async fn get(&self, pk: &UserId, sk: &SortKey) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key(pk, sk)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        result.item.as_ref().map(attributes_to_item).transpose()
    }

    async fn put(&self, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(&item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete(&self, pk: &UserId, sk: &SortKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key(pk, sk)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    /// Follows `LastEvaluatedKey` until the partition range is exhausted.
    async fn query_prefix(&self, pk: &UserId, sk_prefix: &str) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;
        let mut pages = 0usize;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#pk = :pk AND begins_with(#sk, :prefix)")
                .expression_attribute_names("#pk", PK)
                .expression_attribute_names("#sk", SK)
                .expression_attribute_values(":pk", AttributeValue::S(pk.to_string()))
                .expression_attribute_values(":prefix", AttributeValue::S(sk_prefix.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;
            pages += 1;

            for attributes in result.items.unwrap_or_default() {
                items.push(attributes_to_item(&attributes)?);
            }

            match result.last_evaluated_key {
                Some(last) if !last.is_empty() => start_key = Some(last),
                _ => break,
            }
        }

        tracing::debug!(pk = %pk, sk_prefix, pages, count = items.len(), "Queried partition");
        Ok(items)
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| map_connection_error(DisplayErrorContext(&e)))?;

        Ok(())
    }
}
