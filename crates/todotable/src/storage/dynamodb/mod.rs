//! DynamoDB storage backend implementation.
//!
//! The table has a string partition key `pk` and a string sort key `sk`;
//! every other attribute is written as-is from the item.

mod conversions;
mod error;
mod table;

pub use table::DynamoDbTable;
