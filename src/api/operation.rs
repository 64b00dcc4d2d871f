//! List operation descriptors
//!
//! Wire names differ per operation, so each list request carries a
//! descriptor instead of the paginator knowing any field names.

use super::validate::Validate;
use crate::error::{Error, Result};
use crate::pagination::{Cursor, Page, PagedQuery};
use crate::types::{JsonObject, JsonValue};
use serde::Serialize;
use serde_json::Value;

/// Default cursor field for control-plane list operations
pub const DEFAULT_CURSOR_FIELD: &str = "nextToken";

/// Default page size field for control-plane list operations
pub const DEFAULT_PAGE_SIZE_FIELD: &str = "maxResults";

/// Wire description of one list operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOperation {
    /// RPC action name, e.g. `ListClusters`
    pub target: &'static str,
    /// Field carrying the cursor in both request and response
    pub cursor_field: &'static str,
    /// Request field carrying the page size hint
    pub page_size_field: &'static str,
    /// Response field holding the result items
    pub result_field: &'static str,
}

impl ListOperation {
    /// Describe an operation using the default cursor and page size fields
    pub const fn new(target: &'static str, result_field: &'static str) -> Self {
        Self {
            target,
            cursor_field: DEFAULT_CURSOR_FIELD,
            page_size_field: DEFAULT_PAGE_SIZE_FIELD,
            result_field,
        }
    }

    /// Override the cursor field name
    #[must_use]
    pub const fn with_cursor_field(mut self, field: &'static str) -> Self {
        self.cursor_field = field;
        self
    }

    /// Override the page size field name
    #[must_use]
    pub const fn with_page_size_field(mut self, field: &'static str) -> Self {
        self.page_size_field = field;
        self
    }

    /// Build the request body from the serialized filters plus paging fields
    pub fn encode_request(
        &self,
        filters: JsonValue,
        cursor: Option<&Cursor>,
        page_size: Option<u32>,
    ) -> Result<JsonValue> {
        let mut body = match filters {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(Error::config(format!(
                    "{} filters must serialize to an object, got {other}",
                    self.target
                )))
            }
        };

        if let Some(cursor) = cursor {
            body.insert(
                self.cursor_field.to_string(),
                Value::String(cursor.as_str().to_string()),
            );
        }
        if let Some(size) = page_size {
            body.insert(self.page_size_field.to_string(), Value::from(size));
        }

        Ok(Value::Object(body))
    }

    /// Extract the result items and next cursor from a response body
    pub fn decode_page(&self, body: JsonValue) -> Result<Page<String>> {
        let Value::Object(mut map) = body else {
            return Err(Error::decode(format!(
                "{} response is not a JSON object",
                self.target
            )));
        };

        let items = match map.remove(self.result_field) {
            Some(Value::Array(values)) => values
                .into_iter()
                .map(|value| match value {
                    Value::String(s) => Ok(s),
                    other => Err(Error::decode(format!(
                        "{}.{} contains a non-string item: {other}",
                        self.target, self.result_field
                    ))),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(Error::decode(format!(
                    "{}.{} is not an array: {other}",
                    self.target, self.result_field
                )))
            }
            None => {
                return Err(Error::decode(format!(
                    "{} response is missing '{}'",
                    self.target, self.result_field
                )))
            }
        };

        let next_cursor = match map.remove(self.cursor_field) {
            None | Some(Value::Null) => None,
            Some(Value::String(token)) => Cursor::from_response(Some(token)),
            Some(other) => {
                return Err(Error::decode(format!(
                    "{}.{} is not a string: {other}",
                    self.target, self.cursor_field
                )))
            }
        };

        Ok(Page::new(items, next_cursor))
    }
}

/// A typed list request bound to its operation descriptor
pub trait ListRequest: PagedQuery + Validate + Serialize + Send + Sync {
    /// Wire description of the operation
    const OPERATION: ListOperation;

    /// Page size hint currently set on the request
    fn page_size(&self) -> Option<u32>;
}
