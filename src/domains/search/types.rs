//! Request and response types for the search gateway.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the credential parameter sent to SerpApi.
pub const API_KEY_PARAM: &str = "api_key";

/// Engine used when the caller does not name one.
pub const DEFAULT_ENGINE: &str = "google";

/// Result count hint used when the caller omits `num`.
pub const DEFAULT_NUM: i64 = 10;

/// Maximum number of location candidates when the caller omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

const REDACTED: &str = "[REDACTED]";

/// A search as requested by a caller, before credential and defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub engine: String,
    pub location: Option<String>,
    /// `None` means the caller explicitly asked to leave `num` out.
    pub num: Option<i64>,
    /// Extra provider fields, merged last in insertion order.
    pub extra: Map<String, Value>,
}

impl SearchQuery {
    /// Create a query with the default engine and result count.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            engine: DEFAULT_ENGINE.to_string(),
            location: None,
            num: Some(DEFAULT_NUM),
            extra: Map::new(),
        }
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn num(mut self, num: Option<i64>) -> Self {
        self.num = num;
        self
    }

    pub fn extra_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The flat, ordered parameter map handed to the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchRequest(Map<String, Value>);

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Copy of the parameters with the credential value masked.
    pub fn redacted(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(k, v)| {
                if k == API_KEY_PARAM {
                    (k.clone(), Value::String(REDACTED.to_string()))
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect()
    }

    /// Render the parameters as URL query pairs.
    ///
    /// Strings are sent as-is, numbers and booleans in their JSON form,
    /// nested values as compact JSON. Null values are dropped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(k, v)| {
                let value = match v {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    _ => v.to_string(),
                };
                Some((k.clone(), value))
            })
            .collect()
    }
}

/// Envelope returned by the `search` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchEnvelope {
    pub engine: String,
    pub query: String,
    pub location: Option<String>,
    /// Parameters sent to the provider, credential redacted.
    pub params: Map<String, Value>,
    /// Raw provider payload.
    pub results: Value,
}

/// Envelope returned by the `locations` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocationsEnvelope {
    pub query: String,
    pub locations: Vec<Value>,
}
