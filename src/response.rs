use serde_json::{Map, Value};

use crate::error::{Result, TogglError};
use crate::transport::HttpResponse;

/// Response represents a successful API response.
/// The body is kept as decoded JSON and passed through unmodified; an empty
/// body is represented as an empty object.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code (always 2xx)
    pub status: u16,

    /// Decoded response body
    pub data: Value,
}

impl Response {
    /// Decode a 2xx transport response.
    pub fn from_http(response: &HttpResponse) -> Result<Self> {
        let data = if response.body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice::<Value>(&response.body).map_err(|source| TogglError::Decode {
                status: response.status,
                body: response.body_text(),
                source,
            })?
        };

        Ok(Response {
            status: response.status,
            data,
        })
    }

    /// Get the raw data value from the response
    pub fn raw(&self) -> &Value {
        &self.data
    }

    /// Consume the response, returning the decoded body
    pub fn into_data(self) -> Value {
        self.data
    }

    /// The body as a mapping, if it is a JSON object
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        self.data.as_object()
    }

    /// True for an empty object body, as returned by most deletes
    pub fn is_empty(&self) -> bool {
        matches!(&self.data, Value::Object(map) if map.is_empty())
    }

    /// Apply unmarshals the response body into the provided type
    pub fn apply<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// Get a value from the response body by a slash-separated path.
    /// For example, "data/name" would access the "name" field inside the "data" object.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.data;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value from the response body by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Get an integer value from the response body by a slash-separated path
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(Value::as_i64)
    }
}
