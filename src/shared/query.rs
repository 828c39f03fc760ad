//! Query-string construction for GET requests.

use serde::Serialize;
use serde_json::Value;

/// Encode the top-level fields of `data` as `key=value` pairs joined by `&`.
///
/// Null fields (including `None`) are omitted; `0`, `false` and `""` are kept.
/// Keys and values are percent-encoded. Anything that is not a JSON object
/// produces an empty string.
pub fn encode_query<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let Value::Object(map) = serde_json::to_value(data)? else {
        return Ok(String::new());
    };

    let pairs: Vec<String> = map
        .iter()
        .filter_map(|(key, value)| {
            query_value(value).map(|v| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(&v))
            })
        })
        .collect();

    Ok(pairs.join("&"))
}

/// Append an encoded query to `url`, using `&` if it already has a query part.
pub fn append_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}
