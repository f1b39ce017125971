// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use oauthsign_core::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Serialize a struct, map or list of pairs into form pairs usable as
/// [`oauthsign_core::Body::Form`].
///
/// Nested values are named the way nested form queries are built:
///
/// - a sequence under `foo` becomes repeated `foo[]` pairs
/// - a map under `foo` becomes `foo[key]` pairs
/// - `None` is skipped
///
/// Map keys come out in name order.
///
/// ```
/// use std::collections::BTreeMap;
///
/// let value = BTreeMap::from([("foo", vec!["bar", "baz"])]);
/// let pairs = oauthsign_oauth1::form_pairs(&value).unwrap();
/// assert_eq!(
///     pairs,
///     vec![
///         ("foo[]".to_string(), "bar".to_string()),
///         ("foo[]".to_string(), "baz".to_string()),
///     ]
/// );
/// ```
pub fn form_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(value)
        .map_err(|e| Error::request_invalid("value can't be encoded as form").with_source(e))?;

    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten(&mut pairs, k, v);
            }
        }
        Value::Array(items) => {
            for item in items {
                let [k, v] = match item {
                    Value::Array(kv) => <[Value; 2]>::try_from(kv).map_err(|kv| {
                        Error::request_invalid(format!(
                            "form list entry must be a (name, value) pair, got {} items",
                            kv.len()
                        ))
                    })?,
                    v => {
                        return Err(Error::request_invalid(format!(
                            "form list entry must be a (name, value) pair, got {v}"
                        )))
                    }
                };
                let name = scalar(k).ok_or_else(|| {
                    Error::request_invalid("form name must be a string, number or bool")
                })?;
                flatten(&mut pairs, name, v);
            }
        }
        v => {
            return Err(Error::request_invalid(format!(
                "form value must be a struct, map or list of pairs, got {v}"
            )))
        }
    }

    Ok(pairs)
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::String(v) => Some(v),
        Value::Number(v) => Some(v.to_string()),
        Value::Bool(v) => Some(v.to_string()),
        _ => None,
    }
}

fn flatten(pairs: &mut Vec<(String, String)>, name: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            let name = format!("{name}[]");
            for item in items {
                flatten(pairs, name.clone(), item);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                flatten(pairs, format!("{name}[{k}]"), v);
            }
        }
        v => {
            if let Some(v) = scalar(v) {
                pairs.push((name, v));
            }
        }
    }
}
