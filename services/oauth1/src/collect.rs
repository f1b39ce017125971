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

//! Collect the request parameters that take part in the signature.
//!
//! - [Parameter Sources](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.1)

use log::debug;
use oauthsign_core::{Body, SigningRequest};

use crate::constants::FORM_URLENCODED;

/// BodyPolicy decides whether the request body contributes parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPolicy {
    /// Body is declared `application/x-www-form-urlencoded`.
    FormEncoded,
    /// No content type is declared, the body is treated as form data.
    Unspecified,
    /// Any other content type, for example json. The body is not signed.
    Excluded,
}

impl BodyPolicy {
    /// Select the policy for a content type essence as returned by
    /// [`SigningRequest::content_type`].
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            None => BodyPolicy::Unspecified,
            Some(FORM_URLENCODED) => BodyPolicy::FormEncoded,
            Some(_) => BodyPolicy::Excluded,
        }
    }

    /// Extract the body parameters allowed by this policy.
    ///
    /// Form-encoded and unspecified bodies are handled alike: structured
    /// pairs are used as-is and raw bytes are decoded as form data. Bytes
    /// that are not valid utf-8 and unreadable streams contribute nothing.
    pub fn body_parameters(&self, body: &Body<'_>) -> Vec<(String, String)> {
        if *self == BodyPolicy::Excluded {
            return Vec::new();
        }

        match body {
            Body::Empty | Body::Stream => Vec::new(),
            Body::Form(pairs) => pairs.to_vec(),
            Body::Bytes(bs) => {
                if std::str::from_utf8(bs).is_err() {
                    debug!("body is not valid utf-8, no body parameters will be signed");
                    return Vec::new();
                }

                form_urlencoded::parse(bs)
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            }
        }
    }
}

/// Collect the non-protocol parameters of a request: its query pairs
/// followed by the body parameters allowed by its content type.
///
/// Values are returned decoded. Repeated names are kept.
pub fn collect_parameters(req: &SigningRequest, body: &Body<'_>) -> Vec<(String, String)> {
    let content_type = req.content_type();
    let policy = BodyPolicy::from_content_type(content_type.as_deref());
    debug!("content type {content_type:?} selects body policy {policy:?}");

    let mut params = req.query.clone();
    params.extend(policy.body_parameters(body));
    params
}
