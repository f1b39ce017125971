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

use std::collections::BTreeMap;

use oauthsign_core::utils::PERCENT_ENCODE_SET;
use percent_encoding::utf8_percent_encode;

use crate::constants::*;
use crate::Credential;

/// OAuthParameters is the set of `oauth_*` protocol parameters of one
/// signed request.
///
/// Keys are kept sorted so the rendered header is stable for a given input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthParameters {
    params: BTreeMap<&'static str, String>,
}

impl OAuthParameters {
    /// Build the unsigned protocol parameters.
    ///
    /// `oauth_consumer_key` and `oauth_token` are only present when the
    /// credential carries them.
    pub fn new(cred: &Credential, nonce: String, timestamp: String) -> Self {
        let mut params = BTreeMap::new();
        params.insert(OAUTH_NONCE, nonce);
        params.insert(OAUTH_SIGNATURE_METHOD, HMAC_SHA1.to_string());
        params.insert(OAUTH_TIMESTAMP, timestamp);
        params.insert(OAUTH_VERSION, VERSION_1_0.to_string());
        if let Some(v) = &cred.consumer_key {
            params.insert(OAUTH_CONSUMER_KEY, v.clone());
        }
        if let Some(v) = &cred.token {
            params.insert(OAUTH_TOKEN, v.clone());
        }

        Self { params }
    }

    /// Add the computed signature. It must be the last parameter added.
    pub fn with_signature(mut self, signature: String) -> Self {
        self.params.insert(OAUTH_SIGNATURE, signature);
        self
    }

    /// Get a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Iterate over `(name, value)` in name order, values not encoded.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Render the `Authorization` header value.
    ///
    /// ```text
    /// OAuth oauth_consumer_key="CKEY", oauth_nonce="...", oauth_signature="..."
    /// ```
    pub fn to_header_value(&self) -> String {
        let mut s = String::with_capacity(256);
        s.push_str(AUTHORIZATION_SCHEME);
        s.push(' ');

        for (idx, (k, v)) in self.iter().enumerate() {
            if idx != 0 {
                s.push_str(", ");
            }

            s.push_str(k);
            s.push_str("=\"");
            s.extend(utf8_percent_encode(v, &PERCENT_ENCODE_SET));
            s.push('"');
        }

        s
    }
}
