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

use std::fmt::{Debug, Formatter};

use oauthsign_core::utils::Redact;

/// SignOptions carries the per-request overrides of a signing call.
///
/// Every field left as `None` falls back to the signer's build-time value.
/// A disabled options value skips signing for that request.
///
/// ```
/// use oauthsign_oauth1::SignOptions;
///
/// let opts = SignOptions::new().with_consumer_key("CKEY2");
/// assert!(opts.is_enabled());
///
/// let opts = SignOptions::from(false);
/// assert!(!opts.is_enabled());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignOptions {
    disabled: bool,

    /// Override the consumer key.
    pub consumer_key: Option<String>,
    /// Override the consumer secret.
    pub consumer_secret: Option<String>,
    /// Override the token.
    pub token: Option<String>,
    /// Override the token secret.
    pub token_secret: Option<String>,
    /// Use this nonce instead of generating one.
    pub nonce: Option<String>,
    /// Use this timestamp (seconds since epoch) instead of the clock.
    pub timestamp: Option<String>,
}

impl SignOptions {
    /// Create options that sign with the build-time defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options that turn signing off for the request.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Default::default()
        }
    }

    /// Whether the request should be signed.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Set nonce
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

impl Debug for SignOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignOptions")
            .field("disabled", &self.disabled)
            .field("consumer_key", &self.consumer_key)
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field("token", &self.token.as_ref().map(Redact::from))
            .field(
                "token_secret",
                &self.token_secret.as_ref().map(Redact::from),
            )
            .field("nonce", &self.nonce)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// `false` disables signing, `true` signs with the defaults.
impl From<bool> for SignOptions {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::new()
        } else {
            Self::disabled()
        }
    }
}
