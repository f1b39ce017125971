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
use oauthsign_core::{Error, Result, SigningCredential};

use crate::SignOptions;

/// Credential for OAuth 1.0 signing.
///
/// Every field is optional: a credential without `consumer_key` signs
/// requests for an anonymous consumer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Key identifying the calling application.
    pub consumer_key: Option<String>,
    /// Secret of the calling application, required with `consumer_key`.
    pub consumer_secret: Option<String>,
    /// Token identifying the end user.
    pub token: Option<String>,
    /// Secret of the end user token.
    pub token_secret: Option<String>,
}

impl Credential {
    /// Create a credential for a consumer without token.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: Some(consumer_key.into()),
            consumer_secret: Some(consumer_secret.into()),
            ..Default::default()
        }
    }

    /// Set the token and token secret.
    pub fn with_token(mut self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Overlay the credential overrides of `options` on top of this
    /// credential, field by field.
    pub fn merge(&self, options: &SignOptions) -> Credential {
        Credential {
            consumer_key: options
                .consumer_key
                .clone()
                .or_else(|| self.consumer_key.clone()),
            consumer_secret: options
                .consumer_secret
                .clone()
                .or_else(|| self.consumer_secret.clone()),
            token: options.token.clone().or_else(|| self.token.clone()),
            token_secret: options
                .token_secret
                .clone()
                .or_else(|| self.token_secret.clone()),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
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
            .finish()
    }
}

impl SigningCredential for Credential {
    fn validate(&self) -> Result<()> {
        if self.consumer_key.is_some() && self.consumer_secret.is_none() {
            return Err(Error::config_invalid(
                "consumer_secret is required when consumer_key is set",
            ));
        }

        Ok(())
    }
}
