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

use log::warn;
use oauthsign_core::utils::Redact;
use oauthsign_core::{Context, Result, Signer, SigningCredential, SigningMethod};

use crate::constants::*;
use crate::{Credential, RequestSigner};

/// Config carries all the build-time configuration for OAuth 1.0 signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `auth_method` decides where the signature goes, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_AUTH_METHOD` (`header` or `param`)
    /// - [`SigningMethod::Header`] otherwise
    pub auth_method: Option<SigningMethod>,
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_CONSUMER_KEY`
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_CONSUMER_SECRET`
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_TOKEN`
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_TOKEN_SECRET`
    pub token_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set auth_method
    pub fn with_auth_method(mut self, auth_method: SigningMethod) -> Self {
        self.auth_method = Some(auth_method);
        self
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

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.auth_method.is_none() {
            if let Some(v) = ctx.env_var(OAUTH1_AUTH_METHOD) {
                match v.parse() {
                    Ok(method) => self.auth_method = Some(method),
                    Err(err) => warn!("ignore {OAUTH1_AUTH_METHOD}: {err}"),
                }
            }
        }
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }

        self
    }

    /// The default credential described by this config.
    pub fn credential(&self) -> Credential {
        Credential {
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            token: self.token.clone(),
            token_secret: self.token_secret.clone(),
        }
    }

    /// Check that the config can be used for signing.
    pub fn validate(&self) -> Result<()> {
        self.credential().validate()
    }

    /// Build a signer from this config.
    ///
    /// Fails with a config error when `consumer_key` is set without
    /// `consumer_secret`.
    pub fn into_signer(self, ctx: Context) -> Result<Signer<RequestSigner>> {
        let builder = RequestSigner::new(self.auth_method.unwrap_or_default());
        Signer::new(ctx, self.credential(), builder)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth_method", &self.auth_method)
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
