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

use std::sync::Arc;

use crate::{Body, Context, Result, SignRequest, SigningCredential};

/// Signer is the main struct used to sign the request.
///
/// It holds the build-time credential and can be cloned cheaply and shared
/// across threads; every call to [`Signer::sign`] is independent.
#[derive(Debug)]
pub struct Signer<S: SignRequest> {
    ctx: Context,
    credential: Arc<S::Credential>,
    builder: Arc<S>,
}

impl<S: SignRequest> Clone for Signer<S> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            credential: self.credential.clone(),
            builder: self.builder.clone(),
        }
    }
}

impl<S: SignRequest> Signer<S> {
    /// Create a new signer.
    ///
    /// Returns an error if the credential is inconsistent.
    pub fn new(ctx: Context, credential: S::Credential, builder: S) -> Result<Self> {
        credential.validate()?;

        Ok(Self {
            ctx,
            credential: Arc::new(credential),
            builder: Arc::new(builder),
        })
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Get the build-time credential.
    pub fn credential(&self) -> &S::Credential {
        &self.credential
    }

    /// Signing request with the build-time defaults.
    pub fn sign(&self, req: &mut http::request::Parts, body: &Body<'_>) -> Result<()> {
        self.sign_with(req, body, &S::Options::default())
    }

    /// Signing request with per-request options.
    pub fn sign_with(
        &self,
        req: &mut http::request::Parts,
        body: &Body<'_>,
        options: &S::Options,
    ) -> Result<()> {
        self.builder
            .sign_request(&self.ctx, req, body, &self.credential, options)
    }
}
