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

use std::fmt::Debug;

use crate::{Body, Context, Result};

/// SigningCredential is the trait implemented by the credentials a signer
/// carries.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check that the credential is internally consistent.
    ///
    /// This is called once when a [`crate::Signer`] is built, so a bad
    /// configuration is reported before any request is signed.
    fn validate(&self) -> Result<()>;
}

/// SignRequest is the trait used by signer to sign the request.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: SigningCredential;

    /// Per-request options accepted by this builder.
    ///
    /// `Default` must mean "sign with the configured defaults".
    type Options: Debug + Default;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` is a read-only view of the payload. The builder decides
    /// whether it takes part in the signature, it never changes it.
    ///
    /// ## Options
    ///
    /// Implementations may skip signing entirely when the options ask for it,
    /// leaving `req` untouched.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &Body<'_>,
        credential: &Self::Credential,
        options: &Self::Options,
    ) -> Result<()>;
}
