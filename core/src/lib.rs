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

//! Core components for signing HTTP requests.
//!
//! This crate provides the foundational types and traits shared by the
//! oauthsign signers.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container for the ambient inputs of signing: environment, clock and nonce source
//! - **SigningRequest**: A view over `http::request::Parts` that signers read and modify
//! - **Traits**: Abstract interfaces for credential validation (`SigningCredential`) and request signing (`SignRequest`)
//! - **Signer**: Binds a context, a validated credential and a `SignRequest` implementation
//!
//! ## Example
//!
//! ```
//! use oauthsign_core::{Body, Context, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn validate(&self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!     type Options = ();
//!
//!     fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut http::request::Parts,
//!         _body: &Body<'_>,
//!         cred: &Self::Credential,
//!         _options: &Self::Options,
//!     ) -> Result<()> {
//!         req.headers.insert("x-my-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let cred = MyCredential { key: "my-key".to_string() };
//! let signer = Signer::new(Context::new(), cred, MyBuilder)?;
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())?
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, &Body::Empty)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1 and base64 helpers
//! - [`time`]: Time helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Clock;
pub use context::Context;
pub use context::Env;
pub use context::GenerateNonce;
pub use context::OsEnv;
pub use context::RandomNonce;
pub use context::StaticClock;
pub use context::StaticEnv;
pub use context::StaticNonce;
pub use context::SystemClock;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::{Body, SigningMethod, SigningRequest};
mod signer;
pub use signer::Signer;
