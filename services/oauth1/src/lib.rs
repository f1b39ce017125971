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

//! OAuth 1.0 request signing.
//!
//! This crate signs outgoing HTTP requests with the OAuth 1.0 HMAC-SHA1
//! signature method. The signature is attached either as an
//! `Authorization: OAuth ...` header or as `oauth_*` query parameters.
//!
//! ## Overview
//!
//! - [`collect_parameters`] decides which query and body parameters are signed.
//!   Form-encoded bodies and bodies without content type are signed, any other
//!   body (json, binary, ...) is not.
//! - [`RequestSigner`] builds the [`OAuthParameters`], computes the signature
//!   base string and HMAC-SHA1 signature, and renders the result.
//! - [`Config`] holds the build-time defaults, [`SignOptions`] the
//!   per-request overrides.
//!
//! ## Example
//!
//! ```
//! use oauthsign_core::{Body, Context, SigningMethod};
//! use oauthsign_oauth1::{Config, SignOptions};
//!
//! # fn main() -> oauthsign_core::Result<()> {
//! let signer = Config::new()
//!     .with_auth_method(SigningMethod::Header)
//!     .with_consumer_key("CKEY")
//!     .with_consumer_secret("CSECRET")
//!     .with_token("TOKEN")
//!     .with_token_secret("TSECRET")
//!     .into_signer(Context::new())?;
//!
//! let (mut parts, body) = http::Request::post("https://api.example.com/statuses")
//!     .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
//!     .body("status=hello")?
//!     .into_parts();
//!
//! signer.sign(&mut parts, &Body::from(body))?;
//! assert!(parts.headers.contains_key(http::header::AUTHORIZATION));
//!
//! // Signing can be turned off for a single request.
//! let (mut parts, _) = http::Request::get("https://api.example.com/").body(())?.into_parts();
//! signer.sign_with(&mut parts, &Body::Empty, &SignOptions::from(false))?;
//! assert!(!parts.headers.contains_key(http::header::AUTHORIZATION));
//! # Ok(())
//! # }
//! ```

mod constants;

mod collect;
pub use collect::{collect_parameters, BodyPolicy};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod form;
pub use form::form_pairs;

mod options;
pub use options::SignOptions;

mod parameters;
pub use parameters::OAuthParameters;

mod sign_request;
pub use sign_request::{normalize_parameters, signing_key, string_to_sign, RequestSigner};
