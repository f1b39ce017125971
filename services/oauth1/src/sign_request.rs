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

//! OAuth 1.0 HMAC-SHA1 request signer.
//!
//! - [Signature](https://www.rfc-editor.org/rfc/rfc5849#section-3.4)

use http::header::AUTHORIZATION;
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use oauthsign_core::hash::base64_hmac_sha1;
use oauthsign_core::time::format_unix_timestamp;
use oauthsign_core::utils::PERCENT_ENCODE_SET;
use oauthsign_core::{
    Body, Context, Result, SignRequest, SigningCredential, SigningMethod, SigningRequest,
};
use percent_encoding::utf8_percent_encode;

use crate::collect::collect_parameters;
use crate::{Credential, OAuthParameters, SignOptions};

/// RequestSigner that implements OAuth 1.0 HMAC-SHA1 signing.
///
/// The signature is rendered either as an `Authorization: OAuth ...` header
/// or as `oauth_*` query parameters, depending on the [`SigningMethod`].
#[derive(Debug, Default)]
pub struct RequestSigner {
    method: SigningMethod,
}

impl RequestSigner {
    /// Create a new signer that renders with `method`.
    pub fn new(method: SigningMethod) -> Self {
        Self { method }
    }

    /// Get the signing method.
    pub fn method(&self) -> SigningMethod {
        self.method
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;
    type Options = SignOptions;

    fn sign_request(
        &self,
        ctx: &Context,
        parts: &mut Parts,
        body: &Body<'_>,
        credential: &Self::Credential,
        options: &Self::Options,
    ) -> Result<()> {
        if !options.is_enabled() {
            debug!("oauth signing is disabled for this request");
            return Ok(());
        }
        if self.method == SigningMethod::Header && parts.headers.contains_key(AUTHORIZATION) {
            debug!("request already has an authorization header, skip oauth signing");
            return Ok(());
        }

        let cred = credential.merge(options);
        cred.validate()?;

        let nonce = options.nonce.clone().unwrap_or_else(|| ctx.nonce());
        let timestamp = options
            .timestamp
            .clone()
            .unwrap_or_else(|| format_unix_timestamp(ctx.now()));

        let mut req = SigningRequest::build(parts)?;

        let oauth = OAuthParameters::new(&cred, nonce, timestamp);
        let params = collect_parameters(&req, body);

        let string_to_sign = string_to_sign(&req, &oauth, &params);
        debug!("calculated string to sign: {string_to_sign}");

        let signature = base64_hmac_sha1(signing_key(&cred).as_bytes(), string_to_sign.as_bytes());
        let oauth = oauth.with_signature(signature);

        match self.method {
            SigningMethod::Header => {
                let mut value = HeaderValue::from_str(&oauth.to_header_value())?;
                value.set_sensitive(true);
                req.headers.insert(AUTHORIZATION, value);
            }
            SigningMethod::Query => {
                for (k, v) in oauth.iter() {
                    req.query_push(k, v);
                }
            }
        }

        req.apply(parts)
    }
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, &PERCENT_ENCODE_SET).to_string()
}

/// Construct the normalized parameter string.
///
/// Every name and value is percent-encoded, pairs are sorted by encoded name
/// and then by encoded value, and joined as `name=value` with `&`.
///
/// ## Reference
///
/// - [Parameters Normalization](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.2)
pub fn normalize_parameters(oauth: &OAuthParameters, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = oauth
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .chain(params.iter().map(|(k, v)| (encode(k), encode(v))))
        .collect();
    encoded.sort();

    let mut s = String::with_capacity(encoded.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in encoded.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        s.push_str(&k);
        s.push('=');
        s.push_str(&v);
    }

    s
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// METHOD + "&" + encode(normalized url) + "&" + encode(normalized parameters)
/// ```
///
/// ## Reference
///
/// - [Signature Base String](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)
pub fn string_to_sign(
    req: &SigningRequest,
    oauth: &OAuthParameters,
    params: &[(String, String)],
) -> String {
    format!(
        "{}&{}&{}",
        encode(&req.method.as_str().to_ascii_uppercase()),
        encode(&req.normalized_url()),
        encode(&normalize_parameters(oauth, params)),
    )
}

/// Construct the HMAC-SHA1 key: `encode(consumer_secret) + "&" + encode(token_secret)`.
///
/// Absent secrets are treated as empty strings.
pub fn signing_key(cred: &Credential) -> String {
    format!(
        "{}&{}",
        encode(cred.consumer_secret.as_deref().unwrap_or_default()),
        encode(cred.token_secret.as_deref().unwrap_or_default()),
    )
}
