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

use std::mem;
use std::str::FromStr;

use http::header::CONTENT_TYPE;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;
use percent_encoding::utf8_percent_encode;

use crate::utils::PERCENT_ENCODE_SET;
use crate::Error;
use crate::Result;

/// Signing context for request.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, still percent-encoded as sent on the wire.
    pub path: String,
    /// HTTP query parameters, decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// `parts` is left untouched if the request can't be signed.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let Some(authority) = parts.uri.authority().cloned() else {
            return Err(Error::request_invalid(
                "request without authority is invalid for signing",
            ));
        };

        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    ///
    /// Query pairs are percent-encoded again while being written.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let mut paq = self.path;
                for (i, (k, v)) in self.query.iter().enumerate() {
                    paq.push(if i == 0 { '?' } else { '&' });
                    paq.extend(utf8_percent_encode(k, &PERCENT_ENCODE_SET));
                    if !v.is_empty() {
                        paq.push('=');
                        paq.extend(utf8_percent_encode(v, &PERCENT_ENCODE_SET));
                    }
                }

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Get the content type of the request without parameters, lowercased.
    ///
    /// ```text
    /// "Application/X-WWW-Form-Urlencoded; charset=utf-8" => "application/x-www-form-urlencoded"
    /// ```
    ///
    /// Returns `None` if the header is absent, blank or not visible ascii.
    pub fn content_type(&self) -> Option<String> {
        let v = self.headers.get(CONTENT_TYPE)?.to_str().ok()?;
        let essence = v.split(';').next().unwrap_or_default().trim();
        if essence.is_empty() {
            return None;
        }

        Some(essence.to_ascii_lowercase())
    }

    /// Get the uri without query and fragment in its normalized form.
    ///
    /// - scheme and host are lowercased
    /// - userinfo is dropped
    /// - the default port of the scheme is dropped
    /// - an empty path becomes `/`
    pub fn normalized_url(&self) -> String {
        let scheme = self.scheme.as_str().to_ascii_lowercase();
        let host = self.authority.host().to_ascii_lowercase();

        let port = match (scheme.as_str(), self.authority.port_u16()) {
            ("http", Some(80)) | ("https", Some(443)) | (_, None) => None,
            (_, Some(port)) => Some(port),
        };
        let path = if self.path.is_empty() {
            "/"
        } else {
            self.path.as_str()
        };

        match port {
            Some(port) => format!("{scheme}://{host}:{port}{path}"),
            None => format!("{scheme}://{host}{path}"),
        }
    }
}

/// Body is the read-only view of a request body used while signing.
#[derive(Debug, Clone, Copy, Default)]
pub enum Body<'a> {
    /// The request carries no body.
    #[default]
    Empty,
    /// Raw body bytes as they will be sent.
    Bytes(&'a [u8]),
    /// Structured form data that has not been encoded yet.
    ///
    /// Repeated names are kept as repeated entries.
    Form(&'a [(String, String)]),
    /// A body that can't be inspected, for example a stream that has already
    /// been consumed.
    Stream,
}

impl<'a> From<&'a [u8]> for Body<'a> {
    fn from(value: &'a [u8]) -> Self {
        Body::Bytes(value)
    }
}

impl<'a> From<&'a str> for Body<'a> {
    fn from(value: &'a str) -> Self {
        Body::Bytes(value.as_bytes())
    }
}

impl<'a> From<&'a [(String, String)]> for Body<'a> {
    fn from(value: &'a [(String, String)]) -> Self {
        Body::Form(value)
    }
}

/// SigningMethod is the method that used in signing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SigningMethod {
    /// Signing with the `Authorization` header.
    #[default]
    Header,
    /// Signing with query parameters.
    Query,
}

impl FromStr for SigningMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(SigningMethod::Header),
            "param" | "query" => Ok(SigningMethod::Query),
            _ => Err(Error::config_invalid(format!(
                "unknown signing method {s:?}, expected \"header\" or \"param\""
            ))),
        }
    }
}
