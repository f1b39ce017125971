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

use std::collections::BTreeSet;

use http::header::AUTHORIZATION;
use http::Method;
use oauthsign_core::{Body, Context, ErrorKind, SigningMethod};
use oauthsign_oauth1::{Config, SignOptions};
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::{auth_value, auth_values, client, perform};

fn consumer_and_token() -> Config {
    Config::new()
        .with_consumer_key("CKEY")
        .with_consumer_secret("CSECRET")
        .with_token("TOKEN")
        .with_token_secret("TSECRET")
}

fn keys(values: &std::collections::BTreeMap<String, String>) -> BTreeSet<&str> {
    values.keys().map(String::as_str).collect()
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_signs_request_with_empty_options(method: SigningMethod) {
    let signer = client(method, Config::new());

    let parts = perform(&signer, SignOptions::new(), &[], Body::Empty, Method::GET);
    let auth = auth_values(method, &parts);

    assert_eq!(
        keys(&auth),
        BTreeSet::from([
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_version",
        ])
    );
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_adds_consumer_and_token(method: SigningMethod) {
    let signer = client(method, consumer_and_token());

    let parts = perform(&signer, SignOptions::new(), &[], Body::Empty, Method::GET);
    let auth = auth_values(method, &parts);

    assert_eq!(
        keys(&auth),
        BTreeSet::from([
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_token",
            "oauth_version",
        ])
    );
    assert_eq!(auth["oauth_version"], "1.0");
    assert_eq!(auth["oauth_signature_method"], "HMAC-SHA1");
    assert_eq!(auth["oauth_consumer_key"], "CKEY");
    assert_eq!(auth["oauth_token"], "TOKEN");
    assert_eq!(auth["oauth_nonce"].len(), 32);
    assert!(auth["oauth_timestamp"].parse::<i64>().is_ok());
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_does_not_override_existing_header(method: SigningMethod) {
    let signer = client(method, consumer_and_token());

    let parts = perform(
        &signer,
        SignOptions::new(),
        &[("Authorization", "iz me!")],
        Body::Empty,
        Method::GET,
    );

    assert_eq!(parts.headers[AUTHORIZATION], "iz me!");
}

#[test]
fn test_existing_header_skips_header_signing_entirely() {
    let signer = client(SigningMethod::Header, consumer_and_token());

    let parts = perform(
        &signer,
        SignOptions::new(),
        &[("Authorization", "iz me!")],
        Body::Empty,
        Method::GET,
    );

    assert_eq!(parts.headers.get_all(AUTHORIZATION).iter().count(), 1);
    assert_eq!(parts.uri, "http://example.com/");
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_overrides_options_per_request(method: SigningMethod) {
    let signer = client(method, consumer_and_token());

    let parts = perform(
        &signer,
        SignOptions::new().with_consumer_key("CKEY2"),
        &[],
        Body::Empty,
        Method::GET,
    );
    let auth = auth_values(method, &parts);
    assert_eq!(auth["oauth_consumer_key"], "CKEY2");
    assert_eq!(auth["oauth_token"], "TOKEN");

    // The next request is back to the defaults.
    let parts = perform(&signer, SignOptions::new(), &[], Body::Empty, Method::GET);
    let auth = auth_values(method, &parts);
    assert_eq!(auth["oauth_consumer_key"], "CKEY");
    assert_eq!(auth["oauth_token"], "TOKEN");
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_turns_off_signing_per_request(method: SigningMethod) {
    let signer = client(method, consumer_and_token());

    let parts = perform(&signer, SignOptions::from(false), &[], Body::Empty, Method::GET);

    assert_eq!(auth_value(method, &parts), None);
    assert!(parts.headers.is_empty());
    assert_eq!(parts.uri, "http://example.com/");
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_signs_without_configured_token(method: SigningMethod) {
    let signer = client(
        method,
        Config::new()
            .with_consumer_key("CKEY")
            .with_consumer_secret("CSECRET"),
    );

    let parts = perform(&signer, SignOptions::new(), &[], Body::Empty, Method::GET);
    let auth = auth_values(method, &parts);

    assert!(auth.contains_key("oauth_consumer_key"));
    assert!(!auth.contains_key("oauth_token"));
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_query_parameters_are_kept(method: SigningMethod) {
    let signer = client(method, consumer_and_token());

    let (mut parts, _) = http::Request::get("http://example.com/search?q=rust+oauth&page=2")
        .body(())
        .unwrap()
        .into_parts();
    signer.sign(&mut parts, &Body::Empty).unwrap();

    let query: Vec<_> = form_urlencoded::parse(parts.uri.query().unwrap().as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(query[0], ("q".to_string(), "rust oauth".to_string()));
    assert_eq!(query[1], ("page".to_string(), "2".to_string()));
    assert_eq!(
        query.len(),
        match method {
            SigningMethod::Header => 2,
            SigningMethod::Query => 9,
        }
    );
}

#[test]
fn test_consumer_key_without_secret_fails_at_build_time() {
    let err = Config::new()
        .with_consumer_key("CKEY")
        .with_token("TOKEN")
        .into_signer(Context::new())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_signer_is_shared_across_threads() {
    let signer = client(SigningMethod::Header, consumer_and_token());

    let nonces: BTreeSet<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let signer = signer.clone();
                s.spawn(move || {
                    let parts = perform(&signer, SignOptions::new(), &[], Body::Empty, Method::GET);
                    auth_values(SigningMethod::Header, &parts)["oauth_nonce"].clone()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(nonces.len(), 8);
}
