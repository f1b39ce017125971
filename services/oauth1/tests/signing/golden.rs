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

use std::collections::BTreeMap;

use http::header::AUTHORIZATION;
use http::Method;
use oauthsign_core::{Body, SigningMethod};
use oauthsign_oauth1::{form_pairs, Config, SignOptions};
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::{auth_values, client, perform, FORM, NONCE, TIMESTAMP};

fn fixed_options() -> SignOptions {
    SignOptions::new().with_nonce(NONCE).with_timestamp(TIMESTAMP)
}

#[test_case(Config::new(), "YADuuIAiOZHoylt6j5u4Ep2lE3M="; "anonymous consumer")]
#[test_case(
    Config::new().with_consumer_key("CKEY").with_consumer_secret("CSECRET"),
    "E9WH3+0uohzKEABHYUaT4vXXOI8=";
    "consumer"
)]
#[test_case(
    Config::new()
        .with_consumer_key("CKEY")
        .with_consumer_secret("CSECRET")
        .with_token("TOKEN")
        .with_token_secret("TSECRET"),
    "LWqW3zPy6t1jCR/pTXvqNLCMWZ8=";
    "consumer and token"
)]
fn test_fixed_nonce_and_timestamp(config: Config, expected: &str) {
    for method in [SigningMethod::Header, SigningMethod::Query] {
        let signer = client(method, config.clone());

        let parts = perform(&signer, fixed_options(), &[], Body::Empty, Method::GET);
        let auth = auth_values(method, &parts);

        assert_eq!(auth["oauth_signature"], expected, "{method:?}");
        assert_eq!(auth["oauth_nonce"], NONCE);
        assert_eq!(auth["oauth_timestamp"], TIMESTAMP);
    }
}

#[test]
fn test_fixed_header_value() {
    let signer = client(
        SigningMethod::Header,
        Config::new()
            .with_consumer_key("CKEY")
            .with_consumer_secret("CSECRET"),
    );

    let parts = perform(&signer, fixed_options(), &[], Body::Empty, Method::GET);

    assert_eq!(
        parts.headers[AUTHORIZATION],
        "OAuth oauth_consumer_key=\"CKEY\", \
         oauth_nonce=\"547fed103e122eecf84c080843eedfe6\", \
         oauth_signature=\"E9WH3%2B0uohzKEABHYUaT4vXXOI8%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1286830180\", \
         oauth_version=\"1.0\""
    );
}

#[test]
fn test_fixed_repeated_form_values() {
    let signer = client(
        SigningMethod::Header,
        Config::new()
            .with_consumer_key("CKEY")
            .with_consumer_secret("CSECRET"),
    );

    let parts = perform(
        &signer,
        fixed_options(),
        &[("Content-Type", FORM)],
        Body::from("foo=bar&foo=baz&foo=wat"),
        Method::POST,
    );

    assert_eq!(
        auth_values(SigningMethod::Header, &parts)["oauth_signature"],
        "aww5AoWGlNVijcR1IvDWDI4ocJI="
    );
}

#[test]
fn test_fixed_nested_form_values() {
    let signer = client(
        SigningMethod::Header,
        Config::new()
            .with_consumer_key("CKEY")
            .with_consumer_secret("CSECRET"),
    );
    let value = form_pairs(&BTreeMap::from([("foo", vec!["bar", "baz", "wat"])])).unwrap();

    let parts = perform(
        &signer,
        fixed_options(),
        &[("Content-Type", FORM)],
        Body::Form(&value),
        Method::POST,
    );

    assert_eq!(
        auth_values(SigningMethod::Header, &parts)["oauth_signature"],
        "ELY5unQ3II3wRun81bDS+92HQFg="
    );
}

#[test]
fn test_rfc5849_photos_example() {
    let signer = client(
        SigningMethod::Header,
        Config::new()
            .with_consumer_key("dpf43f3p2l4k3l03")
            .with_consumer_secret("kd94hf93k423kf44")
            .with_token("nnch734d00sl2jdk")
            .with_token_secret("pfkkdhi9sl3r4s00"),
    );

    let (mut parts, _) =
        http::Request::get("http://photos.example.net/photos?file=vacation.jpg&size=original")
            .body(())
            .unwrap()
            .into_parts();
    signer
        .sign_with(
            &mut parts,
            &Body::Empty,
            &SignOptions::new()
                .with_nonce("kllo9940pd9333jh")
                .with_timestamp("1191242096"),
        )
        .unwrap();

    assert_eq!(
        auth_values(SigningMethod::Header, &parts)["oauth_signature"],
        "tR3+Ty81lMeYAr/Fid0kMTYa/WM="
    );
}
