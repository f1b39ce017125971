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

use http::Method;
use oauthsign_core::{Body, SigningMethod};
use oauthsign_oauth1::{form_pairs, Config, SignOptions};
use pretty_assertions::assert_eq;
use pretty_assertions::assert_ne;
use serde_json::json;
use test_case::test_case;

use crate::{auth_value, client, perform, FORM, NONCE, TIMESTAMP};

fn fixed_config() -> Config {
    Config::new()
        .with_consumer_key("CKEY")
        .with_consumer_secret("CSECRET")
}

fn fixed_options() -> SignOptions {
    SignOptions::new().with_nonce(NONCE).with_timestamp(TIMESTAMP)
}

fn sign(method: SigningMethod, headers: &[(&str, &str)], body: Body<'_>) -> Option<String> {
    let signer = client(method, fixed_config());
    let parts = perform(&signer, fixed_options(), headers, body, Method::POST);
    auth_value(method, &parts)
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_does_not_include_json_body(method: SigningMethod) {
    let json = [("Content-Type", "application/json")];
    let body1 = serde_json::to_vec(&json!({"foo": "bar"})).unwrap();
    let body2 = serde_json::to_vec(&json!({"bar": "baz"})).unwrap();

    let auth_value1 = sign(method, &json, Body::Bytes(&body1));
    let auth_value2 = sign(method, &json, Body::Bytes(&body2));

    assert!(auth_value1.is_some());
    assert_eq!(auth_value1, auth_value2);
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_includes_body_with_form_content_type(method: SigningMethod) {
    let form = [("Content-Type", FORM)];
    let body1 = form_pairs(&BTreeMap::from([("foo", "bar")])).unwrap();
    let body2 = form_pairs(&BTreeMap::from([("bar", "baz")])).unwrap();

    let auth_value1 = sign(method, &form, Body::Form(&body1));
    let auth_value2 = sign(method, &form, Body::Form(&body2));

    assert_ne!(auth_value1, auth_value2);
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_includes_body_with_unspecified_content_type(method: SigningMethod) {
    let value = form_pairs(&BTreeMap::from([("foo", "bar")])).unwrap();

    let auth_value1 = sign(method, &[], Body::Form(&value));
    let auth_value2 = sign(method, &[("Content-Type", FORM)], Body::Form(&value));

    assert_eq!(auth_value1, auth_value2);
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_includes_body_for_form_type_with_string_body(method: SigningMethod) {
    let form = [("Content-Type", FORM)];
    let value = form_pairs(&[("foo", "bar"), ("foo", "baz"), ("foo", "wat")]).unwrap();
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&value)
        .finish();

    let auth_value_pairs = sign(method, &form, Body::Form(&value));
    let auth_value_string = sign(method, &form, Body::from(encoded.as_str()));

    assert_eq!(auth_value_string, auth_value_pairs);
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_includes_nested_body_for_form_type_with_string_body(method: SigningMethod) {
    let form = [("Content-Type", FORM)];
    let value = form_pairs(&BTreeMap::from([("foo", vec!["bar", "baz", "wat"])])).unwrap();

    let auth_value_pairs = sign(method, &form, Body::Form(&value));
    let auth_value_string = sign(
        method,
        &form,
        Body::from("foo%5B%5D=bar&foo%5B%5D=baz&foo%5B%5D=wat"),
    );

    assert!(auth_value_pairs.is_some());
    assert_eq!(auth_value_string, auth_value_pairs);
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_form_content_type_parameters_are_ignored(method: SigningMethod) {
    let auth_value1 = sign(method, &[("Content-Type", FORM)], Body::from("foo=bar"));
    let auth_value2 = sign(
        method,
        &[("Content-Type", "Application/X-WWW-Form-Urlencoded; charset=UTF-8")],
        Body::from("foo=bar"),
    );

    assert_eq!(auth_value1, auth_value2);
}

#[test_case(SigningMethod::Header; "header")]
#[test_case(SigningMethod::Query; "param")]
fn test_unreadable_body_signs_like_empty_body(method: SigningMethod) {
    let form = [("Content-Type", FORM)];
    let empty = sign(method, &form, Body::Empty);

    assert_eq!(sign(method, &form, Body::Stream), empty);
    assert_eq!(sign(method, &form, Body::Bytes(&[0xff, 0xfe, 0x3d])), empty);
}
