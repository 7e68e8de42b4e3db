// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Request shape handed to the rewrite decision.
//!
//! Mirrors the edge request record: a path-and-query `uri` plus headers keyed
//! by lowercase name, each holding its values in arrival order. Fields the
//! decision does not look at are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const USER_AGENT: &str = "user-agent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderValue {
    /// Header name as the client sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub uri: String,
    #[serde(default)]
    pub headers: HashMap<String, Vec<HeaderValue>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestDescriptor {
    pub fn new(uri: impl Into<String>) -> Self {
        RequestDescriptor {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Appends `value` after any values already recorded for `name`.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.push_header(name, value.into());
        self
    }

    /// Groups an ordered header list, e.g. the host's request header map,
    /// by lowercase name.
    pub fn from_header_pairs<I>(uri: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut request = RequestDescriptor::new(uri);
        for (name, value) in pairs {
            request.push_header(&name, value);
        }
        request
    }

    pub fn first_header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())?
            .first()
            .map(|h| h.value.as_str())
    }

    fn push_header(&mut self, name: &str, value: String) {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(HeaderValue {
                key: Some(name.to_string()),
                value,
            });
    }
}

/// Viewer-request event envelope: `Records[0].cf.request`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub cf: CfRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfRecord {
    pub request: RequestDescriptor,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeEvent {
    pub fn into_request(self) -> Option<RequestDescriptor> {
        self.records.into_iter().next().map(|record| record.cf.request)
    }
}
