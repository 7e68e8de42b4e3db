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

use crate::catalogs::{VersionTable, CATALOG_DIR, MERGED_CATALOG_DIR};
use crate::client::{ClientIdentifier, OS_PATTERN};
use crate::error::Error;
use crate::request::{EdgeEvent, RequestDescriptor, USER_AGENT};
use log::{debug, info};
use regex::Regex;

/// Generic catalog requests, including branch catalogs such as
/// `index_testing.sucatalog`.
pub const CATALOG_PATTERN: &str = r"(?i-u)/content/catalogs/index[A-Za-z0-9_]*\.sucatalog";

/// Points legacy software update clients at the merged catalog for their
/// release.
#[derive(Debug, Clone)]
pub struct CatalogRewriter {
    catalog_match: Regex,
    os_match: Regex,
    table: VersionTable,
    log_rewrites: bool,
}

impl CatalogRewriter {
    pub fn new(table: VersionTable) -> Result<Self, Error> {
        Ok(CatalogRewriter {
            catalog_match: Regex::new(CATALOG_PATTERN)?,
            os_match: Regex::new(OS_PATTERN)?,
            table,
            log_rewrites: true,
        })
    }

    pub fn with_rewrite_logging(mut self, enabled: bool) -> Self {
        self.log_rewrites = enabled;
        self
    }

    pub fn table(&self) -> &VersionTable {
        &self.table
    }

    pub fn is_catalog_uri(&self, uri: &str) -> bool {
        self.catalog_match.is_match(uri)
    }

    /// Returns `request` with its uri pointed at the client's catalog, or
    /// untouched when anything needed for the rewrite is missing.
    pub fn decide(&self, mut request: RequestDescriptor) -> RequestDescriptor {
        if let Some(uri) = self.rewrite_uri(&request.uri, request.first_header(USER_AGENT)) {
            request.uri = uri;
        }
        request
    }

    /// Runs [`decide`](Self::decide) on the request carried by a viewer-request
    /// event. `None` only when the event holds no request.
    pub fn handle_event(&self, event: EdgeEvent) -> Option<RequestDescriptor> {
        event.into_request().map(|request| self.decide(request))
    }

    /// The rewritten uri, or `None` when the request passes through.
    ///
    /// Only the first exact `/content/catalogs/` is replaced. When that one
    /// already leads into the merged catalog directory the uri was rewritten
    /// before and is left alone.
    pub fn rewrite_uri(&self, uri: &str, user_agent: Option<&str>) -> Option<String> {
        if !self.catalog_match.is_match(uri) {
            return None;
        }
        let catalog_dir = match uri.find(CATALOG_DIR) {
            Some(start) => start,
            None => {
                debug!("no {} in catalog path {}", CATALOG_DIR, uri);
                return None;
            }
        };
        if uri[catalog_dir..].starts_with(MERGED_CATALOG_DIR) {
            debug!("catalog path already rewritten: {}", uri);
            return None;
        }
        let user_agent = match user_agent {
            Some(user_agent) => user_agent,
            None => {
                debug!("catalog request without user-agent: {}", uri);
                return None;
            }
        };
        let client = match ClientIdentifier::from_user_agent(&self.os_match, user_agent) {
            Some(client) => client,
            None => {
                debug!("no Darwin release in user-agent {:?}", user_agent);
                return None;
            }
        };
        let prefix = match self.table.prefix_for(&client) {
            Some(prefix) => prefix,
            None => {
                debug!("no catalog for {}", client);
                return None;
            }
        };

        let mut rewritten = String::with_capacity(uri.len() + prefix.len());
        rewritten.push_str(&uri[..catalog_dir]);
        rewritten.push_str(prefix);
        rewritten.push_str(&uri[catalog_dir + CATALOG_DIR.len()..]);
        if self.log_rewrites {
            info!("{}", rewritten);
        }
        Some(rewritten)
    }
}
