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

//! Compiled-in table of per-release software update catalogs.

use crate::client::ClientIdentifier;
use std::collections::HashMap;

/// Directory every generic catalog request starts with.
pub const CATALOG_DIR: &str = "/content/catalogs/";

/// Directory holding the merged per-release catalogs. A path that already
/// contains it has been rewritten.
pub const MERGED_CATALOG_DIR: &str = "/content/catalogs/others/";

// Darwin 19 and later fetch their own catalog names and need no rewrite.
const LEGACY_CATALOGS: &[(&str, &str)] = &[
    ("Darwin/8", "/content/catalogs/"),
    ("Darwin/9", "/content/catalogs/others/index-leopard.merged-1."),
    ("Darwin/10", "/content/catalogs/others/index-leopard-snowleopard.merged-1."),
    ("Darwin/11", "/content/catalogs/others/index-lion-snowleopard-leopard.merged-1."),
    (
        "Darwin/12",
        "/content/catalogs/others/index-mountainlion-lion-snowleopard-leopard.merged-1.",
    ),
    (
        "Darwin/13",
        "/content/catalogs/others/index-10.9-mountainlion-lion-snowleopard-leopard.merged-1.",
    ),
    (
        "Darwin/14",
        "/content/catalogs/others/index-10.10-10.9-mountainlion-lion-snowleopard-leopard.merged-1.",
    ),
    (
        "Darwin/15",
        "/content/catalogs/others/index-10.11-10.10-10.9-mountainlion-lion-snowleopard-leopard.merged-1.",
    ),
    (
        "Darwin/16",
        "/content/catalogs/others/index-10.12-10.11-10.10-10.9-mountainlion-lion-snowleopard-leopard.merged-1.",
    ),
    (
        "Darwin/17",
        "/content/catalogs/others/index-10.13-10.12-10.11-10.10-10.9-mountainlion-lion-snowleopard-leopard.merged-1.",
    ),
    (
        "Darwin/18",
        "/content/catalogs/others/index-10.14-10.13-10.12-10.11-10.10-10.9-mountainlion-lion-snowleopard-leopard.merged-1.",
    ),
];

/// Maps a client OS release (`Darwin/<major>`) to the path prefix that
/// replaces [`CATALOG_DIR`] for that client.
///
/// Built once per plugin and only read afterwards.
#[derive(Debug, Clone)]
pub struct VersionTable {
    prefixes: HashMap<&'static str, &'static str>,
}

impl VersionTable {
    pub fn builtin() -> Self {
        VersionTable {
            prefixes: LEGACY_CATALOGS.iter().copied().collect(),
        }
    }

    /// Exact lookup; the identifier is already in canonical `Darwin/<major>` form.
    pub fn prefix_for(&self, client: &ClientIdentifier) -> Option<&'static str> {
        self.prefixes.get(client.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.prefixes.iter().map(|(k, v)| (*k, *v))
    }
}
