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

// [START serviceextensions_plugin_sucatalog_rewrite]
//! Sends legacy macOS software update clients to the merged catalog for their
//! Darwin release.
//!
//! Requests for `/content/catalogs/index*.sucatalog` are matched against the
//! client's `user-agent`; anything else passes through untouched.

pub mod catalogs;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod rewrite;

#[cfg(target_arch = "wasm32")]
mod context;

pub use catalogs::VersionTable;
pub use client::ClientIdentifier;
pub use config::PluginConfig;
pub use error::Error;
pub use request::{EdgeEvent, HeaderValue, RequestDescriptor};
pub use rewrite::CatalogRewriter;

#[cfg(target_arch = "wasm32")]
proxy_wasm::main! {{
    proxy_wasm::set_log_level(proxy_wasm::types::LogLevel::Trace);
    proxy_wasm::set_root_context(|_| -> Box<dyn proxy_wasm::traits::RootContext> {
        Box::new(context::CatalogRootContext::default())
    });
}}

/// Builds the rewriter from the raw plugin configuration.
pub fn build_rewriter(config: Option<&[u8]>) -> Result<CatalogRewriter, Error> {
    let config = PluginConfig::from_bytes(config)?;
    Ok(CatalogRewriter::new(VersionTable::builtin())?.with_rewrite_logging(config.log_rewrites))
}
// [END serviceextensions_plugin_sucatalog_rewrite]

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rewriter_without_config() {
        let rewriter = build_rewriter(None).unwrap();
        assert_eq!(rewriter.table().len(), 11);
        let request = RequestDescriptor::new("/content/catalogs/index.sucatalog")
            .with_header("User-Agent", "Darwin/14.0.0");
        assert_eq!(
            rewriter.decide(request).uri,
            "/content/catalogs/others/index-10.10-10.9-mountainlion-lion-snowleopard-leopard.merged-1.index.sucatalog"
        );
    }

    #[test]
    fn test_build_rewriter_with_logging_disabled() {
        let rewriter = build_rewriter(Some(&br#"{"log_rewrites": false}"#[..])).unwrap();
        let request = RequestDescriptor::new("/content/catalogs/index.sucatalog")
            .with_header("User-Agent", "Darwin/9.8.0");
        assert_eq!(
            rewriter.decide(request).uri,
            "/content/catalogs/others/index-leopard.merged-1.index.sucatalog"
        );
    }

    #[test]
    fn test_build_rewriter_rejects_bad_config() {
        assert!(matches!(build_rewriter(Some(&b"["[..])), Err(Error::Config(_))));
    }
}
