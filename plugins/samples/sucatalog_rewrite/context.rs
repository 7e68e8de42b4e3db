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

use crate::request::RequestDescriptor;
use crate::rewrite::CatalogRewriter;
use log::*;
use proxy_wasm::traits::*;
use proxy_wasm::types::*;
use std::rc::Rc;

#[derive(Default)]
pub(crate) struct CatalogRootContext {
    rewriter: Option<Rc<CatalogRewriter>>,
}

impl Context for CatalogRootContext {}

impl RootContext for CatalogRootContext {
    fn on_configure(&mut self, _: usize) -> bool {
        let config = self.get_plugin_configuration();
        match crate::build_rewriter(config.as_deref()) {
            Ok(rewriter) => {
                info!("Catalog table size {0}", rewriter.table().len());
                self.rewriter = Some(Rc::new(rewriter));
                true
            }
            Err(e) => {
                error!("Failed to configure catalog rewrite: {}", e);
                false
            }
        }
    }

    fn create_http_context(&self, _: u32) -> Option<Box<dyn HttpContext>> {
        Some(Box::new(CatalogHttpContext {
            // shallow copy, ref count only
            rewriter: self.rewriter.clone(),
        }))
    }

    fn get_type(&self) -> Option<ContextType> {
        Some(ContextType::HttpContext)
    }
}

struct CatalogHttpContext {
    rewriter: Option<Rc<CatalogRewriter>>,
}

impl Context for CatalogHttpContext {}

impl HttpContext for CatalogHttpContext {
    fn on_http_request_headers(&mut self, _: usize, _: bool) -> Action {
        let rewriter = match &self.rewriter {
            Some(rewriter) => rewriter,
            None => return Action::Continue,
        };
        let path = match self.get_http_request_header(":path") {
            Some(path) => path,
            None => return Action::Continue,
        };
        // Most traffic stops here without reading the rest of the headers.
        if !rewriter.is_catalog_uri(&path) {
            return Action::Continue;
        }

        let request =
            RequestDescriptor::from_header_pairs(path.as_str(), self.get_http_request_headers());
        let decided = rewriter.decide(request);
        if decided.uri != path {
            self.set_http_request_header(":path", Some(&decided.uri));
        }
        Action::Continue
    }
}
