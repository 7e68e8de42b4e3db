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

use thiserror::Error;

/// Failures while setting the plugin up. Request handling has no error path.
#[derive(Error, Debug)]
pub enum Error {
    #[error("plugin configuration is not valid UTF-8: {0}")]
    ConfigEncoding(#[from] std::str::Utf8Error),
    #[error("invalid plugin configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}
