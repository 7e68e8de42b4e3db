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

use crate::error::Error;
use serde::Deserialize;

/// Optional JSON plugin configuration. It only tunes diagnostics; the
/// catalog table is compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Log the final path whenever a request is rewritten.
    pub log_rewrites: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self { log_rewrites: true }
    }
}

impl PluginConfig {
    /// Parses the bytes from `get_plugin_configuration`. Absent or blank
    /// configuration means defaults.
    pub fn from_bytes(bytes: Option<&[u8]>) -> Result<Self, Error> {
        let text = match bytes {
            Some(bytes) => std::str::from_utf8(bytes)?,
            None => return Ok(Self::default()),
        };
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(bytes: &[u8]) -> Result<PluginConfig, Error> {
        PluginConfig::from_bytes(Some(bytes))
    }

    #[test]
    fn test_defaults_when_absent_or_blank() {
        assert_eq!(PluginConfig::from_bytes(None).unwrap(), PluginConfig::default());
        assert_eq!(parse(b"  \n").unwrap(), PluginConfig::default());
        assert_eq!(parse(b"{}").unwrap(), PluginConfig { log_rewrites: true });
    }

    #[test]
    fn test_disable_rewrite_logging() {
        let config = parse(br#"{"log_rewrites": false}"#).unwrap();
        assert!(!config.log_rewrites);
    }

    #[test]
    fn test_rejects_malformed_config() {
        assert!(matches!(parse(b"log_rewrites=false"), Err(Error::Config(_))));
        assert!(matches!(parse(br#"{"catalogs": {}}"#), Err(Error::Config(_))));
        assert!(matches!(parse(&[0xff, 0xfe]), Err(Error::ConfigEncoding(_))));
    }
}
