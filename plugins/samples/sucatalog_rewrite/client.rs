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

use regex::Regex;
use std::fmt;

/// Darwin release token in a software update client's user-agent, e.g.
/// `Software%20Update (unknown version) CFNetwork/720.5.7 Darwin/14.5.0 (x86_64)`.
pub const OS_PATTERN: &str = r"(?i-u)darwin/([0-9]{1,2})";

/// Canonical `Darwin/<major>` token identifying which catalog a client reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentifier(String);

impl ClientIdentifier {
    pub fn from_major(major: &str) -> Self {
        ClientIdentifier(format!("Darwin/{}", major))
    }

    /// Finds the first release token in `user_agent`. The token is matched
    /// without regard to case but always comes back spelled `Darwin`.
    pub fn from_user_agent(os_match: &Regex, user_agent: &str) -> Option<Self> {
        let major = os_match.captures(user_agent)?.get(1)?;
        Some(Self::from_major(major.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(user_agent: &str) -> Option<String> {
        let os_match = Regex::new(OS_PATTERN).unwrap();
        ClientIdentifier::from_user_agent(&os_match, user_agent).map(|c| c.to_string())
    }

    #[test]
    fn test_extracts_major_version() {
        assert_eq!(extract("Darwin/14.0.0").as_deref(), Some("Darwin/14"));
        assert_eq!(
            extract("Software%20Update (unknown version) CFNetwork/454.4 Darwin/10.0.0 (i386)")
                .as_deref(),
            Some("Darwin/10")
        );
        assert_eq!(extract("Darwin/9.8.0").as_deref(), Some("Darwin/9"));
    }

    #[test]
    fn test_canonicalizes_case() {
        assert_eq!(extract("darwin/14.0.0").as_deref(), Some("Darwin/14"));
        assert_eq!(extract("DARWIN/18.2.0").as_deref(), Some("Darwin/18"));
    }

    #[test]
    fn test_takes_at_most_two_digits() {
        assert_eq!(extract("Darwin/145").as_deref(), Some("Darwin/14"));
    }

    #[test]
    fn test_first_token_wins() {
        assert_eq!(extract("Darwin/12 Darwin/17").as_deref(), Some("Darwin/12"));
    }

    #[test]
    fn test_no_token() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("curl/8.4.0"), None);
        assert_eq!(extract("Darwin/"), None);
        assert_eq!(extract("Darwin/x14"), None);
    }
}
