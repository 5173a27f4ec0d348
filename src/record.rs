use crate::policy::Policy;
use crate::util::path::normalize_listed;
use std::fmt;

/// One listed path and the policy's verdict on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    raw: String,
    normalized: String,
    matched: bool,
    captures: Vec<String>,
}

impl PathRecord {
    /// Normalize a raw listing line and evaluate it once
    pub fn evaluate(raw: impl Into<String>, policy: &Policy) -> Self {
        let raw = raw.into();
        let normalized = normalize_listed(&raw).to_string();
        let captures: Vec<String> = policy
            .evaluate(&normalized)
            .map(str::to_string)
            .into_iter()
            .collect();

        Self {
            matched: !captures.is_empty(),
            raw,
            normalized,
            captures,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    #[cfg(test)]
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    /// Diagnostic line listing the matched spans, e.g. `["docs/"]` or `[]`
    pub fn diagnostic(&self) -> String {
        format!("{:?}", self.captures)
    }
}

/// `<normalized>, <True|False>`
impl fmt::Display for PathRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.matched { "True" } else { "False" };
        write!(f, "{}, {}", self.normalized, verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::policy::PolicyKind;

    fn policy(kind: PolicyKind) -> Policy {
        Policy::build(kind, &Config::default()).unwrap()
    }

    #[test]
    fn test_matched_record() {
        let record = PathRecord::evaluate("./docs/", &policy(PolicyKind::DirectoryDenylist));
        assert_eq!(record.raw(), "./docs/");
        assert_eq!(record.normalized(), "docs/");
        assert!(record.matched());
        assert_eq!(record.captures(), ["docs/".to_string()]);
        assert_eq!(record.diagnostic(), r#"["docs/"]"#);
        assert_eq!(record.to_string(), "docs/, True");
    }

    #[test]
    fn test_unmatched_record() {
        let record = PathRecord::evaluate("./README.md", &policy(PolicyKind::KnownPaths));
        assert!(!record.matched());
        assert!(record.captures().is_empty());
        assert_eq!(record.diagnostic(), "[]");
        assert_eq!(record.to_string(), "README.md, False");
    }

    #[test]
    fn test_root_entry_normalizes_to_empty() {
        for kind in [PolicyKind::DirectoryDenylist, PolicyKind::KnownPaths] {
            let record = PathRecord::evaluate("./", &policy(kind));
            assert_eq!(record.normalized(), "");
            assert!(!record.matched());
            assert_eq!(record.to_string(), ", False");
        }
    }
}
