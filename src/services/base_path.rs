use std::fmt;

/// Deployment URL prefix, always starting and ending with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn normalize(raw: &str) -> Self {
        let mut value = if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{}", raw)
        };
        if !value.ends_with('/') {
            value.push('/');
        }
        BasePath(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn without_trailing_slash(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    pub fn contains(&self, reference: &str) -> bool {
        reference == self.without_trailing_slash() || reference.starts_with(self.as_str())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::BasePath;

    #[test]
    fn normalize_adds_missing_slashes() {
        assert_eq!(BasePath::normalize("app").as_str(), "/app/");
        assert_eq!(BasePath::normalize("/app").as_str(), "/app/");
        assert_eq!(BasePath::normalize("app/").as_str(), "/app/");
        assert_eq!(BasePath::normalize("/conspectus/webapp/").as_str(), "/conspectus/webapp/");
        assert_eq!(BasePath::normalize("/").as_str(), "/");
    }

    #[test]
    fn contains_matches_base_and_descendants() {
        let base = BasePath::normalize("/app/");
        assert!(base.contains("/app"));
        assert!(base.contains("/app/assets/index.js"));
        assert!(!base.contains("/application/index.js"));
        assert!(!base.contains("/other/app.js"));
    }
}
