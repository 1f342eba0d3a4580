use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A JSON field read without assuming its type. Checks compare strings
/// strictly; messages render any value as text.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct FieldValue(pub serde_json::Value);

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Empty strings, `false`, zero and null count as blank.
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::String(s) => s.is_empty(),
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::Array(_) | Value::Object(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct WebManifest {
    #[serde(default)]
    pub start_url: Option<FieldValue>,
    #[serde(default)]
    pub scope: Option<FieldValue>,
}

/// Artifact listing as returned by the CI artifacts API.
#[derive(Debug, Deserialize, Default)]
pub struct ArtifactsListing {
    /// A missing or non-array `artifacts` field reads as an empty listing.
    #[serde(default, deserialize_with = "lenient_artifacts")]
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone, Default)]
pub struct Artifact {
    pub name: Option<FieldValue>,
}

// Entries are counted as they appear; a malformed entry just has no usable name.
fn lenient_artifacts<'de, D>(deserializer: D) -> Result<Vec<Artifact>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| Artifact {
                name: item
                    .get("name")
                    .filter(|name| !name.is_null())
                    .cloned()
                    .map(FieldValue),
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeployMetadata {
    #[serde(default)]
    pub channel: Option<FieldValue>,
    #[serde(default)]
    pub base_path: Option<FieldValue>,
    #[serde(default)]
    pub source_branch: Option<FieldValue>,
    #[serde(default)]
    pub commit_sha: Option<FieldValue>,
    #[serde(default)]
    pub build_time_utc: Option<FieldValue>,
    #[serde(default)]
    pub quality_run_id: Option<FieldValue>,
    #[serde(default)]
    pub deploy_run_id: Option<FieldValue>,
}

#[derive(Debug, Serialize, Clone)]
pub struct BuildChannelReport {
    pub channel: String,
    pub base_path: String,
    pub dist: String,
    pub scanned_files: usize,
    pub script_assets: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct HandoffReport {
    pub artifact_name: String,
    pub commit_sha: String,
    pub source_branch: String,
    pub build_time_utc: String,
    pub quality_run_id: String,
    pub deploy_run_id: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct RouteReport {
    pub key: String,
    pub label: String,
    pub hash: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct EnvExampleReport {
    pub file: String,
    pub keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_artifacts_read_as_empty() {
        let listing: ArtifactsListing =
            serde_json::from_str(r#"{"artifacts": {"name": "x"}}"#).unwrap();
        assert!(listing.artifacts.is_empty());

        let listing: ArtifactsListing = serde_json::from_str("{}").unwrap();
        assert!(listing.artifacts.is_empty());
    }

    #[test]
    fn malformed_artifact_entries_still_count() {
        let listing: ArtifactsListing =
            serde_json::from_str(r#"{"artifacts": [{"name": "a"}, {"name": 7}, 3, null]}"#)
                .unwrap();
        assert_eq!(listing.artifacts.len(), 4);
        assert_eq!(listing.artifacts[1].name.as_ref().unwrap().to_string(), "7");
        assert!(listing.artifacts[2].name.is_none());
    }

    #[test]
    fn metadata_fields_accept_any_json_type() {
        let meta: DeployMetadata = serde_json::from_str(
            r#"{"commitSha": 123, "qualityRunId": 1001, "deployRunId": "2002", "channel": null}"#,
        )
        .unwrap();
        let sha = meta.commit_sha.unwrap();
        assert_eq!(sha.as_str(), None);
        assert_eq!(sha.to_string(), "123");
        assert_eq!(meta.quality_run_id.unwrap().to_string(), "1001");
        assert_eq!(meta.deploy_run_id.unwrap().to_string(), "2002");
        assert!(meta.channel.is_none());
    }

    #[test]
    fn blank_values() {
        for blank in [json!(""), json!(false), json!(0), json!(null)] {
            assert!(FieldValue(blank).is_blank());
        }
        for set in [json!("main"), json!(1), json!(true), json!([])] {
            assert!(!FieldValue(set).is_blank());
        }
    }
}
