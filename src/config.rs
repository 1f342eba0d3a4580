//! Runtime environment the web app is configured with at build time.

use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

pub const AZURE_CLIENT_ID: &str = "VITE_AZURE_CLIENT_ID";
pub const DEPLOY_BASE_PATH: &str = "VITE_DEPLOY_BASE_PATH";
pub const DEPLOY_PUBLIC_URL: &str = "VITE_DEPLOY_PUBLIC_URL";

pub const REQUIRED_RUNTIME_ENV_KEYS: [&str; 1] = [AZURE_CLIENT_ID];
pub const OPTIONAL_RUNTIME_ENV_KEYS: [&str; 2] = [DEPLOY_BASE_PATH, DEPLOY_PUBLIC_URL];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeEnv {
    pub azure_client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_base_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_public_url: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required environment variable(s): {}. Add them to your .env file (see .env.example) and restart the app.", missing_keys.join(", "))]
pub struct RuntimeEnvError {
    pub missing_keys: Vec<String>,
}

#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("Missing expected file: {}", .0.display())]
    Missing(std::path::PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error(".env.example is missing runtime key(s): {}", .0.join(", "))]
    MissingKeys(Vec<String>),
}

/// Where runtime variables come from: the process environment, a parsed
/// dotenv file, or a map in tests.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims every value; blank values count as absent.
pub fn load_runtime_env(source: &dyn EnvSource) -> Result<RuntimeEnv, RuntimeEnvError> {
    let Some(azure_client_id) = normalize(source.var(AZURE_CLIENT_ID)) else {
        return Err(RuntimeEnvError {
            missing_keys: vec![AZURE_CLIENT_ID.to_string()],
        });
    };

    Ok(RuntimeEnv {
        azure_client_id,
        deploy_base_path: normalize(source.var(DEPLOY_BASE_PATH)),
        deploy_public_url: normalize(source.var(DEPLOY_PUBLIC_URL)),
    })
}

/// Parses a dotenv file without touching the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, EnvFileError> {
    if !path.exists() {
        return Err(EnvFileError::Missing(path.to_path_buf()));
    }
    let read_err = |source| EnvFileError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(read_err)? {
        let (key, value) = item.map_err(read_err)?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn env_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([A-Z0-9_]+)\s*=").expect("static regex pattern"))
}

/// Keys declared in a `.env`-style document, commented lines excluded.
pub fn extract_env_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter_map(|line| env_line_re().captures(line))
        .map(|c| c[1].to_string())
        .collect()
}

/// Every runtime key must be documented in `.env.example`.
pub fn check_env_example(content: &str) -> Result<BTreeSet<String>, EnvFileError> {
    let keys = extract_env_keys(content);
    let missing: Vec<String> = REQUIRED_RUNTIME_ENV_KEYS
        .iter()
        .chain(OPTIONAL_RUNTIME_ENV_KEYS.iter())
        .filter(|k| !keys.contains(**k))
        .map(|k| k.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(EnvFileError::MissingKeys(missing));
    }
    Ok(keys)
}
