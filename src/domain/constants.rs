/// Channel a production handoff must have been built for.
pub const PRODUCTION_CHANNEL: &str = "production";

/// Base path the production deployment is served under.
pub const PRODUCTION_BASE_PATH: &str = "/conspectus/webapp/";

pub const INDEX_HTML: &str = "index.html";
pub const WEB_MANIFEST: &str = "manifest.webmanifest";
pub const ASSETS_DIR: &str = "assets";
pub const SERVICE_WORKER_FILE: &str = "sw.js";

/// Extensions of build outputs scanned for root-path leakage.
pub const TEXT_FILE_EXTENSIONS: [&str; 4] = ["html", "js", "css", "webmanifest"];

pub const DEFAULT_DIST_DIR: &str = "dist";
