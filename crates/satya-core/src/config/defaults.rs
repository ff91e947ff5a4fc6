// Single source of truth for all default values.

// --- Service ---
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_VERIFY_PATH: &str = "/verify_and_log";
pub const DEFAULT_EXPLORER_PATH: &str = "/chain";

// --- Session ---
pub const DEFAULT_TRUST_THRESHOLD: f64 = 70.0; // strictly greater is trusted
pub const DEFAULT_HASH_PREVIEW_LEN: usize = 16;
pub const DEFAULT_ALLOW_CONCURRENT_SUBMISSIONS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files & environment ---
pub const DEFAULT_CONFIG_FILENAME: &str = "satya.toml";
pub const ENV_SERVICE_URL: &str = "SATYA_SERVICE_URL";
pub const ENV_LOG: &str = "SATYA_LOG";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "SATYA_REQUEST_TIMEOUT_SECS";
