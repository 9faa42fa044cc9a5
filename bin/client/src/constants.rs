/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Environment variable overriding the default server URL
pub const SERVER_URL_ENV: &str = "SERVER_URL";

/// Contribution endpoint path
pub const CONTRIBUTE_ENDPOINT: &str = "/podcast/contribute";
