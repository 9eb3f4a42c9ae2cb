pub const MODEL_ID: &str = "gemini-1.5-flash";

pub const DEFAULT_LANGUAGE_LABEL: &str = "code";

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_PORT: u16 = 5000;

pub const RATE_LIMIT_MAX_REQUESTS: u32 = 100;
pub const RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;
