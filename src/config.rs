/// Explicit runtime configuration, resolved once in `main` and passed down.
/// Nothing in the pipeline reads module-level state.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub language: String,
    pub page_size: u32,
    pub cache_ttl_secs: u64,
}

pub const DEFAULT_API_BASE: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
