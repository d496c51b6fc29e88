use serde::Deserialize;

/// The rate limiter refills one request per whole nanosecond at most.
pub const MAX_RATE_LIMIT_PER_SECOND: u64 = 1_000_000_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Reject answer sheets that leave questions unanswered.
    pub require_all_answers: bool,
    /// How long a computed assessment stays retrievable by id.
    pub assessment_cache_ttl_secs: u64,
    pub assessment_cache_capacity: u64,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            require_all_answers: true,
            assessment_cache_ttl_secs: 1800,
            assessment_cache_capacity: 10_000,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            port: match var("PORT") {
                Some(port) => port
                    .trim()
                    .parse()
                    .ok()
                    .filter(|p: &u16| *p != 0)
                    .ok_or_else(|| {
                        anyhow::anyhow!("PORT must be a valid number between 1-65535")
                    })?,
                None => defaults.port,
            },
            require_all_answers: match var("REQUIRE_ALL_ANSWERS") {
                Some(flag) => parse_bool(&flag).ok_or_else(|| {
                    anyhow::anyhow!("REQUIRE_ALL_ANSWERS must be true or false, got '{}'", flag)
                })?,
                None => defaults.require_all_answers,
            },
            assessment_cache_ttl_secs: match var("ASSESSMENT_CACHE_TTL_SECS") {
                Some(ttl) => {
                    let ttl: u64 = ttl.trim().parse().map_err(|_| {
                        anyhow::anyhow!("ASSESSMENT_CACHE_TTL_SECS must be a number of seconds")
                    })?;
                    if ttl == 0 {
                        anyhow::bail!("ASSESSMENT_CACHE_TTL_SECS must be greater than 0");
                    }
                    ttl
                }
                None => defaults.assessment_cache_ttl_secs,
            },
            assessment_cache_capacity: match var("ASSESSMENT_CACHE_CAPACITY") {
                Some(cap) => cap.trim().parse().map_err(|_| {
                    anyhow::anyhow!("ASSESSMENT_CACHE_CAPACITY must be a non-negative number")
                })?,
                None => defaults.assessment_cache_capacity,
            },
            rate_limit_per_second: match var("RATE_LIMIT_PER_SECOND") {
                Some(rate) => {
                    let rate: u64 = rate.trim().parse().map_err(|_| {
                        anyhow::anyhow!("RATE_LIMIT_PER_SECOND must be a number")
                    })?;
                    if rate == 0 || rate > MAX_RATE_LIMIT_PER_SECOND {
                        anyhow::bail!(
                            "RATE_LIMIT_PER_SECOND must be between 1 and {}",
                            MAX_RATE_LIMIT_PER_SECOND
                        );
                    }
                    rate
                }
                None => defaults.rate_limit_per_second,
            },
            rate_limit_burst: match var("RATE_LIMIT_BURST") {
                Some(burst) => {
                    let burst: u32 = burst
                        .trim()
                        .parse()
                        .map_err(|_| anyhow::anyhow!("RATE_LIMIT_BURST must be a number"))?;
                    if burst == 0 {
                        anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
                    }
                    burst
                }
                None => defaults.rate_limit_burst,
            },
            max_body_bytes: match var("MAX_BODY_BYTES") {
                Some(limit) => limit
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a number of bytes"))?,
                None => defaults.max_body_bytes,
            },
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Require all answers: {}", config.require_all_answers);
        tracing::debug!(
            "Assessment cache: ttl={}s capacity={}",
            config.assessment_cache_ttl_secs,
            config.assessment_cache_capacity
        );
        tracing::debug!(
            "Rate limit: {}/s burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );

        Ok(config)
    }

    /// Nanoseconds between rate limiter refills, one request per refill.
    pub fn rate_limit_refill_nanos(&self) -> u64 {
        (1_000_000_000 / self.rate_limit_per_second.max(1)).max(1)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
