use anyhow::{Context, Result, bail};

use gasket_engine::coords::Triangle;

/// Environment variable overriding [`GasketConfig::depth`].
pub const DEPTH_ENV: &str = "GASKET_DEPTH";

/// Deepest subdivision accepted from the environment (3^11 = 177,147 vertices).
pub const MAX_DEPTH: u32 = 10;

/// What to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct GasketConfig {
    /// Recursion depth; `3^(depth + 1)` vertices are generated.
    pub depth: u32,
    pub seed: Triangle,
}

impl Default for GasketConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            seed: Triangle::centered(),
        }
    }
}

impl GasketConfig {
    /// Defaults, with `GASKET_DEPTH` applied when set.
    pub fn from_env() -> Result<Self> {
        Self::from_depth_var(std::env::var(DEPTH_ENV).ok().as_deref())
    }

    fn from_depth_var(value: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = value {
            config.depth = parse_depth(raw).with_context(|| format!("invalid {DEPTH_ENV}"))?;
        }
        Ok(config)
    }
}

fn parse_depth(raw: &str) -> Result<u32> {
    let depth: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("{raw:?} is not a non-negative integer"))?;
    if depth > MAX_DEPTH {
        bail!("depth {depth} exceeds the maximum of {MAX_DEPTH}");
    }
    Ok(depth)
}
