use serde::{Deserialize, Deserializer};

/// Reads JSON `null` as the type's default, like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ModelInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
}

/// Token counters for the most recent request
#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(default)]
pub struct CurrentUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub input_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_creation_input_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_read_input_tokens: u64,
}

impl CurrentUsage {
    pub fn total(&self) -> u64 {
        self.input_tokens
            .saturating_add(self.cache_creation_input_tokens)
            .saturating_add(self.cache_read_input_tokens)
    }
}

/// `current_usage` is `null` until the first API response of a session
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ContextWindow {
    #[serde(deserialize_with = "null_as_default")]
    pub context_window_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_usage: CurrentUsage,
}

/// Aggregate cost fields provided by Claude Code
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct CostInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub total_cost_usd: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_duration_ms: f64,
}

/// One statusline input document. Absent or `null` fields decode to zero/empty.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SessionSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub model: ModelInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub context_window: ContextWindow,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cost: CostInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub cwd: String,
}

impl SessionSnapshot {
    /// Decodes the first JSON value in `input`; anything after it is ignored.
    /// A top-level `null` yields an empty snapshot.
    pub fn from_json_slice(input: &[u8]) -> anyhow::Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(input).into_iter::<Option<Self>>();
        match values.next() {
            Some(value) => Ok(value?.unwrap_or_default()),
            None => anyhow::bail!("empty input"),
        }
    }
}
