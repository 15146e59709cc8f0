// Engine configuration passed explicitly into validators and the import reconciler.

use serde::Deserialize;

pub const DEFAULT_MAX_REASON_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound, in characters, for absence and lifecycle reasons.
    pub max_reason_len: usize,
    pub import: ImportConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_reason_len: DEFAULT_MAX_REASON_LEN,
            import: ImportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Name of the root collection element of XML sources, matched case-insensitively.
    pub xml_root: String,
    pub truthy_tokens: Vec<String>,
    pub falsy_tokens: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            xml_root: "absences".to_string(),
            truthy_tokens: ["true", "1", "yes", "y", "x"].map(String::from).to_vec(),
            falsy_tokens: ["false", "0", "no", "n"].map(String::from).to_vec(),
        }
    }
}

impl ImportConfig {
    /// Interprets a full-day flag token. `None` when the token is neither truthy nor falsy.
    pub fn parse_flag(&self, raw: &str) -> Option<bool> {
        let token = raw.trim().to_lowercase();
        if self.truthy_tokens.iter().any(|t| t.eq_ignore_ascii_case(&token)) {
            Some(true)
        } else if self.falsy_tokens.iter().any(|t| t.eq_ignore_ascii_case(&token)) {
            Some(false)
        } else {
            None
        }
    }
}
