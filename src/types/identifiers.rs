use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of the scored résumé text.
///
/// Lets callers correlate or cache reports without keeping the text itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeDigest(String);

impl ResumeDigest {
    pub fn from_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ResumeDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
