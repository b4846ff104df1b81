use super::Result;
use crate::entities::ArtifactName;

pub trait ArtifactStore {
    /// Store the data and return its public URL.
    fn upload(
        &self,
        bucket: &str,
        name: &ArtifactName,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String>;
}

/// The public URL of an artifact below the given base URL.
pub fn public_artifact_url(base_url: &str, bucket: &str, name: &ArtifactName) -> String {
    format!("{}/{bucket}/{name}", base_url.trim_end_matches('/'))
}
