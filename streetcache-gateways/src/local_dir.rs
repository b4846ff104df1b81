use anyhow::Context as _;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use streetcache_core::{
    entities::ArtifactName,
    gateways::{storage::*, Result},
};

/// Stores artifacts as files in a local directory,
/// e.g. for development and testing.
///
/// Each bucket is a subdirectory. The files are expected
/// to be served below `public_base_url` by a separate server.
pub struct LocalDirStore {
    dir: PathBuf,
    public_base_url: String,
}

impl LocalDirStore {
    pub fn try_new<P: AsRef<Path>>(dir: P, public_base_url: String) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            public_base_url,
        })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactStore for LocalDirStore {
    fn upload(
        &self,
        bucket: &str,
        name: &ArtifactName,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        let bucket_dir = self.dir.join(bucket);
        fs::create_dir_all(&bucket_dir)
            .with_context(|| format!("Unable to create directory {}", bucket_dir.display()))?;
        let file_path = bucket_dir.join(name.as_str());
        log::debug!(
            "Writing {} bytes of {content_type} to {}",
            data.len(),
            file_path.display()
        );
        fs::write(&file_path, data)
            .with_context(|| format!("Unable to write file {}", file_path.display()))?;
        Ok(public_artifact_url(&self.public_base_url, bucket, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streetcache_core::entities::JPEG_CONTENT_TYPE;

    #[test]
    fn write_artifacts_into_bucket_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let store =
            LocalDirStore::try_new(tmp.path().join("artifacts"), "http://localhost:8000/".into())
                .unwrap();
        let name = ArtifactName::new_jpeg();
        let url = store
            .upload("streetview_images", &name, JPEG_CONTENT_TYPE, vec![0xff, 0xd8, 0xff])
            .unwrap();
        assert_eq!(
            format!("http://localhost:8000/streetview_images/{name}"),
            url
        );
        let file_path = store.path().join("streetview_images").join(name.as_str());
        assert_eq!(vec![0xff, 0xd8, 0xff], fs::read(file_path).unwrap());
    }

    #[test]
    fn overwrite_existing_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalDirStore::try_new(tmp.path(), "http://localhost".into()).unwrap();
        let name: ArtifactName = "a.jpg".parse().unwrap();
        store.upload("img", &name, JPEG_CONTENT_TYPE, vec![1]).unwrap();
        store.upload("img", &name, JPEG_CONTENT_TYPE, vec![2]).unwrap();
        assert_eq!(vec![2], fs::read(tmp.path().join("img").join("a.jpg")).unwrap());
    }
}
