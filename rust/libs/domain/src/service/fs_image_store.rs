use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::ports::{ImageStore, ImageStoreError};

/// ローカルファイルシステムに画像を書き出すストア。
#[derive(Clone, Copy, Debug, Default)]
pub struct FsImageStore;

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(
        &self,
        output_dir: &Path,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, ImageStoreError> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| ImageStoreError::CreateDir {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let path = output_dir.join(file_name);

        // 途中で失敗しても最終パスに不完全なファイルを残さない。
        // TempPath はドロップ時に一時ファイルを削除する
        let temp_path = tempfile::Builder::new()
            .prefix(".satfetch-")
            .tempfile_in(output_dir)
            .map_err(|source| ImageStoreError::Write {
                path: path.clone(),
                source,
            })?
            .into_temp_path();

        tokio::fs::write(&temp_path, data)
            .await
            .map_err(|source| ImageStoreError::Write {
                path: path.clone(),
                source,
            })?;

        temp_path
            .persist(&path)
            .map_err(|e| ImageStoreError::Write {
                path: path.clone(),
                source: e.error,
            })?;

        debug!(path = %path.display(), bytes = data.len(), "画像を書き出しました");
        Ok(path)
    }
}
