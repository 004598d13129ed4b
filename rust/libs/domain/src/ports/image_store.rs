use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("出力ディレクトリ {path:?} の作成に失敗: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("画像ファイル {path:?} の書き込みに失敗: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ImageStore {
    /// `output_dir` 配下に `file_name` として保存し、保存先のパスを返す。
    async fn save(
        &self,
        output_dir: &Path,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, ImageStoreError>;
}
