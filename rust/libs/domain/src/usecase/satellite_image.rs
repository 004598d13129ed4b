use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::{
    model::{Coordinate, SampleId},
    ports::{ImageFetcherError, ImageStore, SatelliteImageFetcher},
};

#[async_trait]
pub trait SatelliteImageUseCase {
    /// 座標の衛星画像を取得して `output_dir` に保存する。失敗時は `None`。
    async fn fetch(
        &self,
        coordinate: &Coordinate,
        sample_id: SampleId,
        output_dir: &Path,
    ) -> Option<PathBuf>;
}

pub struct SatelliteImageUseCaseImpl<F, S>
where
    F: SatelliteImageFetcher + Send + Sync,
    S: ImageStore + Send + Sync,
{
    image_fetcher: F,
    image_store: S,
}

impl<F, S> SatelliteImageUseCaseImpl<F, S>
where
    F: SatelliteImageFetcher + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(image_fetcher: F, image_store: S) -> Self {
        Self {
            image_fetcher,
            image_store,
        }
    }
}

#[async_trait]
impl<F, S> SatelliteImageUseCase for SatelliteImageUseCaseImpl<F, S>
where
    F: SatelliteImageFetcher + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn fetch(
        &self,
        coordinate: &Coordinate,
        sample_id: SampleId,
        output_dir: &Path,
    ) -> Option<PathBuf> {
        info!(%sample_id, "Fetching image for {}...", coordinate);

        // 取得に成功するまでファイルシステムには触れない
        let image = match self.image_fetcher.fetch_image(coordinate).await {
            Ok(image) => image,
            Err(ImageFetcherError::NotImplemented) => {
                warn!(%sample_id, "衛星画像の取得は未実装です");
                return None;
            }
            Err(e) => {
                error!(%sample_id, "衛星画像の取得に失敗しました: {}", e);
                return None;
            }
        };

        let file_name = sample_id.file_name(image.format);
        match self
            .image_store
            .save(output_dir, &file_name, &image.data)
            .await
        {
            Ok(path) => {
                info!(%sample_id, path = %path.display(), "衛星画像を保存しました");
                Some(path)
            }
            Err(e) => {
                error!(%sample_id, "衛星画像の保存に失敗しました: {}", e);
                None
            }
        }
    }
}
