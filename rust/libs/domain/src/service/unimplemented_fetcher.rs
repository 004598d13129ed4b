use async_trait::async_trait;
use tracing::debug;

use crate::{
    model::{Coordinate, SatelliteImage},
    ports::{ImageFetcherError, SatelliteImageFetcher},
};

/// プロバイダー未設定時の既定の取得器。I/O を一切行わず常に `NotImplemented` を返す。
#[derive(Clone, Copy, Debug, Default)]
pub struct UnimplementedImageFetcher;

#[async_trait]
impl SatelliteImageFetcher for UnimplementedImageFetcher {
    async fn fetch_image(
        &self,
        coordinate: &Coordinate,
    ) -> Result<SatelliteImage, ImageFetcherError> {
        debug!(%coordinate, "衛星画像プロバイダーが設定されていません");
        Err(ImageFetcherError::NotImplemented)
    }
}
