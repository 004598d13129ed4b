use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Coordinate, SatelliteImage};

#[derive(Clone, Debug, Error)]
pub enum ImageFetcherError {
    #[error("衛星画像プロバイダーが未実装です")]
    NotImplemented,

    #[error("衛星画像の取得に失敗: {0}")]
    FetchError(String),

    #[error("衛星画像プロバイダーが予期しないステータスを返しました: {0}")]
    UnexpectedStatus(u16),
}

#[async_trait]
pub trait SatelliteImageFetcher {
    async fn fetch_image(&self, coordinate: &Coordinate)
    -> Result<SatelliteImage, ImageFetcherError>;
}
