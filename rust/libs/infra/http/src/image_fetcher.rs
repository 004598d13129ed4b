use std::time::Duration;

use async_trait::async_trait;
use domain::{
    model::{Coordinate, ImageFormat, SatelliteImage},
    ports::{ImageFetcherError, SatelliteImageFetcher},
};
use reqwest::{Client, header::CONTENT_TYPE};
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// URL テンプレートの `{lat}` / `{lon}` を座標で置き換えて画像を取得する。
pub struct ReqwestSatelliteImageFetcher {
    client: Client,
    url_template: String,
    fallback_format: ImageFormat,
}

impl ReqwestSatelliteImageFetcher {
    pub fn new(client: Client, url_template: impl Into<String>) -> Self {
        Self {
            client,
            url_template: url_template.into(),
            fallback_format: ImageFormat::default(),
        }
    }

    pub fn with_timeout(
        url_template: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ImageFetcherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ImageFetcherError::FetchError(e.to_string()))?;
        Ok(Self::new(client, url_template))
    }

    /// `Content-Type` から形式を判定できない場合に使う形式。
    pub fn fallback_format(mut self, format: ImageFormat) -> Self {
        self.fallback_format = format;
        self
    }

    fn build_url(&self, coordinate: &Coordinate) -> String {
        self.url_template
            .replace("{lat}", &coordinate.lat.to_string())
            .replace("{lon}", &coordinate.lon.to_string())
    }
}

#[async_trait]
impl SatelliteImageFetcher for ReqwestSatelliteImageFetcher {
    async fn fetch_image(
        &self,
        coordinate: &Coordinate,
    ) -> Result<SatelliteImage, ImageFetcherError> {
        let url = self.build_url(coordinate);
        debug!("Fetching satellite image from: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            debug!("URLの取得に失敗: {:?}", e);
            ImageFetcherError::FetchError(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Unexpected status code: {}", status);
            return Err(ImageFetcherError::UnexpectedStatus(status.as_u16()));
        }

        let format = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(ImageFormat::from_content_type)
            .unwrap_or(self.fallback_format);

        let data = response.bytes().await.map_err(|e| {
            debug!("レスポンスの読み込みに失敗: {:?}", e);
            ImageFetcherError::FetchError(e.to_string())
        })?;

        debug!("Got {} bytes ({:?})", data.len(), format);
        Ok(SatelliteImage { data, format })
    }
}
