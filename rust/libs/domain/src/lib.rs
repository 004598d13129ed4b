//! 衛星画像取得のドメイン層。
//!
//! モデル・ポート・ユースケースと、既定のサービス実装を提供する。

pub mod model;
pub mod ports;
pub mod service;
pub mod usecase;

use std::path::{Path, PathBuf};

use model::{Coordinate, SampleId};
use service::{FsImageStore, UnimplementedImageFetcher};
use usecase::{SatelliteImageUseCase, SatelliteImageUseCaseImpl};

/// 指定座標の衛星画像を取得し、`output_dir` に保存したパスを返す。
///
/// 既定ではプロバイダーが設定されていないため、進捗メッセージを出力して
/// 常に `None` を返す。ネットワークにもファイルシステムにも触れない。
/// プロバイダーを使う場合は [`SatelliteImageUseCaseImpl`] を直接組み立てる。
pub async fn fetch_satellite_image(
    lat: f64,
    lon: f64,
    sample_id: i64,
    output_dir: &Path,
) -> Option<PathBuf> {
    let usecase = SatelliteImageUseCaseImpl::new(UnimplementedImageFetcher, FsImageStore);
    usecase
        .fetch(&Coordinate::new(lat, lon), SampleId::from(sample_id), output_dir)
        .await
}
