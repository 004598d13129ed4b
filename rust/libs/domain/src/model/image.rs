use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// `Content-Type` ヘッダーの値から形式を判定する。パラメータ部分は無視する。
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let media_type = content_type.split(';').next()?.trim().to_ascii_lowercase();
        match media_type.as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }
}

/// プロバイダーから取得した衛星画像。
#[derive(Clone, Debug)]
pub struct SatelliteImage {
    pub data: Bytes,
    pub format: ImageFormat,
}

impl SatelliteImage {
    pub fn new(data: impl Into<Bytes>, format: ImageFormat) -> Self {
        Self {
            data: data.into(),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_type() {
        assert_eq!(
            ImageFormat::from_content_type("image/png"),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_content_type("Image/JPEG; charset=binary"),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_content_type("text/html"), None);
        assert_eq!(ImageFormat::from_content_type(""), None);
    }

    #[test]
    fn test_extension() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
    }
}
