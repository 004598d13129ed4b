use std::fmt;

use serde::{Deserialize, Serialize};

use super::image::ImageFormat;

/// 呼び出し側が割り当てるサンプル識別子。一意性は呼び出し側の責任。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleId(pub i64);

impl SampleId {
    pub fn file_name(&self, format: ImageFormat) -> String {
        format!("sample_{}.{}", self.0, format.extension())
    }
}

impl From<i64> for SampleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
