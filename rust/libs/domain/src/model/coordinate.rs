use std::fmt;

use serde::{Deserialize, Serialize};

/// 緯度・経度の組（10進度）。
///
/// 範囲チェックは `is_within_bounds` で行えるが、取得処理では強制しない。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 整数値でも小数点を残す（例: `0.0`）
        write!(f, "({:?}, {:?})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let coordinate = Coordinate::new(37.7749, -122.4194);
        assert_eq!(coordinate.to_string(), "(37.7749, -122.4194)");
    }

    #[test]
    fn test_display_keeps_decimal_point() {
        assert_eq!(Coordinate::new(0.0, 0.0).to_string(), "(0.0, 0.0)");
        assert_eq!(Coordinate::new(-0.0, 12.0).to_string(), "(-0.0, 12.0)");
    }

    #[test]
    fn test_is_within_bounds() {
        assert!(Coordinate::new(0.0, 0.0).is_within_bounds());
        assert!(Coordinate::new(-90.0, 180.0).is_within_bounds());
        assert!(!Coordinate::new(90.5, 0.0).is_within_bounds());
        assert!(!Coordinate::new(0.0, -180.1).is_within_bounds());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_within_bounds());
    }

    #[test]
    fn test_deserialize() {
        let coordinate: Coordinate =
            serde_json::from_str(r#"{"lat": 35.6812, "lon": 139.7671}"#).unwrap();
        assert_eq!(coordinate, Coordinate::new(35.6812, 139.7671));
    }
}
