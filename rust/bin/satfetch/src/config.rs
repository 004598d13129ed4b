use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use domain::model::{Coordinate, ImageFormat, SampleId};

#[derive(Debug, Parser)]
#[command(version, about = "Fetch a satellite image for a coordinate")]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Latitude in decimal degrees.
    #[arg(long)]
    pub lat: f64,

    /// Longitude in decimal degrees.
    #[arg(long)]
    pub lon: f64,

    /// Identifier used to name the saved image.
    #[arg(long)]
    pub sample_id: i64,

    /// Directory to save the image into.
    #[arg(long, env = "SATFETCH_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Imagery URL template with `{lat}` and `{lon}` placeholders.
    #[arg(long, env = "SATFETCH_PROVIDER_URL")]
    pub provider_url: Option<String>,

    /// HTTP request timeout in seconds.
    #[arg(
        long,
        env = "SATFETCH_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Format assumed when the provider sends no usable Content-Type.
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    pub fallback_format: FormatArg,
}

impl Args {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn sample_id(&self) -> SampleId {
        SampleId::from(self.sample_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Png,
    Jpeg,
}

impl From<FormatArg> for ImageFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Jpeg => ImageFormat::Jpeg,
        }
    }
}
