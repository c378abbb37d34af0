use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Publish a still image as a compressed camera feed on a ROS topic."
)]
pub struct Cli {
    /// Image to be published. Converted to grayscale and sent as JPEG.
    pub image: PathBuf,
}

impl Cli {
    /// Parse process arguments, leaving ROS remappings to the middleware.
    pub fn from_env() -> Self {
        Cli::parse_from(strip_remappings(std::env::args()))
    }
}

/// Drop ROS remapping arguments (`from:=to`, `__name:=cam`, `_param:=1`).
pub fn strip_remappings<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().filter(|a| !a.contains(":=")).collect()
}
