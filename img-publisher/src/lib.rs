use std::io;

pub mod cli;
pub mod config;
pub mod image;
mod image_publisher;
pub mod node;
pub mod publisher;
pub mod ticker;

pub use config::PublisherConfig;
pub use image_publisher::{ImagePublisher, State};
pub use ros1_sensor_msgs::msg::CompressedImage;
pub use ticker::{CancellationToken, Ticker};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Image error. {0}")]
    Image(#[from] ::image::ImageError),
    #[error("IO error. {0}")]
    IOError(#[from] io::Error),
    #[error("Middleware error. {0}")]
    Middleware(String),
    #[error("Invalid config. {0}")]
    InvalidConfig(String),
    #[error("Failed to install signal handler. {0}")]
    Signal(#[from] ctrlc::Error),
    #[error("No message to publish, load an image first")]
    NotReady,
    #[error("Not allowed in state {0:?}")]
    InvalidState(State),
}
