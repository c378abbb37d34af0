use crate::config::PublisherConfig;
use crate::image::{compress, JPEG_FORMAT};
use crate::publisher::{Outlet, Publisher};
use crate::ticker::{CancellationToken, Ticker};
use crate::Error;
use log::info;
use ros1_sensor_msgs::msg::CompressedImage;
use ros1_std_msgs::msg::{Header, Time};
use std::path::Path;

/// Lifecycle of an [`ImagePublisher`]. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Setting up, the message may not exist yet.
    Initializing,
    /// Inside the publish loop.
    Publishing,
    /// Loop left after cancellation, middleware shutdown or a publish
    /// failure.
    Stopped,
}

/// Republishes one still image as a camera feed.
///
/// The message is built once by [`load`](Self::load) with the stamp it is
/// given. Every publish sends that same message: the header stamp is never
/// refreshed, only the sequence number moves.
pub struct ImagePublisher<O> {
    config: PublisherConfig,
    publisher: Publisher<CompressedImage, O>,
    message: Option<CompressedImage>,
    state: State,
}

impl<O: Outlet<CompressedImage>> ImagePublisher<O> {
    pub fn new(config: PublisherConfig, outlet: O) -> Result<Self, Error> {
        config.validate()?;
        Ok(ImagePublisher {
            config,
            publisher: Publisher::new(outlet),
            message: None,
            state: State::Initializing,
        })
    }

    /// Read `path` in grayscale, compress it as JPEG and build the message
    /// stamped with `stamp`.
    pub fn load(&mut self, path: &Path, stamp: Time) -> Result<&CompressedImage, Error> {
        if self.state != State::Initializing {
            return Err(Error::InvalidState(self.state));
        }
        let data = compress(path, self.config.jpeg_quality)?;
        let header = Header {
            seq: 0,
            stamp,
            frame_id: self.config.frame_id.clone(),
        };
        let message = CompressedImage::new(header, JPEG_FORMAT.to_owned(), data);
        info!(
            "Loaded {}, {} bytes of {}, stamp {}",
            path.display(),
            message.data.len(),
            message.format,
            message.header.stamp
        );
        Ok(self.message.insert(message))
    }

    /// Publish until `token` is cancelled or the outlet reports a shutdown.
    /// Returns the number of messages sent.
    ///
    /// Both are checked once per tick, before publishing.
    pub fn run(&mut self, token: &CancellationToken) -> Result<u32, Error> {
        if self.state != State::Initializing {
            return Err(Error::InvalidState(self.state));
        }
        let message = self.message.as_ref().ok_or(Error::NotReady)?;
        let mut ticker = Ticker::new(self.config.rate_hz)?;

        info!(
            "Publishing on {} at {} Hz",
            self.config.topic, self.config.rate_hz
        );
        self.state = State::Publishing;
        let mut ret = Ok(());
        while !token.is_cancelled() {
            if self.publisher.outlet().is_shutdown() {
                info!("Middleware is shutting down");
                break;
            }
            if let Err(e) = self.publisher.publish(message) {
                ret = Err(e);
                break;
            }
            ticker.wait();
        }
        self.state = State::Stopped;

        let published = self.publisher.sent();
        info!("Stopped after {} messages", published);
        ret.map(|_| published)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn message(&self) -> Option<&CompressedImage> {
        self.message.as_ref()
    }

    pub fn outlet(&self) -> &O {
        self.publisher.outlet()
    }
}
