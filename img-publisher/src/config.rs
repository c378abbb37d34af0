use crate::Error;

pub const DEFAULT_NODE_NAME: &str = "image_publisher";
pub const DEFAULT_TOPIC: &str = "/mgt/img_sampler/dock_cam/image_record/compressed";
pub const DEFAULT_RATE_HZ: f64 = 5.0;
pub const DEFAULT_QUEUE_SIZE: usize = 10;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Everything the image publisher needs to know besides the image itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherConfig {
    /// Base name of the ROS node.
    pub node_name: String,

    /// Append a `_<pid>_<millis>` suffix to the node name so several
    /// instances can run side by side.
    pub anonymous: bool,

    /// Topic the compressed image is published on.
    pub topic: String,

    /// Messages per second.
    pub rate_hz: f64,

    /// Outbound queue depth handed to the middleware.
    pub queue_size: usize,

    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,

    /// Header frame_id of the published message.
    pub frame_id: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        PublisherConfig {
            node_name: DEFAULT_NODE_NAME.to_owned(),
            anonymous: true,
            topic: DEFAULT_TOPIC.to_owned(),
            rate_hz: DEFAULT_RATE_HZ,
            queue_size: DEFAULT_QUEUE_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            frame_id: String::new(),
        }
    }
}

impl PublisherConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.rate_hz.is_finite() || self.rate_hz <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "rate must be a positive number, got {}",
                self.rate_hz
            )));
        }
        if self.queue_size == 0 {
            return Err(Error::InvalidConfig("queue size must not be zero".into()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidConfig(format!(
                "JPEG quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if !is_graph_name(&self.topic) {
            return Err(Error::InvalidConfig(format!(
                "invalid topic name: {:?}",
                self.topic
            )));
        }
        if !is_graph_name(&self.node_name) || self.node_name.contains('/') {
            return Err(Error::InvalidConfig(format!(
                "invalid node name: {:?}",
                self.node_name
            )));
        }
        Ok(())
    }
}

/// ROS graph resource name: starts with a letter, `/` or `~`, then letters,
/// digits, `_` and `/`, no empty segment.
fn is_graph_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '/' || first == '~') {
        return false;
    }
    if name.contains("//") || (name.len() > 1 && name.ends_with('/')) {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '/')
}
