use ros1_std_msgs::msg::Header;
use rosrust::rosmsg::{decode_variable_primitive_vec, encode_variable_primitive_slice};
use rosrust::{Clock, Message, RosMsg};
use std::io::{self, Read, Write};
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

/// This message contains a compressed image.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    /// Header timestamp should be acquisition time of image
    /// Header frame_id should be optical frame of camera
    /// origin of frame should be optical center of camera
    /// +x should point to the right in the image
    /// +y should point down in the image
    /// +z should point into to plane of the image
    pub header: Header,

    /// Specifies the format of the data.
    /// Acceptable values:
    /// jpeg, png
    pub format: String,

    /// Compressed image buffer
    pub data: Vec<u8>,
}

impl CompressedImage {
    pub fn new(header: Header, format: String, data: Vec<u8>) -> Self {
        CompressedImage {
            header,
            format,
            data,
        }
    }
}

const DEFINITION: &str = "\
Header header
string format
uint8[] data

================================================================================
MSG: std_msgs/Header
uint32 seq
time stamp
string frame_id
";

impl RosMsg for CompressedImage {
    fn encode<W: Write>(&self, mut w: W) -> io::Result<()> {
        self.header.encode(w.by_ref())?;
        self.format.encode(w.by_ref())?;
        encode_variable_primitive_slice(&self.data, w.by_ref())
    }

    fn decode<R: Read>(mut r: R) -> io::Result<Self> {
        Ok(CompressedImage {
            header: RosMsg::decode(r.by_ref())?,
            format: RosMsg::decode(r.by_ref())?,
            data: decode_variable_primitive_vec(r.by_ref())?,
        })
    }
}

impl Message for CompressedImage {
    fn msg_definition() -> String {
        DEFINITION.into()
    }

    fn md5sum() -> String {
        "8f7a12909da2c9d3332d540a0977563f".into()
    }

    fn msg_type() -> String {
        "sensor_msgs/CompressedImage".into()
    }

    fn set_header(&mut self, clock: &Arc<dyn Clock>, seq: &Arc<AtomicUsize>) {
        self.header.fill(clock, seq);
    }
}
