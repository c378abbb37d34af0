use rosrust::{Clock, Message, RosMsg};
use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// ROS1 `time` primitive: seconds and nanoseconds since the Unix epoch.
pub use rosrust::Time;

/// Standard metadata for higher-level stamped data types.
/// This is generally used to communicate timestamped data
/// in a particular coordinate frame.
///
/// uint32 seq
/// time stamp
/// string frame_id
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Header {
    /// Sequence ID: consecutively increasing ID, set by the publisher.
    pub seq: u32,
    pub stamp: Time,
    pub frame_id: String,
}

pub const HEADER_DEFINITION: &str = "\
uint32 seq
time stamp
string frame_id
";

impl Header {
    /// Fill in what the publisher owns: the next sequence number if `seq` is
    /// 0, the clock's time if the stamp is zero. Set fields are kept.
    ///
    /// Numbering starts at 1 like rospy, so 0 always means unset.
    pub fn fill(&mut self, clock: &Arc<dyn Clock>, seq: &Arc<AtomicUsize>) {
        if self.seq == 0 {
            self.seq = (seq.fetch_add(1, Ordering::SeqCst) as u32).wrapping_add(1);
        }
        if self.stamp.nanos() == 0 {
            self.stamp = clock.now();
        }
    }
}

impl RosMsg for Header {
    fn encode<W: Write>(&self, mut w: W) -> io::Result<()> {
        self.seq.encode(w.by_ref())?;
        self.stamp.encode(w.by_ref())?;
        self.frame_id.encode(w.by_ref())
    }

    fn decode<R: Read>(mut r: R) -> io::Result<Self> {
        Ok(Header {
            seq: RosMsg::decode(r.by_ref())?,
            stamp: RosMsg::decode(r.by_ref())?,
            frame_id: RosMsg::decode(r.by_ref())?,
        })
    }
}

impl Message for Header {
    fn msg_definition() -> String {
        HEADER_DEFINITION.into()
    }

    fn md5sum() -> String {
        "2176decaecbce78abc3b96ef049fabed".into()
    }

    fn msg_type() -> String {
        "std_msgs/Header".into()
    }
}
