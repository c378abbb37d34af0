//! ROS master connection.
use crate::publisher::Outlet;
use crate::Error;
use log::info;
use ros1_std_msgs::msg::Time;
use rosrust::api::{Ros, ShutdownManager};
use rosrust::Message;
use std::sync::Arc;

/// An owned ROS node.
///
/// Master URI and host come from the usual ROS environment variables.
/// Unregistration happens on drop, so keep the node alive for as long as any
/// publisher created from it is in use.
pub struct Node {
    name: String,
    ros: Ros,
}

impl Node {
    pub fn new(name: &str, anonymous: bool) -> Result<Self, Error> {
        let name = if anonymous {
            anonymous_name(name, std::process::id(), chrono::Utc::now().timestamp_millis())
        } else {
            name.to_owned()
        };
        let ros = Ros::new(&name).map_err(|e| {
            Error::Middleware(format!("Failed to init node {}: {}", name, e))
        })?;
        info!("Node started: {}", name);
        Ok(Node { name, ros })
    }

    /// Register a publisher of `M` on `topic`.
    pub fn advertise<M: Message>(
        &mut self,
        topic: &str,
        queue_size: usize,
    ) -> Result<NodePublisher<M>, Error> {
        let publisher = self
            .ros
            .publish::<M>(topic, queue_size)
            .map_err(|e| Error::Middleware(format!("Failed to advertise {}: {}", topic, e)))?;
        info!("Advertised {} [{}], queue size {}", topic, M::msg_type(), queue_size);
        Ok(NodePublisher {
            publisher,
            shutdown: self.ros.shutdown_sender(),
        })
    }

    /// False once the master or a signal asked this node to shut down.
    pub fn is_ok(&self) -> bool {
        self.ros.is_ok()
    }

    /// Current ROS time. Follows `/clock` when `/use_sim_time` is set.
    pub fn now(&self) -> Time {
        self.ros.now()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        info!("Node shutting down: {}", self.name);
    }
}

/// A topic publisher that also sees its node's shutdown requests.
pub struct NodePublisher<M: Message> {
    publisher: rosrust::Publisher<M>,
    shutdown: Arc<ShutdownManager>,
}

impl<M: Message> Outlet<M> for NodePublisher<M> {
    fn send(&mut self, message: M) -> Result<(), Error> {
        Outlet::send(&mut self.publisher, message)
    }

    fn subscribers(&self) -> Vec<String> {
        self.publisher.subscriber_names()
    }

    fn is_shutdown(&self) -> bool {
        self.shutdown.awaiting_shutdown()
    }
}

/// Unique node name in the rospy style: `<base>_<pid>_<unix millis>`.
pub fn anonymous_name(base: &str, pid: u32, unix_millis: i64) -> String {
    format!("{}_{}_{}", base, pid, unix_millis)
}
