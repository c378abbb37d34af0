use crate::Error;
use log::{debug, info};
use rosrust::Message;
use std::marker::PhantomData;

/// Destination of outgoing messages.
pub trait Outlet<M> {
    /// Hand one message to the transport. Header sequence numbers are the
    /// transport's business.
    fn send(&mut self, message: M) -> Result<(), Error>;

    /// Names of the nodes currently subscribed, if the transport knows them.
    fn subscribers(&self) -> Vec<String> {
        Vec::new()
    }

    /// True once the transport has been told to shut down, e.g. by the ROS
    /// master after `rosnode kill`.
    fn is_shutdown(&self) -> bool {
        false
    }
}

impl<M: Message> Outlet<M> for rosrust::Publisher<M> {
    fn send(&mut self, message: M) -> Result<(), Error> {
        rosrust::Publisher::send(self, message).map_err(|e| Error::Middleware(e.to_string()))
    }

    fn subscribers(&self) -> Vec<String> {
        self.subscriber_names()
    }
}

/// Typed publisher on top of an [`Outlet`].
///
/// Every publish sends a copy, the caller's message is left untouched.
pub struct Publisher<M, O> {
    outlet: O,
    sent: u32,
    subscriber_count: usize,
    _message: PhantomData<M>,
}

impl<M, O> Publisher<M, O>
where
    M: Message,
    O: Outlet<M>,
{
    pub fn new(outlet: O) -> Self {
        Publisher {
            outlet,
            sent: 0,
            subscriber_count: 0,
            _message: PhantomData,
        }
    }

    pub fn publish(&mut self, message: &M) -> Result<(), Error> {
        debug!("Publishing {} #{}", M::msg_type(), self.sent + 1);
        self.outlet.send(message.clone())?;
        self.sent = self.sent.wrapping_add(1);

        let subscribers = self.outlet.subscribers();
        if subscribers.len() != self.subscriber_count {
            info!("Subscribers: {} {:?}", subscribers.len(), subscribers);
            self.subscriber_count = subscribers.len();
        }
        Ok(())
    }

    /// Number of messages handed to the outlet so far.
    pub fn sent(&self) -> u32 {
        self.sent
    }

    pub fn outlet(&self) -> &O {
        &self.outlet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ros1_std_msgs::msg::{Header, Time};

    #[derive(Default)]
    struct Collect {
        messages: Vec<Header>,
        fail: bool,
    }

    impl Outlet<Header> for Collect {
        fn send(&mut self, message: Header) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Middleware("link down".into()));
            }
            self.messages.push(message);
            Ok(())
        }
    }

    #[test]
    fn sends_copies_and_counts() {
        let mut publisher = Publisher::new(Collect::default());
        let header = Header {
            seq: 0,
            stamp: Time { sec: 3, nsec: 4 },
            frame_id: "dock_cam".into(),
        };
        for _ in 0..3 {
            publisher.publish(&header).unwrap();
        }
        assert_eq!(publisher.sent(), 3);
        assert!(publisher.outlet().messages.iter().all(|m| *m == header));
    }

    #[test]
    fn transport_error_propagates() {
        let mut publisher = Publisher::new(Collect {
            fail: true,
            ..Default::default()
        });
        let err = publisher.publish(&Header::default()).unwrap_err();
        assert!(matches!(err, Error::Middleware(_)));
        assert_eq!(publisher.sent(), 0);
    }
}
