//! # ros1-sensor-msgs
//!
//! Message definitions for commonly used sensor data, such as cameras.
//!
pub mod msg;
