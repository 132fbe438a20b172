//! End-to-End Integration Tests
//!
//! These tests drive the memory federation provider through the SPI
//! registry the way the host does: register the factory, build a component,
//! open a session and call the capability traits on the created provider.

mod common;
mod federation;
mod server_info;
