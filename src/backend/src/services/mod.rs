//! Business logic services
//!
//! Services are separated from HTTP concerns and work against the
//! scanner trait so they can be tested with a mock.

pub mod scan;
