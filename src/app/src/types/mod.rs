//! Domain-based type organization
//!
//! - network: scan results as delivered by the backend
//! - notification: toast messages
//! - scan: scan controller state
//! - view: view model handed to the shell

pub mod network;
pub mod notification;
pub mod scan;
pub mod view;

pub use network::*;
pub use notification::*;
pub use scan::*;
pub use view::*;
