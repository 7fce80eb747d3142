pub mod ansi;
pub mod menu;
pub mod transport;

pub use crate::core::menu::MenuSession;
pub use crate::core::transport::{SerialTransport, Transport};
pub use crate::utils::error::Result;
