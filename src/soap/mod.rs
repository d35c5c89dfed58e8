//! # SOAP Side
//!
//! Everything that issues calls and records their artifacts: the session,
//! the transport seam, envelope construction, and the structured values
//! that flow through headers and bodies. Assertions over the recorded
//! artifacts are methods on [`session::SoapSession`].

mod assertions;
pub mod envelope;
pub mod header;
pub mod session;
pub mod transport;
pub mod value;
