//! Lock-free admission control for long-lived CONNECT tunnels.
//!
//! [`tunnel::TunnelGate`] bounds how many tunnels may be open at once across
//! any number of concurrent handlers. It never blocks: a caller either gets a
//! slot or is told to deny the tunnel.

pub mod cli;
pub mod conf;
pub mod logging;
pub mod metrics;
pub mod tunnel;

pub use tunnel::{TunnelAdmission, TunnelGate, TunnelGuard, TunnelLimitExceeded};
