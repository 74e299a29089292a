use thiserror::Error;

/// The gate is full. Routine backpressure: deny the tunnel and move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("maximum concurrent connect tunnels exceeded")]
pub struct TunnelLimitExceeded;
