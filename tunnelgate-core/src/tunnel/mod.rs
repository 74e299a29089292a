mod admission;
mod error;
mod gate;
mod guard;
mod snapshot;


pub use admission::TunnelAdmission;
pub use error::TunnelLimitExceeded;
pub use gate::TunnelGate;
pub use guard::TunnelGuard;
pub use snapshot::TunnelGateSnapshot;
