pub mod orchestrator;
pub mod result;
pub mod runner;
pub mod seams;

pub mod prelude {
    pub use super::orchestrator::Orchestrator;
    pub use super::result::{AlpnProtocol, Http3Support, ProbeResult};
    pub use super::runner::ProbeRunner;
    pub use super::seams::{Negotiator, ReachabilityProber};
}
