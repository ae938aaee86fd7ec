pub mod error;
pub mod orchestrator;
pub mod state;

pub use error::SessionError;
pub use orchestrator::SearchSession;
pub use state::{HistoryPhase, SearchPhase, SessionState};
