pub mod q_agent;
pub mod q_table;

pub use q_agent::{Mode, QAgent, QAgentConfig};
pub use q_table::{ActionValues, QTable};
