pub mod cli;
pub mod commit;
pub mod errors;
pub mod flow;
pub mod git;
pub mod logging;
pub mod prompt;
pub mod utils;
