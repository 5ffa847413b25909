pub mod cmd;
pub mod logging;
