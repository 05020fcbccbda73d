mod command_result;
pub mod init;
pub mod lookup;
pub mod scan;

pub use command_result::*;
