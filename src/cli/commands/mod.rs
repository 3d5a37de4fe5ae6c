pub mod filter;
pub mod helper;
pub mod init;
pub mod parse;
pub mod scan;
