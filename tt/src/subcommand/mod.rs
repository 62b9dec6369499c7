pub mod init;
pub mod ls;
