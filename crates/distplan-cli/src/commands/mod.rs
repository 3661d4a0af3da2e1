pub mod allocate;
pub mod init;
