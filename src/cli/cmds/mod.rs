pub mod breakdown;
pub mod clear;
pub mod init;
pub mod pick;
pub mod root;
pub mod status;
pub mod toggle;
