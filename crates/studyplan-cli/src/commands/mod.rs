pub mod init;
pub mod plan;
pub mod predict;
pub mod track;
pub mod validate;
