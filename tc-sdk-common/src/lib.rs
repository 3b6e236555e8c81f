//! tc-sdk 内部使用的签名工具

mod error;
pub use error::Error;

pub mod helper;
pub mod tc3_sign;
