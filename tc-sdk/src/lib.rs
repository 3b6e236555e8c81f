#![doc = include_str!("../README.md")]

#[cfg(feature = "translate")]
pub mod translate;

/// Credentials related implementations for Tencent Cloud SDKs
#[cfg(feature = "translate")]
pub mod credentials;
