pub mod error;
pub mod id;
pub mod provider;
pub mod subscription;
