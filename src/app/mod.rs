//! 应用层

pub mod beer;
