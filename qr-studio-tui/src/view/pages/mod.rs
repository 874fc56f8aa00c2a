//! 面板内容

pub mod form;
pub mod result;
