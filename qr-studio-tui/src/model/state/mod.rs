//! 界面状态模块
//!
//! 定义控制器之外、仅属于界面的状态数据结构

mod input;
mod modal;
mod preview;
mod suggestions;

pub use input::TextInput;
pub use modal::{Modal, ModalState};
pub use preview::PreviewState;
pub use suggestions::SuggestionsState;
