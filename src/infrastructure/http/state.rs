//! Application State
//!
//! 启动时一次性构建、之后不可变的应用上下文。
//! 两份归档引擎经由发音查询处理器共享给所有在途请求。

use std::sync::Arc;

use crate::application::ports::DictIndexPort;
use crate::application::GetPronunciationHandler;

/// 应用状态
///
/// 归档装载失败时 pronunciation_handler 为 None，
/// 对应请求返回 500（引擎未初始化）
pub struct AppState {
    pub pronunciation_handler: Option<GetPronunciationHandler>,
}

impl AppState {
    /// 用装载完成的两份归档引擎创建应用状态
    pub fn new(
        text_index: Arc<dyn DictIndexPort>,
        media_index: Arc<dyn DictIndexPort>,
    ) -> Self {
        Self {
            pronunciation_handler: Some(GetPronunciationHandler::new(text_index, media_index)),
        }
    }

    /// 归档装载失败时的降级状态
    pub fn uninitialized() -> Self {
        Self {
            pronunciation_handler: None,
        }
    }
}
