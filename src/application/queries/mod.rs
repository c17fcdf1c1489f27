//! 应用层 - 查询（读操作）

mod pronunciation;

pub use pronunciation::{GetPronunciationHandler, PronunciationQuery, PronunciationResponse};
