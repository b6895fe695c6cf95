//! 桌面消息客户端的核心领域模型
//!
//! 包含认证、路由、群组、联系人、消息等只读状态快照，以及相关的值对象和错误类型。
//! 这些状态都由外部状态提供者持有和修改，编排层只读取它们。

pub mod entities;
pub mod errors;
pub mod value_objects;

// 重新导出常用类型
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
