//! 错误类型定义
//!
//! 解析与代码生成共用的错误类型及辅助构造函数。
//! 错误不在内部恢复，原样向调用方传播。

use thiserror::Error;

/// aex 统一错误类型
#[derive(Debug, Error)]
pub enum AexError {
    /// 某个子串无法匹配任何语法形式，或子串为空
    #[error("could not parse expression: \"{expr}\": {reason}")]
    Parse { expr: String, reason: String },

    /// 后端无法编码的输入（解析器产出的树不会触发）
    #[error("malformed syntax tree: {0}")]
    Structural(String),
}

pub type AexResult<T> = Result<T, AexError>;

/// 构造解析错误
pub fn parse_error(expr: impl Into<String>, reason: impl Into<String>) -> AexError {
    AexError::Parse {
        expr: expr.into(),
        reason: reason.into(),
    }
}

/// 构造代码生成错误
pub fn codegen_error(msg: impl Into<String>) -> AexError {
    AexError::Structural(msg.into())
}
