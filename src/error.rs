//! 错误类型定义
//!
//! 核心解析管线按设计不产生错误：格式不符的输入只会得到空/缺省字段。
//! 错误仅出现在文件访问与解码这一外围层。

use thiserror::Error;

/// 解析库的错误类型
///
/// 只覆盖文件读取边界；`parse_block`、`segment`、`merge_blocks` 等核心操作
/// 是无错误的全函数。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {path}")]
    FileNotFound {
        /// 文件路径及系统错误描述
        path: String,
    },

    /// 读取过程中的 IO 错误
    #[error("io error: {0}")]
    IoError(String),
}
