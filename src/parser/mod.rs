//! Parser 模块 - 切分与提取维护日志事件块
//!
//! 此模块提供从原始行到结构化块的全部功能,包括:
//! - Block 结构（原始事件块）
//! - 批量切分与流式读取
//! - 单块两态提取状态机
//! - 便捷 API 函数

mod api;
mod constants;
pub(crate) mod block_parser;
pub mod block;
pub mod block_reader;
pub mod segmenter;

pub use api::{
    iter_blocks_from_file, parse_blocks, parse_blocks_from_file, parse_blocks_from_string,
};
pub use block::Block;
pub use block_parser::parse_block;
pub use block_reader::BlockReader;
pub use segmenter::segment;
