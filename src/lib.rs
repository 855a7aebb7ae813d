//! # TOTVS Database Parser - DbLog
//!
//! 一个高性能的 TOTVS Hoteis 数据库访问层维护日志解析库，把自由格式的
//! 日志文本重建为离散的结构化"事件块"：SQL 语句、结果行、记录数与错误标记。
//!
//! ## 功能特性
//!
//! - **确定性单遍管线**: 行分类 -> 块切分 -> 块内提取 -> 悬挂块合并，
//!   严格前向，仅一个块的前瞻
//! - **永不失败的核心**: 格式不符的输入只会得到空/缺省字段，没有致命错误类
//! - **并行块提取**: 块内状态机互不影响，批量解析按块并行后按原序合并
//! - **灵活的 API**: 支持批量解析和流式读取两种模式
//!
//! ## 快速开始
//!
//! ### 批量解析
//!
//! ```rust
//! use totvs_database_parser_dblog::parse_blocks_from_string;
//!
//! let log = "10/03/2025 14:22:01 - 001234 Open: SELECT NOME FROM HOSPEDES\n\
//!            10/03/2025 14:22:02 - 001235 Resultado\n\
//!            FieldIndex=0; Name=NOME; Tipo=STRING; Value='Ana'\n\
//!            Record Count = 1";
//!
//! for block in parse_blocks_from_string(log) {
//!     println!("SQL: {}", block.sql_text());
//!     println!("registros: {:?}", block.record_count);
//!     for row in &block.fetch_rows {
//!         println!("NOME = {:?}", row.get("NOME"));
//!     }
//! }
//! ```
//!
//! ### 流式读取原始块
//!
//! ```rust,no_run
//! use totvs_database_parser_dblog::BlockReader;
//! use std::fs::File;
//!
//! let file = File::open("manutencao.log").unwrap();
//!
//! for result in BlockReader::new(file) {
//!     let block = result.unwrap();
//!     println!("bloco: {} ({} linhas)", block.header(), block.len());
//! }
//! ```
//!
//! ## 日志格式
//!
//! 条目头有两种互斥格式：
//!
//! ```text
//! 10/03/2025 14:22:01 - 001234 Open: SELECT * FROM HOSPEDES
//! 001234 14:22:01 Open: SELECT * FROM HOSPEDES
//! ```
//!
//! 结果行、记录数与错误标记：
//!
//! ```text
//! FieldIndex=0; Name=ID; Tipo=INT; Value='5'
//! Record Count = 1
//! ORA-00942: table or view does not exist
//! ```
//!
//! 启动横幅行（`Log Iniciado Por:` 及安装目录路径）是噪声，
//! 在切分之前被丢弃，不会出现在任何输出块中。

pub mod block;
pub mod error;
pub mod merge;
pub mod parser;
pub mod tools;

pub use block::{FetchRow, MergedBlock, ParsedBlock};
pub use error::ParseError;
pub use merge::merge_blocks;
pub use parser::{
    Block,
    BlockReader,
    iter_blocks_from_file,
    parse_block,
    parse_blocks,
    parse_blocks_from_file,
    parse_blocks_from_string,
    segment,
};
pub use tools::{HeaderFormat, LineKind, classify_line};
