//! 种子索引：前缀树 + 基因组仓库

pub mod store;
pub mod trie;

pub use store::{GenomeId, GenomeStore};
pub use trie::SeedTrie;

/// 出现记录：某个种子长度的子串在第 `genome` 个基因组的 `offset` 处出现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Occurrence {
    pub genome: GenomeId,
    pub offset: usize,
}
