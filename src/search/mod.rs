//! 基于种子前缀树的基因组匹配器。
//!
//! 每个加入的基因组按固定种子长度切出全部子串插入 [`SeedTrie`]，
//! 值为 [`Occurrence`]（基因组编号, 起始偏移）。在此之上提供两类查询：
//!
//! - [`GenomeMatcher::find_genomes_with_this_dna`]：片段查找，种子命中后贪心延伸，
//!   每个基因组保留最长（同长取最靠前）的一条匹配；
//! - [`GenomeMatcher::find_related_genomes`]：把查询基因组切成不重叠窗口，
//!   逐窗口做片段查找，按命中窗口百分比排序。
//!
//! 种子查找与延伸各自有一次替换额度，两者独立，不会合并成两次替换的容忍度。

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::genome::Genome;
use crate::index::{GenomeStore, Occurrence, SeedTrie};

pub mod extend;
pub mod related;

/// 单个基因组对片段查询的最佳匹配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DNAMatch {
    pub genome_name: String,
    pub length: usize,
    pub position: usize,
}

/// 相似基因组查询的一行结果，`percent_match` 取值 (阈值, 100]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeMatch {
    pub genome_name: String,
    pub percent_match: f64,
}

#[derive(Debug)]
pub struct GenomeMatcher {
    trie: SeedTrie<Occurrence>,
    genomes: GenomeStore,
    min_search_length: usize,
}

impl GenomeMatcher {
    /// `min_search_length` 即种子长度，也是之后所有查询最小长度参数的下限
    pub fn new(min_search_length: usize) -> Result<Self> {
        ensure!(min_search_length > 0, "minimum search length must be positive");
        Ok(Self {
            trie: SeedTrie::new(),
            genomes: GenomeStore::new(),
            min_search_length,
        })
    }

    pub fn minimum_search_length(&self) -> usize {
        self.min_search_length
    }

    pub fn genomes(&self) -> &GenomeStore {
        &self.genomes
    }

    /// 入库并为每个起点 p ∈ [0, len - k] 插入种子 (g, p)。
    /// 短于种子长度的基因组不会产生任何种子，也就不会成为匹配目标。
    pub fn add_genome(&mut self, genome: Genome) {
        let k = self.min_search_length;
        let id = self.genomes.len();

        let mut n_seeds = 0usize;
        for (offset, seed) in genome.sequence().windows(k).enumerate() {
            self.trie.insert(seed, Occurrence { genome: id, offset });
            n_seeds += 1;
        }
        log::debug!(
            "indexed genome #{} '{}': len {}, {} seeds of length {}",
            id,
            genome.name(),
            genome.len(),
            n_seeds,
            k
        );
        self.genomes.push(genome);
    }

    /// 清空索引，种子长度保持不变
    pub fn clear(&mut self) {
        self.trie.reset();
        self.genomes = GenomeStore::new();
    }
}
