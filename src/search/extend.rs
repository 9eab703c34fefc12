use std::collections::BTreeMap;

use super::{DNAMatch, GenomeMatcher};
use crate::genome::Genome;
use crate::util::dna;

/// 从基因组 `start` 处逐碱基与 `fragment` 比较，返回成功消耗的片段长度。
///
/// 遇到基因组末尾即停止（不算错配）；错配先扣 `budget`，额度用完后的错配终止延伸。
/// 种子区间也会重新比较，因此种子查找阶段用掉的替换同样计入这里的额度。
pub fn extend_match(genome: &Genome, start: usize, fragment: &[u8], mut budget: usize) -> usize {
    let mut len = 0usize;
    while len < fragment.len() {
        let base = match genome.extract(start + len, 1) {
            Some(b) => b[0],
            None => break,
        };
        if base != fragment[len] {
            if budget == 0 {
                break;
            }
            budget -= 1;
        }
        len += 1;
    }
    len
}

impl GenomeMatcher {
    /// 查找包含 `fragment` 前缀（长度 ≥ `minimum_length`）的基因组。
    ///
    /// 参数不合法（`minimum_length` 小于种子长度，或片段短于 `minimum_length`）
    /// 以及没有任何基因组达标时都返回 None。每个基因组名最多一条结果，
    /// 取最长匹配，同长取起点最小者；结果按基因组名升序。
    pub fn find_genomes_with_this_dna(
        &self,
        fragment: &[u8],
        minimum_length: usize,
        exact_match_only: bool,
    ) -> Option<Vec<DNAMatch>> {
        if fragment.len() < minimum_length || minimum_length < self.min_search_length {
            return None;
        }
        let fragment = dna::normalize_seq(fragment);
        let seed = &fragment[..self.min_search_length];
        let budget = if exact_match_only { 0 } else { 1 };

        // 基因组名 -> (长度, 起点)
        let mut best: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        let mut n_candidates = 0usize;
        self.trie.for_each_match(seed, exact_match_only, |occ| {
            n_candidates += 1;
            let genome = match self.genomes.get(occ.genome) {
                Some(g) => g,
                None => return,
            };
            let len = extend_match(genome, occ.offset, &fragment, budget);
            if len < minimum_length {
                return;
            }
            best.entry(genome.name())
                .and_modify(|cur| {
                    if len > cur.0 || (len == cur.0 && occ.offset < cur.1) {
                        *cur = (len, occ.offset);
                    }
                })
                .or_insert((len, occ.offset));
        });

        log::trace!(
            "seed {} ({}): {} candidates, {} genomes qualify",
            String::from_utf8_lossy(seed),
            if exact_match_only { "exact" } else { "1 mismatch" },
            n_candidates,
            best.len()
        );

        if best.is_empty() {
            return None;
        }
        Some(
            best.into_iter()
                .map(|(name, (length, position))| DNAMatch {
                    genome_name: name.to_string(),
                    length,
                    position,
                })
                .collect(),
        )
    }
}
