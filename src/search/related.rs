use std::collections::HashMap;

use super::{GenomeMatch, GenomeMatcher};
use crate::genome::Genome;

impl GenomeMatcher {
    /// 将 `query` 切成 ⌊len / fragment_match_length⌋ 个不重叠窗口（丢弃尾部余数），
    /// 每个窗口做一次片段查找（最小长度 = 窗口长度），统计每个基因组命中的窗口数。
    ///
    /// 百分比严格大于 `match_percent_threshold` 的基因组按百分比降序返回，
    /// 同百分比按名称升序。窗口长度小于种子长度、查询短于一个窗口、
    /// 或没有基因组达标时返回 None。
    pub fn find_related_genomes(
        &self,
        query: &Genome,
        fragment_match_length: usize,
        exact_match_only: bool,
        match_percent_threshold: f64,
    ) -> Option<Vec<GenomeMatch>> {
        if fragment_match_length < self.min_search_length {
            return None;
        }
        let n_windows = query.len() / fragment_match_length;
        if n_windows == 0 {
            log::debug!(
                "query '{}' (len {}) is shorter than one window of {}",
                query.name(),
                query.len(),
                fragment_match_length
            );
            return None;
        }

        let mut hits: HashMap<String, usize> = HashMap::new();
        for window in query.sequence().chunks_exact(fragment_match_length) {
            if let Some(matches) =
                self.find_genomes_with_this_dna(window, fragment_match_length, exact_match_only)
            {
                for m in matches {
                    *hits.entry(m.genome_name).or_insert(0) += 1;
                }
            }
        }

        let mut results: Vec<GenomeMatch> = hits
            .into_iter()
            .map(|(genome_name, n)| GenomeMatch {
                genome_name,
                percent_match: n as f64 / n_windows as f64 * 100.0,
            })
            .filter(|m| m.percent_match > match_percent_threshold)
            .collect();

        log::debug!(
            "query '{}': {} windows of {}, {} genomes above {}%",
            query.name(),
            n_windows,
            fragment_match_length,
            results.len(),
            match_percent_threshold
        );

        if results.is_empty() {
            return None;
        }
        results.sort_by(|a, b| {
            b.percent_match
                .total_cmp(&a.percent_match)
                .then_with(|| a.genome_name.cmp(&b.genome_name))
        });
        Some(results)
    }
}
