//! # genome-matcher
//!
//! 基于种子前缀树的 DNA 片段 / 相似基因组查找。
//!
//! - **索引构建**：每个基因组按固定种子长度切片插入前缀树，值为（基因组编号, 偏移）
//! - **片段查找**：种子命中（可容忍一次替换）后贪心延伸，每个基因组保留最长、最靠前的匹配
//! - **相似基因组**：查询基因组切成不重叠窗口，按命中窗口百分比排序
//!
//! ## 快速示例
//!
//! ```rust
//! use genome_matcher::{Genome, GenomeMatcher};
//!
//! let mut matcher = GenomeMatcher::new(4).unwrap();
//! matcher.add_genome(Genome::new("G1", "ACGTACGT"));
//!
//! let hits = matcher.find_genomes_with_this_dna(b"ACGA", 4, false).unwrap();
//! assert_eq!(hits[0].genome_name, "G1");
//! assert_eq!((hits[0].length, hits[0].position), (4, 0));
//!
//! let query = Genome::new("q", "ACGTACGA");
//! let related = matcher.find_related_genomes(&query, 4, true, 0.0).unwrap();
//! assert_eq!(related[0].percent_match, 50.0);
//! ```
//!
//! ## 模块说明
//!
//! - [`genome`] — 基因组记录
//! - [`io`] — 严格的基因组 FASTA 加载
//! - [`index`] — 种子前缀树、基因组仓库
//! - [`search`] — 片段查找与相似基因组打分
//! - [`util`] — DNA 字母表工具函数

pub mod genome;
pub mod index;
pub mod io;
pub mod search;
pub mod util;

pub use genome::Genome;
pub use search::{DNAMatch, GenomeMatch, GenomeMatcher};
