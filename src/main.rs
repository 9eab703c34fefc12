use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

use genome_matcher::io::fasta;
use genome_matcher::{Genome, GenomeMatcher};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "genome-matcher", author, version, about = "Find genomes sharing DNA with a fragment or a query genome", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct IndexArgs {
    /// Genome FASTA files to index
    #[arg(short = 'g', long = "genomes", required = true, num_args = 1..)]
    genomes: Vec<String>,
    /// Seed length; also the floor for every minimum length below
    #[arg(short = 'k', long = "seed-len", default_value_t = 10)]
    seed_len: usize,
    /// Disallow the single mismatch
    #[arg(long)]
    exact: bool,
    /// Emit JSON lines instead of tab-separated text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report, per genome, the longest match of a DNA fragment
    Find {
        #[command(flatten)]
        index: IndexArgs,
        /// Minimum match length (defaults to the seed length)
        #[arg(short = 'm', long = "min-len")]
        min_len: Option<usize>,
        /// DNA fragment to search for
        fragment: String,
    },
    /// Rank indexed genomes by similarity to each genome of a query file
    Related {
        #[command(flatten)]
        index: IndexArgs,
        /// Query genome FASTA file
        #[arg(short = 'q', long = "query")]
        query: String,
        /// Window length the query genomes are cut into
        #[arg(short = 'w', long = "window")]
        window: usize,
        /// Report genomes strictly above this match percentage
        #[arg(long = "threshold", default_value_t = 0.0)]
        threshold: f64,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
}

/// 查询共用参数
struct SearchOpt {
    seed_len: usize,
    exact: bool,
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Find { index, min_len, fragment } => {
            let matcher = build_matcher(&index.genomes, index.seed_len)?;
            let opt = SearchOpt { seed_len: index.seed_len, exact: index.exact, json: index.json };
            run_find(&matcher, &fragment, min_len.unwrap_or(opt.seed_len), &opt)
        }
        Commands::Related { index, query, window, threshold, threads } => {
            let matcher = build_matcher(&index.genomes, index.seed_len)?;
            let opt = SearchOpt { seed_len: index.seed_len, exact: index.exact, json: index.json };
            run_related(&matcher, &query, window, threshold, threads, &opt)
        }
    }
}

fn build_matcher(paths: &[String], seed_len: usize) -> Result<GenomeMatcher> {
    let mut matcher = GenomeMatcher::new(seed_len)?;
    for path in paths {
        for genome in fasta::load_genomes_from_path(path)? {
            matcher.add_genome(genome);
        }
    }
    if matcher.genomes().is_empty() {
        anyhow::bail!("no genomes found in {}", paths.join(", "));
    }
    log::info!("indexed {} genomes (seed length {})", matcher.genomes().len(), seed_len);
    Ok(matcher)
}

fn run_find(matcher: &GenomeMatcher, fragment: &str, min_len: usize, opt: &SearchOpt) -> Result<()> {
    // 核心查询对此只返回 None；命令行把参数错误单独报成错误，与“无匹配”区分开
    if min_len < opt.seed_len {
        anyhow::bail!("minimum length {} is below the seed length {}", min_len, opt.seed_len);
    }
    let matches = match matcher.find_genomes_with_this_dna(fragment.as_bytes(), min_len, opt.exact) {
        Some(m) => m,
        None => {
            log::warn!("no genomes match {} with length >= {}", fragment, min_len);
            return Ok(());
        }
    };
    for m in &matches {
        if opt.json {
            println!("{}", serde_json::to_string(m)?);
        } else {
            println!("{}\t{}\t{}", m.genome_name, m.length, m.position);
        }
    }
    Ok(())
}

fn run_related(
    matcher: &GenomeMatcher,
    query_path: &str,
    window: usize,
    threshold: f64,
    threads: usize,
    opt: &SearchOpt,
) -> Result<()> {
    // 同上：参数错误在命令行层报错，不落入“无匹配”
    if window < opt.seed_len {
        anyhow::bail!("window {} is below the seed length {}", window, opt.seed_len);
    }
    let queries: Vec<Genome> = fasta::load_genomes_from_path(query_path)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()
        .map_err(|e| anyhow!("cannot start {} worker threads: {}", threads, e))?;

    // 索引只读，多个查询基因组可并行；collect 保持输入顺序
    let results: Vec<_> = pool.install(|| {
        queries
            .par_iter()
            .map(|q| matcher.find_related_genomes(q, window, opt.exact, threshold))
            .collect()
    });

    for (query, res) in queries.iter().zip(results) {
        let matches = match res {
            Some(m) => m,
            None => {
                log::warn!("{}: no genomes above {}%", query.name(), threshold);
                continue;
            }
        };
        if opt.json {
            let line = serde_json::json!({ "query": query.name(), "matches": matches });
            println!("{}", line);
        } else {
            for m in &matches {
                println!("{}\t{}\t{:.2}", query.name(), m.genome_name, m.percent_match);
            }
        }
    }
    Ok(())
}
