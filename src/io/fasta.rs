use anyhow::{anyhow, bail, Result};
use std::io::BufRead;
use std::path::Path;

use crate::genome::Genome;
use crate::util::dna;

/// 严格的基因组 FASTA 读取器。
///
/// 与常见的宽松 FASTA 解析不同，这里遇到以下情况直接报错：
/// 空行、名称为空的 `>` 行、名称行之后没有碱基、第一条名称行之前出现碱基、
/// 以及 {A,C,G,T,N}（不区分大小写）以外的字符。
pub struct GenomeReader<R: BufRead> {
    reader: R,
    buf: String,
    line_no: usize,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> GenomeReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_no: 0,
            done: false,
            peek_header: None,
        }
    }

    pub fn next_genome(&mut self) -> Result<Option<Genome>> {
        if self.done {
            return Ok(None);
        }

        let name = match self.peek_header.take() {
            Some(h) => h,
            None => {
                if !self.read_line()? {
                    self.done = true;
                    return Ok(None);
                }
                if !self.buf.starts_with('>') {
                    bail!("line {}: bases found before the first '>' name line", self.line_no);
                }
                self.header_name()?
            }
        };

        let mut seq: Vec<u8> = Vec::new();
        loop {
            if !self.read_line()? {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                self.peek_header = Some(self.header_name()?);
                break;
            }
            for &b in self.buf.as_bytes() {
                if !dna::is_base(b) {
                    bail!(
                        "line {}: invalid base '{}' in genome '{}'",
                        self.line_no,
                        char::from(b).escape_default(),
                        name
                    );
                }
                seq.push(b);
            }
        }

        if seq.is_empty() {
            bail!("genome '{}' has no bases after its name line", name);
        }
        Ok(Some(Genome::new(name, seq)))
    }

    /// 读一行到 buf（去掉行尾换行）；EOF 返回 false，空行报错
    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        let keep = self.buf.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        self.buf.truncate(keep);
        if self.buf.is_empty() {
            bail!("line {}: empty line", self.line_no);
        }
        Ok(true)
    }

    fn header_name(&self) -> Result<String> {
        let name = &self.buf[1..];
        if name.is_empty() {
            bail!("line {}: name line has no name after '>'", self.line_no);
        }
        Ok(name.to_string())
    }
}

/// 读取全部基因组；空输入返回空列表
pub fn load_genomes<R: BufRead>(reader: R) -> Result<Vec<Genome>> {
    let mut r = GenomeReader::new(reader);
    let mut genomes = Vec::new();
    while let Some(g) = r.next_genome()? {
        genomes.push(g);
    }
    Ok(genomes)
}

pub fn load_genomes_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Genome>> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow!("cannot open genome file '{}': {}", path.display(), e))?;
    let genomes = load_genomes(std::io::BufReader::new(fh))
        .map_err(|e| anyhow!("malformed genome file '{}': {}", path.display(), e))?;
    log::info!("loaded {} genomes from {}", genomes.len(), path.display());
    Ok(genomes)
}
