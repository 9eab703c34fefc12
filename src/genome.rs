use crate::util::dna;

/// 基因组记录：名称 + 碱基序列（构造时统一大写），创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    name: String,
    seq: Vec<u8>,
}

impl Genome {
    pub fn new(name: impl Into<String>, seq: impl AsRef<[u8]>) -> Self {
        Self {
            name: name.into(),
            seq: dna::normalize_seq(seq.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn sequence(&self) -> &[u8] {
        &self.seq
    }

    /// 取出 [pos, pos + len) 区间；越界时返回 None，不做截断。
    /// 延伸阶段依赖这一点判断是否到达基因组末尾。
    #[inline]
    pub fn extract(&self, pos: usize, len: usize) -> Option<&[u8]> {
        let end = pos.checked_add(len)?;
        if end > self.seq.len() {
            return None;
        }
        Some(&self.seq[pos..end])
    }
}
