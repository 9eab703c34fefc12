use crate::genome::Genome;

/// 基因组在 [`GenomeStore`] 中的稳定编号（插入顺序下标）
pub type GenomeId = usize;

/// 只追加的基因组集合，按插入顺序编号，用于把出现记录映射回名称与序列。
#[derive(Debug, Default, Clone)]
pub struct GenomeStore {
    genomes: Vec<Genome>,
}

impl GenomeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个基因组，返回其编号
    pub fn push(&mut self, genome: Genome) -> GenomeId {
        self.genomes.push(genome);
        self.genomes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn get(&self, id: GenomeId) -> Option<&Genome> {
        self.genomes.get(id)
    }

    pub fn name(&self, id: GenomeId) -> Option<&str> {
        self.get(id).map(Genome::name)
    }

    /// 编号无效或区间越界时返回 None
    pub fn extract(&self, id: GenomeId, pos: usize, len: usize) -> Option<&[u8]> {
        self.get(id)?.extract(pos, len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GenomeId, &Genome)> {
        self.genomes.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let mut store = GenomeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.push(Genome::new("a", "ACGT")), 0);
        assert_eq!(store.push(Genome::new("b", "TTTT")), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.name(0), Some("a"));
        assert_eq!(store.name(1), Some("b"));
        assert_eq!(store.name(2), None);
        let names: Vec<&str> = store.iter().map(|(_, g)| g.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn extract_checks_id_and_range() {
        let mut store = GenomeStore::new();
        let id = store.push(Genome::new("a", "ACGTAC"));
        assert_eq!(store.extract(id, 2, 3), Some(&b"GTA"[..]));
        assert_eq!(store.extract(id, 4, 3), None);
        assert_eq!(store.extract(id + 1, 0, 1), None);
        assert_eq!(store.get(id).map(Genome::len), Some(6));
    }
}
