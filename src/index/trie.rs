/// 单符号前缀树。
/// - 每个节点保存若干值（同一 key 可重复插入）以及按符号区分的子边。
/// - 节点惰性创建，从不剪枝；根节点对应空 key。
/// - 查找支持精确匹配或整条路径上至多一次替换（不含插入/删除）。
#[derive(Debug)]
pub struct SeedTrie<V> {
    root: Node<V>,
}

#[derive(Debug)]
struct Node<V> {
    values: Vec<V>,
    /// 子边数量不超过字母表大小，线性查找即可
    children: Vec<Child<V>>,
}

#[derive(Debug)]
struct Child<V> {
    base: u8,
    next: Box<Node<V>>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self { values: Vec::new(), children: Vec::new() }
    }

    #[inline]
    fn child(&self, base: u8) -> Option<&Node<V>> {
        self.children.iter().find(|c| c.base == base).map(|c| c.next.as_ref())
    }
}

impl<V> Default for SeedTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for SeedTrie<V> {
    fn drop(&mut self) {
        self.free_nodes();
    }
}

impl<V> SeedTrie<V> {
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// 丢弃全部节点，恢复为只有空根的状态
    pub fn reset(&mut self) {
        self.free_nodes();
        self.root.values.clear();
    }

    /// 逐层拆开子树再释放，避免长链上 Box 递归析构导致栈溢出
    fn free_nodes(&mut self) {
        let mut stack: Vec<Box<Node<V>>> = self.root.children.drain(..).map(|c| c.next).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).map(|c| c.next));
        }
    }

    /// 沿已有子边下降，第一个缺失的符号起逐个补建节点，最后把值挂在深度 = key.len() 的节点上。
    pub fn insert(&mut self, key: &[u8], value: V) {
        let mut cur = &mut self.root;
        for &b in key {
            let idx = match cur.children.iter().position(|c| c.base == b) {
                Some(i) => i,
                None => {
                    cur.children.push(Child { base: b, next: Box::new(Node::new()) });
                    cur.children.len() - 1
                }
            };
            cur = cur.children[idx].next.as_mut();
        }
        cur.values.push(value);
    }

    /// 查找与 key 等长路径上的所有值。
    ///
    /// 首个符号总是精确匹配；`exact_match_only == false` 时，其后的路径允许一次替换：
    /// 在第一层以下的节点上除了精确子边外还会走其它子边，但之后该分支只能精确匹配。
    /// 用显式栈代替递归，深度只受 key 长度限制。
    pub fn find(&self, key: &[u8], exact_match_only: bool) -> Vec<V>
    where
        V: Clone,
    {
        let mut out = Vec::new();
        self.for_each_match(key, exact_match_only, |v| out.push(v.clone()));
        out
    }

    /// 与 [`SeedTrie::find`] 相同的遍历，但以借用方式逐个交给回调，不做拷贝
    pub fn for_each_match<'a, F>(&'a self, key: &[u8], exact_match_only: bool, mut f: F)
    where
        F: FnMut(&'a V),
    {
        let first = match key.first() {
            Some(&b) => match self.root.child(b) {
                Some(n) => n,
                None => return,
            },
            None => {
                self.root.values.iter().for_each(&mut f);
                return;
            }
        };
        // (节点, 已匹配深度, 该分支是否还剩替换额度)
        let mut stack: Vec<(&Node<V>, usize, bool)> = vec![(first, 1, !exact_match_only)];
        while let Some((node, depth, can_mismatch)) = stack.pop() {
            if depth == key.len() {
                node.values.iter().for_each(&mut f);
                continue;
            }
            let want = key[depth];
            if !can_mismatch {
                if let Some(next) = node.child(want) {
                    stack.push((next, depth + 1, false));
                }
                continue;
            }
            for c in &node.children {
                // 精确子边保留额度，其它子边消耗掉额度
                stack.push((c.next.as_ref(), depth + 1, c.base == want));
            }
        }
    }

    /// 节点总数（含根），调试与统计用
    pub fn node_count(&self) -> usize {
        let mut n = 0usize;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            n += 1;
            stack.extend(node.children.iter().map(|c| c.next.as_ref()));
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<i32>) -> Vec<i32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn empty_trie_finds_nothing() {
        let t: SeedTrie<i32> = SeedTrie::new();
        assert!(t.find(b"ACGT", true).is_empty());
        assert!(t.find(b"ACGT", false).is_empty());
        assert!(t.find(b"", true).is_empty());
        assert_eq!(t.node_count(), 1);
    }

    #[test]
    fn empty_key_lives_at_root() {
        let mut t = SeedTrie::new();
        t.insert(b"", 7);
        t.insert(b"A", 1);
        assert_eq!(t.find(b"", true), vec![7]);
        assert_eq!(t.find(b"", false), vec![7]);
    }

    #[test]
    fn exact_find_returns_all_values_for_key() {
        let mut t = SeedTrie::new();
        t.insert(b"ACGT", 1);
        t.insert(b"ACGT", 2);
        t.insert(b"ACGT", 2);
        t.insert(b"ACGA", 3);
        t.insert(b"ACG", 4);
        assert_eq!(sorted(t.find(b"ACGT", true)), vec![1, 2, 2]);
        assert_eq!(t.find(b"ACG", true), vec![4]);
        assert!(t.find(b"ACGG", true).is_empty());
        assert!(t.find(b"ACGTA", true).is_empty());
    }

    #[test]
    fn shared_prefixes_reuse_nodes() {
        let mut t = SeedTrie::new();
        t.insert(b"ACGT", 1);
        // root + A + C + G + T
        assert_eq!(t.node_count(), 5);
        t.insert(b"ACGA", 2);
        assert_eq!(t.node_count(), 6);
        t.insert(b"ACGT", 3);
        assert_eq!(t.node_count(), 6);
    }

    #[test]
    fn inexact_find_allows_one_substitution_after_first_symbol() {
        let mut t = SeedTrie::new();
        t.insert(b"ACGT", 1);
        t.insert(b"TCGT", 2); // 首位不同
        t.insert(b"ACTT", 3); // 中间不同
        t.insert(b"ACGA", 4); // 末位不同
        t.insert(b"AGGA", 5); // 两处不同
        t.insert(b"ACG", 6); // 长度不同
        t.insert(b"AGGT", 7); // 第二位不同
        assert_eq!(sorted(t.find(b"ACGT", false)), vec![1, 3, 4, 7]);
        assert_eq!(t.find(b"ACGT", true), vec![1]);
    }

    #[test]
    fn first_symbol_must_match_exactly() {
        let mut t = SeedTrie::new();
        t.insert(b"ACGT", 1);
        t.insert(b"GCGT", 2);
        assert!(t.find(b"TCGT", false).is_empty());
        assert_eq!(t.find(b"GCGT", false), vec![2]);
        assert!(t.find(b"T", false).is_empty());
        assert!(t.find(b"A", false).is_empty());
    }

    #[test]
    fn mismatch_budget_is_per_path() {
        let mut t = SeedTrie::new();
        t.insert(b"AAAA", 1);
        t.insert(b"TTAA", 2);
        t.insert(b"ATTA", 3);
        t.insert(b"AATT", 4);
        t.insert(b"AATA", 5);
        assert_eq!(sorted(t.find(b"AAAA", false)), vec![1, 5]);
    }

    #[test]
    fn inexact_find_without_exact_hit() {
        let mut t = SeedTrie::new();
        t.insert(b"ACGT", 1);
        assert_eq!(t.find(b"ACGA", false), vec![1]);
        assert!(t.find(b"ACGA", true).is_empty());
        assert!(t.find(b"AGGA", false).is_empty());
    }

    #[test]
    fn for_each_match_borrows_values() {
        let mut t = SeedTrie::new();
        t.insert(b"AC", String::from("x"));
        t.insert(b"AG", String::from("y"));
        let mut seen: Vec<&str> = Vec::new();
        t.for_each_match(b"AC", false, |v| seen.push(v.as_str()));
        seen.sort_unstable();
        assert_eq!(seen, vec!["x", "y"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut t = SeedTrie::new();
        t.insert(b"ACGT", 1);
        t.insert(b"", 2);
        t.reset();
        assert!(t.find(b"ACGT", false).is_empty());
        assert!(t.find(b"", true).is_empty());
        assert_eq!(t.node_count(), 1);
        t.insert(b"ACGT", 3);
        assert_eq!(t.find(b"ACGT", true), vec![3]);
    }

    #[test]
    fn long_keys_do_not_recurse() {
        let key: Vec<u8> = std::iter::repeat(b'A').take(100_000).collect();
        let mut t = SeedTrie::new();
        t.insert(&key, 1u8);
        assert_eq!(t.find(&key, false), vec![1]);
        assert_eq!(t.node_count(), 100_001);
    }
}
