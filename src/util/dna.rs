/// 索引支持的碱基字母表 {A, C, G, T, N}
pub const BASES: [u8; 5] = [b'A', b'C', b'G', b'T', b'N'];

#[inline]
pub fn is_base(b: u8) -> bool {
    matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'N')
}

/// 统一转为大写；不做字母替换，非法字符由调用方（加载器）负责拒绝。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq {
        out.push(b.to_ascii_uppercase());
    }
    out
}
