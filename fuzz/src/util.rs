use sort_count::PivotStrategy;

/// Reinterprets the fuzzer bytes as little endian `i32` values, trailing bytes are dropped.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Splits off the first byte to pick a pivot strategy.
pub fn split_strategy(data: &[u8]) -> Option<(PivotStrategy, &[u8])> {
    let (first, rest) = data.split_first()?;
    let strategy = PivotStrategy::ALL[*first as usize % PivotStrategy::ALL.len()];

    Some((strategy, rest))
}
