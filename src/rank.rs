use crate::aggregate::Aggregate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySum {
    pub key: String,
    pub sum: i64,
}

/// Turn the aggregate into a list sorted by sum, largest first.
/// Equal sums are ordered by key so that repeated runs give identical reports.
pub fn sort_key_sums(aggregate: Aggregate) -> Vec<KeySum> {
    let mut key_sums: Vec<_> = aggregate.into_iter().map(|(key, sum)| KeySum { key, sum }).collect();
    key_sums.sort_unstable_by(|a, b| b.sum.cmp(&a.sum).then_with(|| a.key.cmp(&b.key)));
    key_sums
}
