use itertools::Itertools;
use std::hash::Hash;

/// Groups `items` by `key`, keeping groups in first-seen key order and members in input order.
///
/// `into_group_map` alone gives no order across groups, and both the seat numbers and the
/// conflict list are observable in that order, so the first-seen sequence is kept alongside.
pub fn group_in_order<'a, T, K, F>(items: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let order: Vec<K> = items.iter().map(&key).unique().collect();
    let mut groups = items.iter().map(|item| (key(item), item)).into_group_map();

    order
        .into_iter()
        .filter_map(|k| groups.remove(&k).map(|members| (k, members)))
        .collect()
}
