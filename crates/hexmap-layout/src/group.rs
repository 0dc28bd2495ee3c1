//! Stable grouping of entities by domain.

use std::collections::HashMap;
use std::hash::Hash;

use crate::entity::Entity;

/// Entities sharing one domain, in input order.
#[derive(Debug, Clone)]
pub struct DomainGroup<'a> {
    pub domain: &'a str,
    pub members: Vec<&'a Entity>,
}

impl DomainGroup<'_> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group `items` by `key`, keeping groups in first-seen order and members in
/// input order. Items whose key is `None` are skipped.
pub fn group_first_seen<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let Some(k) = key(&item) else {
            continue;
        };
        match index.get(&k) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

/// Partition entities by domain, largest group first.
///
/// Ties keep first-seen order, so identical input always yields the same
/// group order.
pub fn group_by_domain(entities: &[Entity]) -> Vec<DomainGroup<'_>> {
    let mut groups: Vec<DomainGroup<'_>> = group_first_seen(entities, |&e| Some(e.domain_key()))
        .into_iter()
        .map(|(domain, members)| DomainGroup { domain, members })
        .collect();

    // Stable sort preserves first-seen order among equal populations.
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}
