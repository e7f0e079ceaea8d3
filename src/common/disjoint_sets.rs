use rustc_hash::FxHashMap;

use crate::core::Identity;

/// Union-find partition over identities, with path compression and union by
/// rank.
///
/// The union of all sets is exactly the set of members ever inserted via
/// [`make_set`](DisjointSets::make_set); members never inserted belong to no
/// set.
#[derive(Debug, Default)]
pub struct DisjointSets<I> {
    parent: FxHashMap<I, I>,
    rank: FxHashMap<I, u32>,
}

impl<I: Identity> DisjointSets<I> {
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
        }
    }

    /// Inserts a member as a singleton set. A no-op for members already
    /// inserted.
    pub fn make_set(&mut self, member: I) {
        if !self.parent.contains_key(&member) {
            self.parent.insert(member.clone(), member.clone());
            self.rank.insert(member, 0);
        }
    }

    pub fn contains(&self, member: &I) -> bool {
        self.parent.contains_key(member)
    }

    /// Returns the representative of the set containing `member`, or `None`
    /// if the member was never inserted.
    pub fn find_set(&mut self, member: &I) -> Option<I> {
        if !self.parent.contains_key(member) {
            return None;
        }

        let mut root = member.clone();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        // Path compression flattens the chain for future lookups.
        let mut curr = member.clone();
        while curr != root {
            let next = self.parent[&curr].clone();
            self.parent.insert(curr, root.clone());
            curr = next;
        }

        Some(root)
    }

    /// Merges the sets containing the two members. Returns `true` if two
    /// distinct sets were merged, `false` if the members already share a set
    /// or either was never inserted.
    pub fn union(&mut self, x: &I, y: &I) -> bool {
        let (Some(root_x), Some(root_y)) = (self.find_set(x), self.find_set(y)) else {
            return false;
        };

        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];

        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else {
            self.parent.insert(root_y.clone(), root_x.clone());

            if rank_x == rank_y {
                self.rank.insert(root_x, rank_x + 1);
            }
        }

        true
    }
}
