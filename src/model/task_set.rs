//! Dense bitset over task indices.

/// A fixed-capacity set of task indices backed by u64 blocks.
///
/// Rotations and solutions use this for O(1) membership and O(n/64)
/// overlap tests, the hot operations of GRASP construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TaskSet {
    blocks: Vec<u64>,
    count: usize,
}

impl TaskSet {
    /// Creates an empty set able to hold indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            blocks: vec![0; capacity.div_ceil(64)],
            count: 0,
        }
    }

    /// Whether `index` is in the set.
    pub fn contains(&self, index: usize) -> bool {
        self.blocks[index / 64] & (1 << (index % 64)) != 0
    }

    /// Inserts `index`. Returns `true` if it was not already present.
    pub fn insert(&mut self, index: usize) -> bool {
        let block = &mut self.blocks[index / 64];
        let mask = 1 << (index % 64);
        if *block & mask != 0 {
            return false;
        }
        *block |= mask;
        self.count += 1;
        true
    }

    /// Number of indices in the set.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether any index is in both `self` and `other`.
    ///
    /// The sets may have been created with different capacities; blocks
    /// beyond the shorter set are treated as zero.
    pub fn intersects(&self, other: &TaskSet) -> bool {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .any(|(a, b)| a & b != 0)
    }

    /// Adds every index of `other` to `self`.
    ///
    /// # Panics
    /// Panics if `other` was created with a larger capacity than `self`.
    pub fn union_with(&mut self, other: &TaskSet) {
        assert!(other.blocks.len() <= self.blocks.len());
        self.count = 0;
        for (i, block) in self.blocks.iter_mut().enumerate() {
            if let Some(b) = other.blocks.get(i) {
                *block |= b;
            }
            self.count += block.count_ones() as usize;
        }
    }

    /// Iterates the contained indices in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().enumerate().flat_map(|(i, &block)| {
            let mut bits = block;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * 64 + bit)
            })
        })
    }
}

impl FromIterator<usize> for TaskSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let indices: Vec<usize> = iter.into_iter().collect();
        let capacity = indices.iter().max().map_or(0, |&m| m + 1);
        let mut set = TaskSet::new(capacity);
        for index in indices {
            set.insert(index);
        }
        set
    }
}
