//! The clue ledger
//!
//! Every clue the detective picks up is filed into an unbalanced binary
//! search tree keyed by the clue text. Smaller keys go left; equal and
//! larger keys go right, so filing the same clue twice keeps both copies.

#[derive(Debug)]
struct LedgerNode {
    clue: String,
    left: Option<Box<LedgerNode>>,
    right: Option<Box<LedgerNode>>,
}

impl LedgerNode {
    fn new(clue: &str) -> Self {
        Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Clues collected so far, kept in alphabetical order
#[derive(Debug, Default)]
pub struct ClueLedger {
    root: Option<Box<LedgerNode>>,
    len: usize,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a clue. Comparison is byte-wise; the tree is never rebalanced.
    pub fn insert(&mut self, clue: &str) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if clue < node.clue.as_str() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(LedgerNode::new(clue)));
        self.len += 1;
    }

    /// Call `visit` on every clue in ascending order.
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        let mut pending: Vec<&LedgerNode> = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                pending.push(node);
                cursor = node.left.as_deref();
            }
            match pending.pop() {
                Some(node) => {
                    visit(&node.clue);
                    cursor = node.right.as_deref();
                }
                None => break,
            }
        }
    }

    /// All clues in ascending order
    pub fn sorted(&self) -> Vec<String> {
        let mut clues = Vec::with_capacity(self.len);
        self.traverse_in_order(|clue| clues.push(clue.to_string()));
        clues
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl Drop for ClueLedger {
    // Unlinks nodes one at a time so a degenerate, list-shaped tree does not
    // recurse once per node.
    fn drop(&mut self) {
        let mut doomed: Vec<Box<LedgerNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = doomed.pop() {
            doomed.extend(node.left.take());
            doomed.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_visits_nothing() {
        let ledger = ClueLedger::new();
        let mut visits = 0;
        ledger.traverse_in_order(|_| visits += 1);
        assert_eq!(visits, 0);
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn traversal_is_sorted() {
        let mut ledger = ClueLedger::new();
        for clue in ["Torn page", "Boot footprints", "Stained book", "Rusty key", "Missing knife"] {
            ledger.insert(clue);
        }
        assert_eq!(
            ledger.sorted(),
            vec!["Boot footprints", "Missing knife", "Rusty key", "Stained book", "Torn page"]
        );
    }

    #[test]
    fn ordering_is_bytewise() {
        let mut ledger = ClueLedger::new();
        for clue in ["b", "B", "a", "A", "Ä"] {
            ledger.insert(clue);
        }
        assert_eq!(ledger.sorted(), vec!["A", "B", "a", "b", "Ä"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut ledger = ClueLedger::new();
        ledger.insert("Rope");
        ledger.insert("Ash");
        ledger.insert("Rope");
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.sorted(), vec!["Ash", "Rope", "Rope"]);
    }

    #[test]
    fn visit_count_matches_insert_count() {
        // Deterministic shuffle of a mix of unique and repeated keys
        let mut ledger = ClueLedger::new();
        let mut inserted = Vec::new();
        let mut state: u32 = 17;
        for _ in 0..200 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let clue = format!("clue-{:02}", (state >> 16) % 40);
            ledger.insert(&clue);
            inserted.push(clue);
        }

        let visited = ledger.sorted();
        assert_eq!(visited.len(), 200);
        assert!(visited.windows(2).all(|pair| pair[0] <= pair[1]));

        inserted.sort();
        assert_eq!(visited, inserted);
    }

    #[test]
    fn degenerate_tree_traverses_and_drops() {
        let mut ledger = ClueLedger::new();
        for i in 0..5_000 {
            ledger.insert(&format!("{:06}", i));
        }
        let mut count = 0;
        let mut last = String::new();
        ledger.traverse_in_order(|clue| {
            assert!(last.as_str() <= clue);
            last = clue.to_string();
            count += 1;
        });
        assert_eq!(count, 5_000);
    }
}
