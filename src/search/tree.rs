use crate::model::{Emotion, JournalEntry};

/// One tree node, exclusively owned by its parent. Entries with the same
/// rank share a node and accumulate in its bucket in insertion order.
struct Node<'a> {
    key: usize,
    bucket: Vec<&'a JournalEntry>,
    left: Option<Box<Node<'a>>>,
    right: Option<Box<Node<'a>>>,
}

/// Binary search tree keyed by [`Emotion::rank`].
///
/// No rebalancing: the shape is determined purely by the insertion order of
/// distinct ranks, so a rank-sorted snapshot degenerates to an O(n)-depth
/// chain. There is no removal; the tree is built once per query and dropped.
pub struct EmotionTree<'a> {
    root: Option<Box<Node<'a>>>,
}

impl<'a> EmotionTree<'a> {
    pub fn build(snapshot: &'a [JournalEntry]) -> Self {
        let mut root = None;
        for entry in snapshot {
            insert(&mut root, entry.emotion.rank(), entry);
        }
        Self { root }
    }

    /// Descends by rank and returns the matching node's bucket, or empty if
    /// no node carries the queried rank.
    pub fn find(&self, emotion: Emotion) -> Vec<JournalEntry> {
        let key = emotion.rank();
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if key < n.key {
                node = n.left.as_deref();
            } else if key > n.key {
                node = n.right.as_deref();
            } else {
                return n.bucket.iter().map(|&e| e.clone()).collect();
            }
        }
        Vec::new()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        fn walk(node: Option<&Node<'_>>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + walk(n.left.as_deref()).max(walk(n.right.as_deref())),
            }
        }
        walk(self.root.as_deref())
    }
}

fn insert<'a>(slot: &mut Option<Box<Node<'a>>>, key: usize, entry: &'a JournalEntry) {
    match slot {
        None => {
            *slot = Some(Box::new(Node {
                key,
                bucket: vec![entry],
                left: None,
                right: None,
            }));
        }
        Some(node) => {
            if key < node.key {
                insert(&mut node.left, key, entry);
            } else if key > node.key {
                insert(&mut node.right, key, entry);
            } else {
                node.bucket.push(entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EMOTION_ORDER;

    fn entry(id: i64, emotion: Emotion) -> JournalEntry {
        JournalEntry::new(id, format!("entry {}", id), emotion, "", id)
    }

    #[test]
    fn shared_rank_bucket_keeps_insertion_order() {
        let snapshot = vec![
            entry(1, Emotion::Surprise),
            entry(2, Emotion::Anger),
            entry(3, Emotion::Surprise),
            entry(4, Emotion::Surprise),
        ];
        let tree = EmotionTree::build(&snapshot);
        let ids: Vec<i64> = tree.find(Emotion::Surprise).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn absent_rank_returns_empty() {
        let snapshot = vec![entry(1, Emotion::Joy), entry(2, Emotion::Anger)];
        let tree = EmotionTree::build(&snapshot);
        assert!(tree.find(Emotion::Neutral).is_empty());
    }

    #[test]
    fn rank_sorted_insertion_degenerates_to_a_chain_and_still_answers() {
        // One entry per emotion, inserted in rank order: every insertion
        // descends right, so the depth equals the number of distinct ranks.
        let snapshot: Vec<JournalEntry> = EMOTION_ORDER
            .iter()
            .enumerate()
            .map(|(i, &emotion)| entry(i as i64, emotion))
            .collect();
        let tree = EmotionTree::build(&snapshot);

        assert_eq!(tree.depth(), EMOTION_ORDER.len());
        for (i, &emotion) in EMOTION_ORDER.iter().enumerate() {
            let found = tree.find(emotion);
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id, i as i64);
        }
    }

    #[test]
    fn mixed_insertion_order_builds_a_branching_tree() {
        let snapshot = vec![
            entry(1, Emotion::Disgust),
            entry(2, Emotion::Anger),
            entry(3, Emotion::Neutral),
            entry(4, Emotion::Sadness),
            entry(5, Emotion::Joy),
        ];
        let tree = EmotionTree::build(&snapshot);

        assert!(tree.depth() < snapshot.len());
        for e in &snapshot {
            assert_eq!(tree.find(e.emotion)[0].id, e.id);
        }
    }
}
