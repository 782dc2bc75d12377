use crate::model::{Emotion, JournalEntry};

/// Arena slot: prev/next are indexes into the arena rather than pointers,
/// so the arena stays the sole owner of every node.
struct Node<'a> {
    entry: &'a JournalEntry,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked sequence built once in snapshot order. [`find`] is a full
/// forward scan; the back links make the list traversable from either end
/// via the double-ended [`iter`].
///
/// [`find`]: EntryList::find
/// [`iter`]: EntryList::iter
pub struct EntryList<'a> {
    nodes: Vec<Node<'a>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<'a> EntryList<'a> {
    pub fn build(snapshot: &'a [JournalEntry]) -> Self {
        let mut list = Self {
            nodes: Vec::with_capacity(snapshot.len()),
            head: None,
            tail: None,
        };
        for entry in snapshot {
            list.push_back(entry);
        }
        list
    }

    fn push_back(&mut self, entry: &'a JournalEntry) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            entry,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Linear forward scan collecting every match in snapshot order.
    pub fn find(&self, emotion: Emotion) -> Vec<JournalEntry> {
        self.iter()
            .filter(|e| e.emotion == emotion)
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            exhausted: false,
        }
    }
}

pub struct Iter<'s, 'a> {
    list: &'s EntryList<'a>,
    front: Option<usize>,
    back: Option<usize>,
    exhausted: bool,
}

impl<'s, 'a> Iterator for Iter<'s, 'a> {
    type Item = &'a JournalEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let idx = self.front?;
        if self.front == self.back {
            self.exhausted = true;
        }
        let node = &self.list.nodes[idx];
        self.front = node.next;
        Some(node.entry)
    }
}

impl<'s, 'a> DoubleEndedIterator for Iter<'s, 'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let idx = self.back?;
        if self.front == self.back {
            self.exhausted = true;
        }
        let node = &self.list.nodes[idx];
        self.back = node.prev;
        Some(node.entry)
    }
}
