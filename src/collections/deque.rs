use crate::error::CollectionError;
use std::fmt;

/// Double-ended queue backed by a doubly-linked list.
///
/// Nodes live in an arena and link to each other by slot index, so the list
/// has a single owner and no reference cycles. Vacated slots are recycled.
pub struct Deque<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    first: Option<usize>,
    last: Option<usize>,
    len: usize,
}

struct Node<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Deque {
            slots: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn add_first(&mut self, item: T) {
        let idx = self.alloc(Node {
            item,
            prev: None,
            next: self.first,
        });
        match self.first {
            Some(old_first) => self.node_mut(old_first).prev = Some(idx),
            None => self.last = Some(idx),
        }
        self.first = Some(idx);
        self.len += 1;
    }

    pub fn add_last(&mut self, item: T) {
        let idx = self.alloc(Node {
            item,
            prev: self.last,
            next: None,
        });
        match self.last {
            Some(old_last) => self.node_mut(old_last).next = Some(idx),
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
        self.len += 1;
    }

    pub fn remove_first(&mut self) -> Result<T, CollectionError> {
        let idx = self.first.ok_or(CollectionError::Empty("deque"))?;
        let node = self.release(idx);
        match node.next {
            Some(next) => self.node_mut(next).prev = None,
            None => self.last = None,
        }
        self.first = node.next;
        self.len -= 1;
        Ok(node.item)
    }

    pub fn remove_last(&mut self) -> Result<T, CollectionError> {
        let idx = self.last.ok_or(CollectionError::Empty("deque"))?;
        let node = self.release(idx);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.first = None,
        }
        self.last = node.prev;
        self.len -= 1;
        Ok(node.item)
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.first.map(|idx| &self.node(idx).item)
    }

    pub fn peek_last(&self) -> Option<&T> {
        self.last.map(|idx| &self.node(idx).item)
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: self.first,
            back: self.last,
            remaining: self.len,
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        let node = self.slots[idx].take().expect("linked slot is occupied");
        self.free.push(idx);
        node
    }

    fn node(&self, idx: usize) -> &Node<T> {
        self.slots[idx].as_ref().expect("linked slot is occupied")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.slots[idx].as_mut().expect("linked slot is occupied")
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that pops from the front.
pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_recycled() {
        let mut deque = Deque::new();
        deque.add_last(1);
        deque.add_last(2);
        deque.remove_first().unwrap();
        deque.add_first(0);
        assert_eq!(deque.slots.len(), 2);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn ends_are_cleared_together() {
        let mut deque = Deque::new();
        deque.add_first("only");
        assert_eq!(deque.remove_last(), Ok("only"));
        assert!(deque.first.is_none());
        assert!(deque.last.is_none());
        assert_eq!(deque.len(), 0);
    }
}
