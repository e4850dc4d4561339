// Frontier: the ordering abstraction over pending search nodes
//
// One container, three disciplines: LIFO for depth-first, FIFO for
// breadth-first, and min-priority for uniform-cost and A*. The frontier
// carries no search-specific knowledge; the engine supplies the priority key.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::hash::Hash;

/// Ordering discipline for queued nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Last in, first out (depth-first)
    Lifo,
    /// First in, first out (breadth-first)
    Fifo,
    /// Lowest priority key first (uniform-cost, A*)
    MinPriority,
}

/// Heap entry wrapping a node with its priority key
///
/// `BinaryHeap` is a max-heap, so comparisons are reversed to pop the lowest
/// key first. Equal keys fall back to insertion order, keeping priority pops
/// stable.
struct HeapEntry<S, N> {
    priority: f64,
    seq: u64,
    state: S,
    node: N,
}

impl<S, N> PartialEq for HeapEntry<S, N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal && self.seq == other.seq
    }
}

impl<S, N> Eq for HeapEntry<S, N> {}

impl<S, N> PartialOrd for HeapEntry<S, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, N> Ord for HeapEntry<S, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Frontier of discovered-but-not-yet-expanded search nodes
///
/// Alongside the ordering structure it maintains a hash map of queued-state
/// counts, updated on every push and pop, so membership queries are O(1)
/// instead of a scan of the internal sequence.
pub struct Frontier<S, N> {
    discipline: Discipline,
    deque: VecDeque<(S, N)>,
    heap: BinaryHeap<HeapEntry<S, N>>,
    queued: HashMap<S, usize>,
    seq: u64,
}

impl<S: Clone + Eq + Hash, N> Frontier<S, N> {
    /// Creates an empty frontier under the given discipline
    pub fn new(discipline: Discipline) -> Self {
        Frontier {
            discipline,
            deque: VecDeque::new(),
            heap: BinaryHeap::new(),
            queued: HashMap::new(),
            seq: 0,
        }
    }

    /// Pushes a node keyed by its state
    ///
    /// `priority` is ignored under the LIFO and FIFO disciplines.
    pub fn push(&mut self, state: S, node: N, priority: f64) {
        *self.queued.entry(state.clone()).or_insert(0) += 1;

        match self.discipline {
            Discipline::Lifo | Discipline::Fifo => {
                self.deque.push_back((state, node));
            }
            Discipline::MinPriority => {
                self.heap.push(HeapEntry {
                    priority,
                    seq: self.seq,
                    state,
                    node,
                });
                self.seq += 1;
            }
        }
    }

    /// Pops the next node according to the discipline
    pub fn pop(&mut self) -> Option<N> {
        let (state, node) = match self.discipline {
            Discipline::Lifo => self.deque.pop_back()?,
            Discipline::Fifo => self.deque.pop_front()?,
            Discipline::MinPriority => {
                let entry = self.heap.pop()?;
                (entry.state, entry.node)
            }
        };

        if let Some(count) = self.queued.get_mut(&state) {
            *count -= 1;
            if *count == 0 {
                self.queued.remove(&state);
            }
        }

        Some(node)
    }

    /// Checks whether any queued node carries this state
    pub fn contains(&self, state: &S) -> bool {
        self.queued.contains_key(state)
    }

    pub fn is_empty(&self) -> bool {
        self.deque.is_empty() && self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deque.len() + self.heap.len()
    }
}
