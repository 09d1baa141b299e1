/// Parallel-completion gate: a fixed set of sub-choices that must all
/// occur, in any order, before a shared follow-up fires.
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// What marking a member did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Not a member, or already marked. Nothing changed.
    Ignored,
    /// Newly marked; members remain.
    Pending,
    /// Newly marked and the set is now complete. Reported exactly once.
    Completed,
}

#[derive(Debug, Clone)]
pub struct CompletionGate<K: Eq + Hash + Copy> {
    members: Vec<K>,
    chosen: FxHashSet<K>,
}

impl<K: Eq + Hash + Copy> CompletionGate<K> {
    pub fn new(members: &[K]) -> Self {
        Self {
            members: members.to_vec(),
            chosen: FxHashSet::default(),
        }
    }

    pub fn mark(&mut self, key: K) -> Mark {
        if !self.members.contains(&key) || !self.chosen.insert(key) {
            return Mark::Ignored;
        }
        if self.is_complete() {
            Mark::Completed
        } else {
            Mark::Pending
        }
    }

    pub fn is_chosen(&self, key: K) -> bool {
        self.chosen.contains(&key)
    }

    pub fn is_complete(&self) -> bool {
        self.members.iter().all(|m| self.chosen.contains(m))
    }

    pub fn reset(&mut self) {
        self.chosen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_once_in_any_order() {
        let mut gate = CompletionGate::new(&['a', 'b', 'c']);
        assert_eq!(gate.mark('c'), Mark::Pending);
        assert_eq!(gate.mark('c'), Mark::Ignored);
        assert_eq!(gate.mark('a'), Mark::Pending);
        assert_eq!(gate.mark('b'), Mark::Completed);
        assert_eq!(gate.mark('b'), Mark::Ignored);
        assert!(gate.is_complete());
    }

    #[test]
    fn strangers_are_ignored() {
        let mut gate = CompletionGate::new(&[1, 2]);
        assert_eq!(gate.mark(7), Mark::Ignored);
        assert!(!gate.is_chosen(7));
    }

    #[test]
    fn reset_reopens_gate() {
        let mut gate = CompletionGate::new(&[1]);
        assert_eq!(gate.mark(1), Mark::Completed);
        gate.reset();
        assert!(!gate.is_chosen(1));
        assert_eq!(gate.mark(1), Mark::Completed);
    }
}
