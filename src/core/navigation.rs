/// Navigation history of entered scenes.
use crate::schema::ids::SceneId;

/// Ordered history of entered scenes. Append-only except for `back`,
/// which never drops the last remaining entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<SceneId>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scene: SceneId) {
        self.entries.push(scene);
    }

    /// Pop the current scene and return the one now on top.
    /// A no-op returning `None` when one entry or fewer remain.
    pub fn back(&mut self) -> Option<SceneId> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.top()
    }

    pub fn top(&self) -> Option<SceneId> {
        self.entries.last().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[SceneId] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_returns_previous_scene() {
        let mut stack = NavigationStack::new();
        stack.push(SceneId::Title);
        stack.push(SceneId::NoIdea);
        stack.push(SceneId::BadInstructions);

        assert_eq!(stack.back(), Some(SceneId::NoIdea));
        assert_eq!(stack.entries(), &[SceneId::Title, SceneId::NoIdea]);
    }

    #[test]
    fn back_never_underflows() {
        let mut stack = NavigationStack::new();
        assert_eq!(stack.back(), None);

        stack.push(SceneId::Title);
        assert_eq!(stack.back(), None);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top(), Some(SceneId::Title));
    }
}
