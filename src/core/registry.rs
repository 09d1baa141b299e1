/// Scene registry: one procedure per scene id.
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::session::Session;
use crate::schema::ids::SceneId;
use crate::schema::script::Script;

/// A scene procedure: reads and resets session state, describes what to show.
pub type SceneFn = fn(&mut Session) -> Script;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("scene registered twice: {0}")]
    Duplicate(&'static str),
}

#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    scenes: FxHashMap<SceneId, SceneFn>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene. Ids are unique; registering one twice is an error.
    pub fn register(&mut self, id: SceneId, scene: SceneFn) -> Result<(), RegistryError> {
        if self.scenes.contains_key(&id) {
            return Err(RegistryError::Duplicate(id.name()));
        }
        self.scenes.insert(id, scene);
        Ok(())
    }

    pub fn get(&self, id: SceneId) -> Option<SceneFn> {
        self.scenes.get(&id).copied()
    }

    pub fn contains(&self, id: SceneId) -> bool {
        self.scenes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Registered ids in catalogue order.
    pub fn ids(&self) -> Vec<SceneId> {
        SceneId::ALL
            .iter()
            .copied()
            .filter(|id| self.scenes.contains_key(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(_: &mut Session) -> Script {
        Script::new()
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = SceneRegistry::new();
        registry.register(SceneId::Title, quiet).unwrap();
        assert!(registry.contains(SceneId::Title));
        assert!(registry.get(SceneId::Win).is_none());
        assert_eq!(registry.ids(), vec![SceneId::Title]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut registry = SceneRegistry::new();
        registry.register(SceneId::Trivia, quiet).unwrap();
        let err = registry.register(SceneId::Trivia, quiet).unwrap_err();
        assert_eq!(err.to_string(), "scene registered twice: trivia");
        assert_eq!(registry.len(), 1);
    }
}
