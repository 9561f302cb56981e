/// Identity of a shape on the canvas. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

/// Monotonic id source owned by a scene
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut ids = IdGenerator::new();
        let a = ids.generate_id();
        let b = ids.generate_id();
        assert!(b > a);
        assert_eq!(ids.generate_id(), ShapeId(3));
    }
}
