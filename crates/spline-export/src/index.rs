/// Issues zero-based ordinals to the animatable properties of one shape
/// element, so siblings emitted under the same block never collide.
///
/// One indexer per shape conversion. It is created by the shape emitter,
/// lent to each property encoder in turn and dropped when the block is
/// complete; there is no reset and no sharing across shapes.
#[derive(Debug, Default)]
pub struct PropertyIndexer {
    next: u32,
}

impl PropertyIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current ordinal and advances by one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        let ordinal = self.next;
        self.next += 1;
        ordinal
    }
}
