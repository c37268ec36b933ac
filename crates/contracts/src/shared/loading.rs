/// Phase of the one-shot simulated data load of a view.
///
/// There is exactly one transition, `Loading → Loaded`; it cannot be
/// cancelled or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// Moves to `Loaded`. Returns `false` when the load had already finished.
    pub fn finish(&mut self) -> bool {
        match self {
            LoadPhase::Loading => {
                *self = LoadPhase::Loaded;
                true
            }
            LoadPhase::Loaded => false,
        }
    }
}
