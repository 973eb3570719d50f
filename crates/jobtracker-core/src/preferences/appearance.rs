use super::model::Appearance;

/// Source of the platform's light/dark preference.
///
/// Consulted on every resolution of `Theme::System`; implementations must
/// not cache the answer.
pub trait AppearanceProbe: Send + Sync {
    fn current(&self) -> Appearance;
}

/// Probe returning a fixed answer. Used in tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance(pub Appearance);

impl AppearanceProbe for FixedAppearance {
    fn current(&self) -> Appearance {
        self.0
    }
}
