/// Execution phase of the hosting component.
///
/// Starts `Inactive`; the host resumes it right after creation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LifecyclePhase {
    Active,
    #[default]
    Inactive,
}

impl LifecyclePhase {
    #[inline]
    pub fn is_active(self) -> bool {
        self == LifecyclePhase::Active
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            LifecyclePhase::Active => "active",
            LifecyclePhase::Inactive => "inactive",
        }
    }
}
