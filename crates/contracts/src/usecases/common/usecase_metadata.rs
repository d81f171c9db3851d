/// Identifies a UseCase in logs and in the UI
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "check_existing_registration"
    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_check_existing_registration"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
