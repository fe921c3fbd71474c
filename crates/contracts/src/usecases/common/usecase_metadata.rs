/// Identification of a use case, used in log lines
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "seed_catalog"
    fn usecase_name() -> &'static str;

    /// "u501_seed_catalog"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
