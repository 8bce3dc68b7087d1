/// UseCase identity shown in the sidebar and in tab titles
pub trait UseCaseMetadata {
    /// Index, e.g. "u101"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "keyword_analysis"
    fn usecase_name() -> &'static str;

    /// Label for the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u101_keyword_analysis", also used as the tab key
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
