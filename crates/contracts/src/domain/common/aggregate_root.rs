/// Трейт для корня агрегата
///
/// Records are owned by the backend; the client only needs their identity
/// and the naming used for tabs, lists and menu entries.
pub trait AggregateRoot {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Opaque server-assigned ID
    fn id(&self) -> &str;

    /// Human readable caption of the record
    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата (например, "a101")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "article")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular)
    fn element_name() -> &'static str;

    /// List name for the UI (plural)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата (например, "a101_article")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
