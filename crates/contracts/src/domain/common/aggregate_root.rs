/// Root of a stored aggregate.
///
/// Carries the static metadata every screen and repository needs: the
/// table the rows live in and the captions used by the UI.
pub trait AggregateRoot {
    /// Identifier type of the row
    type Id;

    fn id(&self) -> Self::Id;

    /// Aggregate index in the system (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Table name in the store; this is part of the wire contract
    fn table_name() -> &'static str;

    /// Caption for a single row (for example "Customer")
    fn element_name() -> &'static str;

    /// Caption for the list page (for example "Customers")
    fn list_name() -> &'static str;

    /// Full aggregate name, for example "a001_customers"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::table_name())
    }
}
