//! Macros for declarative transition tables.

/// Build a [`TransitionTable`](crate::TransitionTable) from a nested
/// `state: { signal => target }` layout.
///
/// # Example
///
/// ```
/// use ministate::routes;
///
/// let table = routes! {
///     "Idle": {
///         "start" => "Running",
///         "relax" => "Idle",
///     },
///     "Running": {
///         "start" => "Running",
///         "relax" => "Idle",
///     },
/// };
///
/// assert_eq!(table.resolve("Idle", "start"), "Running");
/// ```
#[macro_export]
macro_rules! routes {
    (
        $(
            $state:literal : {
                $( $signal:expr => $target:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        let mut table = $crate::TransitionTable::new();
        $(
            $(
                table.add_route($state, $signal, $target);
            )*
        )*
        table
    }};
}
