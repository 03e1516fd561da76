//! Public macros for constructing option structs without relying on struct literal syntax.

/// Construct [`crate::ParseOptions`] from `Default` and a list of field assignments.
///
/// Example:
///
/// ```rust
/// let options = launch_config::parse_options! {
///     with_snippet: false,
/// };
/// assert!(!options.with_snippet);
/// ```
#[macro_export]
macro_rules! parse_options {
    ( $( $field:ident : $value:expr ),* $(,)? ) => {{
        let mut opt = $crate::ParseOptions::default();
        $(
            opt.$field = $value;
        )*
        opt
    }};
}
