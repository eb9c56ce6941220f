/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object values and array elements must be single token trees; wrap
/// anything longer (a negative number, a method call) in parentheses.
///
/// # Examples
///
/// ```rust
/// use desi_text::{record, Value};
///
/// let form = record!({
///     "name": "Priya",
///     "age": (-1),
///     "state": null,
///     "tags": ["a", "b"]
/// });
/// assert_eq!(form.get("state"), Some(&Value::Null));
/// assert_eq!(form.get("age").and_then(Value::as_i64), Some(-1));
/// ```
#[macro_export]
macro_rules! record {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::record!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::FieldMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::FieldMap::new();
        $(
            object.insert($key.to_string(), $crate::record!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything with a `From` impl into `Value`
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
