//! Class-name composition.
//!
//! Widgets describe their CSS classes with [`ClassValue`], a recursive value
//! that can mix literal names, conditional flags, and nested sequences.
//! [`compose`] flattens a list of values into a single space-separated class
//! string, discarding everything falsy along the way.

/// A recursive description of zero or more class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    /// Absence marker. Always discarded.
    Null,
    /// A literal class name. Falsy when empty.
    Str(String),
    /// A boolean literal. `false` is discarded; `true` survives and renders
    /// as `"true"`.
    Bool(bool),
    /// A numeric literal. Zero is discarded; other values render in decimal.
    Num(i64),
    /// An ordered sequence of values, nested arbitrarily deep.
    Seq(Vec<ClassValue>),
    /// An ordered mapping from class name to include flag. Iteration order is
    /// insertion order.
    Map(Vec<(String, bool)>),
}

impl ClassValue {
    /// Build a [`ClassValue::Map`] from key/flag pairs, preserving order.
    pub fn map<K: Into<String>>(pairs: impl IntoIterator<Item = (K, bool)>) -> Self {
        Self::Map(pairs.into_iter().map(|(k, on)| (k.into(), on)).collect())
    }

    /// Recursively expand into a flat element sequence.
    ///
    /// Map entries carrying a false flag are dropped here, before the falsy
    /// filter ever sees them. This is observably different from filtering: a
    /// literal empty string inside a sequence reaches the filter stage, but a
    /// false-flagged key never becomes an element at all.
    fn flatten(&self, out: &mut Vec<Self>) {
        match self {
            Self::Seq(items) => {
                for item in items {
                    item.flatten(out);
                }
            }
            Self::Map(pairs) => {
                for (key, on) in pairs {
                    if *on {
                        out.push(Self::Str(key.clone()));
                    }
                }
            }
            other => out.push(other.clone()),
        }
    }

    /// Does this element survive the falsy filter? Only meaningful for the
    /// scalar variants that `flatten` can emit.
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Num(n) => *n != 0,
            Self::Seq(_) | Self::Map(_) => false,
        }
    }

    /// Render a surviving scalar element as a class-string fragment.
    fn render(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Bool(b) => b.to_string(),
            Self::Num(n) => n.to_string(),
            Self::Null | Self::Seq(_) | Self::Map(_) => String::new(),
        }
    }
}

/// Compose class values into a single space-separated string.
///
/// Expansion flattens nested sequences fully and emits true-flagged map keys
/// in insertion order; the surviving elements are then filtered for falsiness
/// and joined with single spaces, preserving order of first appearance.
/// Duplicates are not deduplicated. The function is total: there are no error
/// states and no panics for any input.
pub fn compose(values: &[ClassValue]) -> String {
    let mut flat = Vec::new();
    for value in values {
        value.flatten(&mut flat);
    }
    flat.into_iter()
        .filter(ClassValue::is_truthy)
        .map(ClassValue::render)
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ClassValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ClassValue {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

/// `None` maps to the absence marker.
impl<T: Into<Self>> From<Option<T>> for ClassValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl From<Vec<Self>> for ClassValue {
    fn from(items: Vec<Self>) -> Self {
        Self::Seq(items)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassValue {
    fn from(pairs: [(&str, bool); N]) -> Self {
        Self::map(pairs)
    }
}

/// Compose a class string from a list of expressions convertible to
/// [`ClassValue`].
///
/// ```
/// use trellis_core::classes;
///
/// let open = true;
/// assert_eq!(classes!("nav", [("nav-open", open)]), "nav nav-open");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::class::compose(&[$($crate::class::ClassValue::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty() {
        assert_eq!(compose(&[]), "");
        assert_eq!(classes!(), "");
    }

    #[test]
    fn joins_names() {
        assert_eq!(classes!("a", "b"), "a b");
    }

    #[test]
    fn discards_falsy() {
        assert_eq!(
            classes!("a", None::<&str>, false, "b"),
            "a b"
        );
        assert_eq!(classes!("", 0, false), "");
    }

    #[test]
    fn flattens_nested_sequences() {
        let v = ClassValue::Seq(vec![
            "a".into(),
            ClassValue::Seq(vec!["b".into(), "c".into()]),
        ]);
        assert_eq!(compose(&[v]), "a b c");
    }

    #[test]
    fn map_emits_true_keys_in_order() {
        assert_eq!(classes!([("active", true), ("hidden", false)]), "active");
        assert_eq!(
            classes!([("z", true), ("a", true), ("m", true)]),
            "z a m"
        );
    }

    #[test]
    fn mixed_arguments() {
        assert_eq!(
            classes!(
                "base",
                [("active", true)],
                ClassValue::Seq(vec!["extra".into(), false.into()])
            ),
            "base active extra"
        );
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(classes!("a", "a", vec!["a".into()]), "a a a");
    }

    #[test]
    fn truthy_scalars_render() {
        assert_eq!(classes!(true, 3), "true 3");
    }

    /// A false-flagged key is dropped during expansion, while a literal falsy
    /// string is dropped by the filter. Observably equivalent outputs, but
    /// both paths must exist: see the doc comment on `flatten`.
    #[test]
    fn two_stage_falsy_handling() {
        let from_map = compose(&[ClassValue::map([("gone", false)])]);
        let from_seq = compose(&[ClassValue::Seq(vec!["".into()])]);
        assert_eq!(from_map, "");
        assert_eq!(from_seq, "");
        // And a false flag on a key that is itself a falsy-looking string
        // never surfaces, while the same string as a literal would.
        assert_eq!(classes!([("0", true)]), "0");
    }

    #[test]
    fn idempotent() {
        let once = classes!("a", [("b", true)], vec!["c".into()]);
        assert_eq!(classes!(once.clone()), once);
    }

    /// Strategy generating arbitrarily nested class values.
    fn class_value() -> impl Strategy<Value = ClassValue> {
        let leaf = prop_oneof![
            Just(ClassValue::Null),
            any::<bool>().prop_map(ClassValue::Bool),
            any::<i64>().prop_map(ClassValue::Num),
            "[a-z]{0,8}".prop_map(ClassValue::Str),
        ];
        leaf.prop_recursive(4, 32, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(ClassValue::Seq),
                prop::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..6)
                    .prop_map(ClassValue::Map),
            ]
        })
    }

    proptest! {
        #[test]
        fn no_stray_spaces(values in prop::collection::vec(class_value(), 0..8)) {
            let out = compose(&values);
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }

        #[test]
        fn wrapping_in_a_sequence_is_transparent(
            values in prop::collection::vec(class_value(), 0..8)
        ) {
            prop_assert_eq!(
                compose(&[ClassValue::Seq(values.clone())]),
                compose(&values)
            );
        }

        #[test]
        fn composing_own_output_is_identity(
            values in prop::collection::vec(class_value(), 0..8)
        ) {
            let once = compose(&values);
            prop_assert_eq!(compose(&[once.clone().into()]), once);
        }
    }
}
