//! Ordered lookup tables of symbolic labels.

/// Declare an immutable, ordered table of symbolic labels.
///
/// Generates a `Copy` newtype over the table position. Construction always
/// reduces the position modulo the table length, so every value names a
/// real entry and lookups cannot go out of bounds. `from_name` is the
/// reverse map from label to position. Values serialize as their labels.
///
/// ```
/// zhan_core::symbol_table! {
///     /// The five phases.
///     pub struct Phase: 5 = ["木", "火", "土", "金", "水"];
/// }
///
/// assert_eq!(Phase::from_index(7).name(), "土");
/// assert_eq!(Phase::from_name("水").map(Phase::index), Some(4));
/// ```
#[macro_export]
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $count:literal = [$($label:literal),+ $(,)?];
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name(u8);

        impl $name {
            /// Number of entries in the table.
            pub const COUNT: usize = $count;

            /// Labels in table order.
            pub const NAMES: [&'static str; $count] = [$($label),+];

            /// The entry at `index`, wrapping around the table in both directions.
            pub fn from_index(index: i64) -> Self {
                Self(index.rem_euclid(Self::COUNT as i64) as u8)
            }

            /// Position of this entry in the table.
            pub fn index(self) -> usize {
                usize::from(self.0)
            }

            /// Label of this entry.
            pub fn name(self) -> &'static str {
                Self::NAMES[self.index()]
            }

            /// Look an entry up by its label.
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();
                Self::NAMES
                    .iter()
                    .position(|label| *label == name)
                    .map(|i| Self(i as u8))
            }

            /// The entry `steps` places further along the cycle.
            pub fn offset(self, steps: i64) -> Self {
                Self::from_index(self.index() as i64 + steps)
            }

            /// Every entry in table order.
            pub fn all() -> impl Iterator<Item = Self> {
                (0..Self::COUNT).map(|i| Self(i as u8))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let label: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                Self::from_name(&label).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::custom(format!(
                        "unknown {} label: {label}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}
