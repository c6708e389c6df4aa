//! Wire symbols for the scenario vocabulary.
//!
//! Each vocabulary enum maps forward to its symbol with an exhaustive
//! `match`, and maps back by scanning its static `ALL` table. A symbol that
//! is not in the table is a [`SymbolError`], never a panic.

/// A string that does not name any member of a vocabulary enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} symbol: {raw:?}")]
pub struct SymbolError {
    /// Vocabulary being parsed (e.g. `"location"`).
    pub kind: &'static str,
    /// The rejected input.
    pub raw: String,
}

/// A closed vocabulary with a stable wire symbol and a display label.
pub trait Symbolic: Copy + PartialEq + 'static {
    /// Vocabulary name used in error messages.
    const KIND: &'static str;

    /// Every member, in canonical catalog order.
    const ALL: &'static [Self];

    /// Wire symbol.
    fn symbol(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Reverse lookup by wire symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] if `raw` is not a symbol of this vocabulary.
    fn from_symbol(raw: &str) -> Result<Self, SymbolError> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.symbol() == raw)
            .ok_or_else(|| SymbolError {
                kind: Self::KIND,
                raw: raw.to_string(),
            })
    }

    /// Reverse lookup by display label.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] if `raw` is not a label of this vocabulary.
    fn from_label(raw: &str) -> Result<Self, SymbolError> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.label() == raw)
            .ok_or_else(|| SymbolError {
                kind: Self::KIND,
                raw: raw.to_string(),
            })
    }
}

/// Implement `Display`, `FromStr`, `Serialize` and `Deserialize` for a
/// [`Symbolic`] type in terms of its wire symbol.
#[macro_export]
macro_rules! symbol_codec {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::state::symbol::Symbolic::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::state::symbol::SymbolError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$ty as $crate::state::symbol::Symbolic>::from_symbol(s)
            }
        }

        impl $crate::__serde::Serialize for $ty {
            fn serialize<S: $crate::__serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::state::symbol::Symbolic::symbol(*self))
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $ty {
            fn deserialize<D: $crate::__serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let raw = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <$ty as $crate::state::symbol::Symbolic>::from_symbol(&raw)
                    .map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    )+};
}
