/// An identifier with a distinguished null value and a distinguished
/// wildcard value.
///
/// The wildcard value matches every concrete value during source-pattern
/// resolution. Null is an ordinary, comparable value — it is not the same
/// thing as "unspecified" and never matches anything besides itself or the
/// wildcard.
pub trait Wildcard: Copy + PartialEq {
    /// The null value of this identifier type.
    fn null() -> Self;

    /// The wildcard value of this identifier type.
    fn any() -> Self;

    /// True if the two values are equal, or either side is the wildcard.
    fn matches(&self, other: &Self) -> bool {
        *self == Self::any() || *other == Self::any() || *self == *other
    }
}
