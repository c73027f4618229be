//! Serde helper for monetary balances (plain `f64`, no currency).

use serde::Serializer;

/// Largest magnitude below which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize whole balances as JSON integers (`1000`, not `1000.0`).
/// Used with #[serde(serialize_with = "crate::utils::balance::serialize")].
pub fn serialize<S>(balance: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if balance.fract() == 0.0 && balance.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*balance as i64)
    } else {
        serializer.serialize_f64(*balance)
    }
}
