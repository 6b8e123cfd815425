/// Serde helpers for skip_serializing_if

/// Skip serializing if false
#[inline]
pub fn is_false(value: &bool) -> bool {
    !*value
}

/// Skip serializing if None
#[inline]
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if zero
#[inline]
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}
