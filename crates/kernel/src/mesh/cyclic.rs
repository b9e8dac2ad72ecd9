//! Cyclic traversal helpers used to close polygon rings during stitching.

use crate::error::GeometryError;

/// Iterate consecutive pairs `(v0,v1), (v1,v2), ..., (vn-1,v0)`, wrapping
/// the last element back to the first.
///
/// Fails with `InsufficientElements` when fewer than 2 elements are given.
pub fn cyclic_pairs<T>(items: &[T]) -> Result<impl Iterator<Item = (&T, &T)>, GeometryError> {
    let n = items.len();
    if n < 2 {
        return Err(GeometryError::InsufficientElements {
            required: 2,
            provided: n,
        });
    }
    Ok((0..n).map(move |i| (&items[i], &items[(i + 1) % n])))
}

/// Iterate all elements and then the first once more, closing the loop.
///
/// Fails with `InsufficientElements` when the slice is empty.
pub fn cyclic<T>(items: &[T]) -> Result<impl Iterator<Item = &T>, GeometryError> {
    match items.first() {
        Some(first) => Ok(items.iter().chain(std::iter::once(first))),
        None => Err(GeometryError::InsufficientElements {
            required: 1,
            provided: 0,
        }),
    }
}
