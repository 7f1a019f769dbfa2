//! Dense sorted fixtures with arithmetic ground truth.
//!
//! A fixture is the harness's source of truth: because it constructs its
//! values from a known generator (consecutive integers, optionally with one
//! value removed), it can state the leftmost match/insertion index for any
//! key by arithmetic alone — never by searching. Kernels are then checked
//! against an answer they had no hand in producing.

/// A strictly increasing array of dense integers with known structure.
///
/// Two shapes:
/// - `dense(size)` — the values `0..size`; every key in range sits at its own
///   index.
/// - `with_gap(size, removed)` — the values `0..=size` with `removed` taken
///   out; still `size` elements, and probing the removed value is a
///   guaranteed miss whose insertion point is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseFixture {
    values: Vec<i64>,
    removed: Option<usize>,
}

impl DenseFixture {
    /// The dense array `[0, size)`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn dense(size: usize) -> Self {
        Self {
            values: (0..size as i64).collect(),
            removed: None,
        }
    }

    /// The array `[0, size]` with the value `removed` taken out.
    ///
    /// # Panics
    ///
    /// Panics if `removed > size` (the gap must fall inside the generator
    /// range, or the result would not have `size` elements).
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn with_gap(size: usize, removed: usize) -> Self {
        assert!(
            removed <= size,
            "gap value {removed} outside generator range 0..={size}"
        );
        Self {
            values: (0..=size as i64)
                .filter(|&v| v != removed as i64)
                .collect(),
            removed: Some(removed),
        }
    }

    /// The sorted values, for lending to kernels.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the fixture holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `key` is present, answered from the generator structure.
    #[must_use]
    pub fn contains(&self, key: i64) -> bool {
        let Ok(key) = usize::try_from(key) else {
            return false;
        };
        match self.removed {
            None => key < self.values.len(),
            // Gapped values run up to `size`, which equals `len`.
            Some(removed) => key != removed && key <= self.values.len(),
        }
    }

    /// The leftmost match/insertion index for `key`, from the generator
    /// structure.
    ///
    /// For a present key this is its index; for an absent key it is the
    /// smallest index whose value is `>= key`, or `len` when no such value
    /// exists.
    #[must_use]
    pub fn expected_index(&self, key: i64) -> usize {
        let len = self.values.len();
        let Ok(key) = usize::try_from(key) else {
            // Negative keys insert at the front.
            return 0;
        };
        match self.removed {
            None => key.min(len),
            Some(removed) => {
                if key <= removed {
                    // Below the gap keys sit at their own index; the removed
                    // key's insertion point is also its own value.
                    key.min(len)
                } else {
                    // Above the gap everything is shifted down one slot.
                    (key - 1).min(len)
                }
            }
        }
    }
}
