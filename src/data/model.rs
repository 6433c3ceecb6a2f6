// ---------------------------------------------------------------------------
// Range – min/max of one column
// ---------------------------------------------------------------------------

/// Closed interval spanned by the values of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Min/max over `values`.  Any NaN in the column makes both bounds NaN.
    /// Returns `None` for an empty slice.
    pub fn of(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        if values.iter().any(|v| v.is_nan()) {
            return Some(Range {
                min: f64::NAN,
                max: f64::NAN,
            });
        }
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(Range { min, max })
    }
}

// ---------------------------------------------------------------------------
// Dataset – the (x, y) pairs of one input file
// ---------------------------------------------------------------------------

/// Paired x/y columns in file order.  Always holds at least one point and
/// both columns have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from its two columns.
    ///
    /// Returns `None` if the columns differ in length or are empty.
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>) -> Option<Self> {
        if x.is_empty() || x.len() != y.len() {
            return None;
        }
        Some(Dataset { x, y })
    }

    /// Build a dataset from row pairs.  `None` if there are no rows.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let (x, y): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        Self::from_columns(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of columns, which is 2 for every dataset.
    pub fn columns(&self) -> usize {
        2
    }

    pub fn x_range(&self) -> Range {
        // Non-empty by construction.
        Range::of(&self.x).unwrap_or(Range { min: f64::NAN, max: f64::NAN })
    }

    pub fn y_range(&self) -> Range {
        Range::of(&self.y).unwrap_or(Range { min: f64::NAN, max: f64::NAN })
    }
}
