use super::model::Dataset;
use crate::error::{Error, Result};

/// Ensure the reference and obtained datasets have the same shape.
///
/// Both datasets always have two columns, so this compares point counts.
pub fn check_consistent(reference: &Dataset, obtained: &Dataset) -> Result<()> {
    if reference.len() != obtained.len() || reference.columns() != obtained.columns() {
        return Err(Error::ShapeMismatch {
            reference: reference.len(),
            obtained: obtained.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Dataset {
        Dataset::from_points((1..=n).map(|i| (i as f64, 2.0 * i as f64))).unwrap()
    }

    #[test]
    fn equal_lengths_pass() {
        assert!(check_consistent(&line(3), &line(3)).is_ok());
    }

    #[test]
    fn different_lengths_fail() {
        let err = check_consistent(&line(3), &line(4)).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                reference: 3,
                obtained: 4
            }
        ));

        let err = check_consistent(&line(2), &line(1)).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }
}
