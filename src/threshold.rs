use crate::error::SvgError;

/// Color-distance tolerance for merging pixels into one run.
///
/// Valid values are `0.0..=255.0`. Two colors merge when their RGB distance is
/// strictly less than the threshold, so `0` disables merging entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// No merging: every pixel becomes its own rectangle.
    pub const ZERO: Threshold = Threshold(0.0);
    pub const MAX: Threshold = Threshold(255.0);

    /// Validate and wrap a threshold. Out-of-range values are rejected, not clamped.
    pub fn new(value: f64) -> Result<Self, SvgError> {
        if !(0.0..=255.0).contains(&value) {
            return Err(SvgError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = SvgError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl TryFrom<u32> for Threshold {
    type Error = SvgError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Threshold::new(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_closed_range() {
        assert_eq!(Threshold::new(0.0).unwrap(), Threshold::ZERO);
        assert_eq!(Threshold::new(255.0).unwrap(), Threshold::MAX);
        assert_eq!(Threshold::new(28.0).unwrap().get(), 28.0);
    }

    #[test]
    fn rejects_out_of_range() {
        for bad in [-1.0, -0.0001, 255.0001, 1000.0, f64::NAN, f64::INFINITY] {
            match Threshold::new(bad) {
                Err(SvgError::InvalidThreshold(_)) => {}
                other => panic!("expected InvalidThreshold for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Threshold::default(), Threshold::ZERO);
    }

    #[test]
    fn integer_conversion() {
        assert_eq!(Threshold::try_from(10u32).unwrap().get(), 10.0);
        assert!(Threshold::try_from(256u32).is_err());
    }
}
