//! Protocol constants for the Matter Illuminance Measurement cluster.
//!
//! The cluster reports `MeasuredValue` as `10000 * log10(lux) + 1`, stored in
//! an unsigned 16-bit attribute. `0` means "too low to be measured" and
//! `0xFFFF` is the null value, so valid encoded readings are `1..=0xFFFE`.

/// Smallest valid encoded measured value (1 lux).
pub const MEASURED_VALUE_MIN: i64 = 1;

/// Largest valid encoded measured value (about 3.57 million lux).
pub const MEASURED_VALUE_MAX: i64 = 0xFFFE;

/// Encoded value meaning the illuminance is too low to be measured.
pub const MEASURED_VALUE_TOO_LOW: i64 = 0;

/// Encoded null value.
pub const MEASURED_VALUE_NULL: i64 = 0xFFFF;

/// Lower bound of the illuminance an emulated light sensor will report.
pub const LIGHTSENSOR_MIN_VAL: i64 = 1;

/// Upper bound of the illuminance an emulated light sensor will report.
pub const LIGHTSENSOR_MAX_VAL: i64 = 3_576_000;

/// Scale applied to `log10(lux)` by the encoding.
pub const LOG_SCALE: f64 = 10_000.0;

/// Lowest discriminator handed out when generating one at random.
pub const DISCRIMINATOR_MIN: u16 = 0x3E8;

/// Highest 12-bit discriminator.
pub const DISCRIMINATOR_MAX: u16 = 0xFFF;

/// Prefix of a Matter onboarding payload (`MT:...`).
pub const SETUP_PAYLOAD_PREFIX: &str = "MT";

/// Separator between the payload prefix and the setup code.
pub const SETUP_PAYLOAD_SEPARATOR: char = ':';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_range_fits_u16_attribute() {
        assert!(MEASURED_VALUE_MIN > MEASURED_VALUE_TOO_LOW);
        assert!(MEASURED_VALUE_MAX < MEASURED_VALUE_NULL);
        assert_eq!(MEASURED_VALUE_NULL, i64::from(u16::MAX));
    }

    #[test]
    fn test_discriminator_is_twelve_bits() {
        assert_eq!(DISCRIMINATOR_MAX, 0x0FFF);
        assert!(DISCRIMINATOR_MIN < DISCRIMINATOR_MAX);
    }

    #[test]
    fn test_lightsensor_minimum_is_positive() {
        assert!(LIGHTSENSOR_MIN_VAL >= 1);
    }
}
