
// approximation from https://www.flipcode.com/archives/Fast_log_Function.shtml,
// posted by Laurent de Soras


const MANTISSA_BITS: u32 = 23;
const EXPONENT_MASK: u32 = (1 << 8) - 1;
const EXPONENT_BIAS: u32 = EXPONENT_MASK >> 1;

// the only quadratic-free fit that is exact at the rounding threshold: log2(1.5)
const MANTISSA_SLOPE: f32 = 0.584_962_5;


/// Computes an approximation of `log2(value)`, several times faster than the libm call.
/// The result deviates from the exact logarithm by a small fraction of a bit,
/// which is acceptable wherever the result is rounded to a whole number of bits anyway.
/// Invalid input such as zero, infinity or NaN produces a meaningless but finite result.
pub fn fast_log2(value: f32) -> f32 {

    // pull the float apart into exponent and mantissa.
    // the exponent already is the integer part of the logarithm
    let bits = value.to_bits();
    let exponent = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32 - EXPONENT_BIAS as i32;

    // force the exponent to zero, scaling the value into [1, 2)
    let mantissa = f32::from_bits(
        (bits & !(EXPONENT_MASK << MANTISSA_BITS)) | (EXPONENT_BIAS << MANTISSA_BITS)
    );

    // linear estimate of log2 between 1 and 2
    exponent as f32 + MANTISSA_SLOPE * mantissa
}



#[cfg(test)]
mod test {
    use super::fast_log2;

    #[test]
    fn stays_close_to_the_exact_logarithm(){
        let values = [
            0.001_f32, 0.004, 0.01, 0.062_5, 0.125, 0.2, 0.25, 0.333, 0.5,
            0.75, 1.0, 1.5, 2.0, 3.0, 7.0, 100.0, 65_536.0, 1.0e9,
        ];

        for &value in &values {
            let error = (fast_log2(value) - value.log2()).abs();
            assert!(error < 0.6, "log2({}) deviates by {}", value, error);
        }
    }

    #[test]
    fn is_monotonic(){
        let mut previous = fast_log2(1.0e-6);

        for step in 1 .. 10_000 {
            let current = fast_log2(step as f32 * 0.01);
            assert!(current >= previous);
            previous = current;
        }
    }
}
