//! Output formats for recorded source signals.

/// Layout of a written trace file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceFormat {
    /// SEG-Y traces without the reel (file) headers (code 1).
    Segy,
    /// One `%e`-formatted sample per line (code 2).
    Ascii,
    /// Bare 4-byte floats (code 3).
    Binary,
}

impl TraceFormat {
    /// Interpret a configuration code; `None` for unknown formats.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Segy),
            2 => Some(Self::Ascii),
            3 => Some(Self::Binary),
            _ => None,
        }
    }

    /// The configuration code for this format.
    pub fn code(self) -> i32 {
        match self {
            Self::Segy => 1,
            Self::Ascii => 2,
            Self::Binary => 3,
        }
    }
}

/// Format a sample the way C's `%e` does: six fractional digits and a
/// signed exponent of at least two digits, e.g. `-1.250000e-03`.
pub fn format_exp(v: f32) -> String {
    if v.is_nan() {
        return if v.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let s = format!("{:.6e}", f64::from(v));
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        for f in [TraceFormat::Segy, TraceFormat::Ascii, TraceFormat::Binary] {
            assert_eq!(TraceFormat::from_code(f.code()), Some(f));
        }
        assert_eq!(TraceFormat::from_code(0), None);
        assert_eq!(TraceFormat::from_code(4), None);
    }

    #[test]
    fn matches_c_exponent_format() {
        assert_eq!(format_exp(1.0), "1.000000e+00");
        assert_eq!(format_exp(0.0), "0.000000e+00");
        assert_eq!(format_exp(-0.00125), "-1.250000e-03");
        assert_eq!(format_exp(1234.5), "1.234500e+03");
        assert_eq!(format_exp(1.0e-30), "1.000000e-30");
        assert_eq!(format_exp(3.0e38), "3.000000e+38");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_exp(f32::NAN), "nan");
        assert_eq!(format_exp(f32::NEG_INFINITY), "-inf");
        assert_eq!(format_exp(f32::INFINITY), "inf");
    }

    #[test]
    fn output_parses_back() {
        for v in [0.5f32, -3.75, 1.0e-7, 6.02e23] {
            let back: f32 = format_exp(v).parse().unwrap();
            assert!((back - v).abs() <= v.abs() * 1e-6);
        }
    }
}
