//! The flat XSS float array and the 1-based indexing convention used
//! throughout the ACE format (MCNP Appendix F).
//!
//! Every offset named in the format (JXS entries, LDAT, LOCA, LC, ...)
//! is a 1-based position into this array. Centralizing the conversion
//! here means the rest of the decoder can keep slice arithmetic in the
//! same form as the MCNP manual and the original source, instead of
//! scattering `- 1`s everywhere.

use crate::error::AceError;

#[derive(Debug, Clone, Default)]
pub struct Xss(Vec<f64>);

impl Xss {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `XSS[i]` in 1-based MCNP notation.
    pub fn at(&self, i: usize) -> f64 {
        self.0[i - 1]
    }

    /// `XSS[i]` truncated and rounded to the nearest integer, for fields
    /// that are logically integers stored as floats.
    pub fn int_at(&self, i: usize) -> i64 {
        self.at(i).round() as i64
    }

    pub fn usize_at(&self, i: usize) -> usize {
        self.int_at(i) as usize
    }

    /// `XSS[start..start+len]`, 1-based inclusive start, `len` elements.
    pub fn slice(&self, start: usize, len: usize) -> &[f64] {
        &self.0[start - 1..start - 1 + len]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Parse exactly `count` whitespace-separated floats from `text`.
    pub fn parse(text: &str, count: usize) -> Result<Self, AceError> {
        let mut values = Vec::with_capacity(count);
        let mut tokens = text.split_ascii_whitespace();
        for _ in 0..count {
            let Some(tok) = tokens.next() else {
                return Err(AceError::TruncatedXss {
                    expected: count,
                    got: values.len(),
                });
            };
            let value = fast_float::parse::<f64, _>(tok)
                .map_err(|_| AceError::InvalidHeader(format!("malformed XSS float: {tok:?}")))?;
            values.push(value);
        }
        Ok(Xss(values))
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_access() {
        let xss = Xss(vec![10.0, 20.0, 30.0]);
        assert_eq!(xss.at(1), 10.0);
        assert_eq!(xss.at(3), 30.0);
        assert_eq!(xss.slice(2, 2), &[20.0, 30.0]);
    }

    #[test]
    fn parse_exact_count() {
        let xss = Xss::parse("1.0 2.0 3.0", 3).unwrap();
        assert_eq!(xss.len(), 3);
    }

    #[test]
    fn parse_truncated() {
        let err = Xss::parse("1.0 2.0", 3).unwrap_err();
        assert!(matches!(err, AceError::TruncatedXss { expected: 3, got: 2 }));
    }
}
