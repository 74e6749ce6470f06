//! Old- and new-style ACE headers: identification, processing metadata,
//! and the NXS/JXS directories.

use std::io::BufRead;

use crate::error::AceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Old,
    New,
}

#[derive(Debug, Clone)]
pub struct Header {
    pub style: HeaderStyle,
    pub zaid: String,
    pub za: Option<i64>,
    pub z: Option<i64>,
    pub a: Option<i64>,
    pub metastable: bool,
    pub suffix: String,
    pub atomic_weight_ratio: f64,
    /// `kT`, in MeV.
    pub temperature: f64,
    pub processing_date: Option<String>,
    pub comment: String,
    pub material_id: String,
    pub nxs: [i64; 17],
    pub jxs: [i64; 33],
}

impl Header {
    /// Index `NXS[k]`, 1-based per MCNP Appendix F (`nxs[0]` is unused).
    pub fn nxs(&self, k: usize) -> i64 {
        self.nxs[k]
    }

    /// Index `JXS[k]`, 1-based, 0 meaning "block absent".
    pub fn jxs(&self, k: usize) -> i64 {
        self.jxs[k]
    }

    pub fn from_reader<R: BufRead>(reader: &mut R) -> Result<Self, AceError> {
        let first_line = read_line(reader)?;
        let tokens: Vec<&str> = first_line.split_ascii_whitespace().collect();

        if tokens.len() > 3 {
            Self::parse_old_style(reader, &first_line)
        } else {
            Self::parse_new_style(reader, &tokens)
        }
    }

    fn parse_old_style<R: BufRead>(reader: &mut R, first_line: &str) -> Result<Self, AceError> {
        let tokens: Vec<&str> = first_line.split_ascii_whitespace().collect();
        if tokens.len() != 4 {
            return Err(AceError::InvalidHeader(format!(
                "old-style header line must have 4 tokens, got {}: {first_line:?}",
                tokens.len()
            )));
        }
        let zaid = tokens[0].to_string();
        let atomic_weight_ratio = parse_f64(tokens[1])?;
        let temperature = parse_f64(tokens[2])?;
        let processing_date = Some(tokens[3].to_string());

        let second_line = read_line(reader)?;
        let (comment, material_id) = split_comment_record(&second_line);

        let (nxs, jxs) = parse_nxs_jxs(reader)?;
        let (za, z, a, metastable, suffix) = decode_zaid(&zaid);

        Ok(Header {
            style: HeaderStyle::Old,
            zaid,
            za,
            z,
            a,
            metastable,
            suffix,
            atomic_weight_ratio,
            temperature,
            processing_date,
            comment,
            material_id,
            nxs,
            jxs,
        })
    }

    fn parse_new_style<R: BufRead>(reader: &mut R, first_tokens: &[&str]) -> Result<Self, AceError> {
        if first_tokens.len() != 3 {
            return Err(AceError::InvalidHeader(format!(
                "new-style header line must have 3 tokens, got {}",
                first_tokens.len()
            )));
        }
        let zaid = first_tokens[1].to_string();

        let second_line = read_line(reader)?;
        let second_tokens: Vec<&str> = second_line.split_ascii_whitespace().collect();
        if second_tokens.len() != 4 {
            return Err(AceError::InvalidHeader(format!(
                "new-style second header line must have 4 tokens, got {}: {second_line:?}",
                second_tokens.len()
            )));
        }
        let atomic_weight_ratio = parse_f64(second_tokens[0])?;
        let temperature = parse_f64(second_tokens[1])?;
        let processing_date = Some(second_tokens[2].to_string());
        let ncomments: usize = second_tokens[3]
            .parse()
            .map_err(|_| AceError::InvalidHeader(format!("bad NCOMMENTS: {:?}", second_tokens[3])))?;

        let mut comment = String::new();
        for i in 0..ncomments {
            let line = read_line(reader)?;
            if i > 0 {
                comment.push('\n');
            }
            comment.push_str(line.trim_end());
        }

        let (nxs, jxs) = parse_nxs_jxs(reader)?;
        let (za, z, a, metastable, suffix) = decode_zaid(&zaid);

        Ok(Header {
            style: HeaderStyle::New,
            zaid,
            za,
            z,
            a,
            metastable,
            suffix,
            atomic_weight_ratio,
            temperature,
            processing_date,
            comment,
            material_id: String::new(),
            nxs,
            jxs,
        })
    }
}

/// Reads the fixed-shape IZAW (16 pairs), NXS (16 ints), JXS (32 ints)
/// block. Whitespace across line boundaries is tolerated: the ACE format
/// lays these out in fixed-width columns but every shipped table also
/// happens to be whitespace-separated, so a flat token stream is
/// sufficient and far simpler than re-deriving NJOY's column widths.
fn parse_nxs_jxs<R: BufRead>(reader: &mut R) -> Result<([i64; 17], [i64; 33]), AceError> {
    let mut tokens: Vec<String> = Vec::with_capacity(80);
    while tokens.len() < 80 {
        let line = read_line(reader)?;
        tokens.extend(line.split_ascii_whitespace().map(str::to_string));
    }
    if tokens.len() < 80 {
        return Err(AceError::InvalidHeader(format!(
            "expected 80 IZAW/NXS/JXS tokens, got {}",
            tokens.len()
        )));
    }

    // First 32 tokens are 16 (iz, aw) pairs -- unused by this decoder.
    let mut nxs = [0i64; 17];
    for (k, tok) in tokens[32..48].iter().enumerate() {
        nxs[k + 1] = tok
            .parse::<f64>()
            .map_err(|_| AceError::InvalidHeader(format!("bad NXS entry: {tok:?}")))?
            .round() as i64;
    }

    let mut jxs = [0i64; 33];
    for (k, tok) in tokens[48..80].iter().enumerate() {
        jxs[k + 1] = tok
            .parse::<f64>()
            .map_err(|_| AceError::InvalidHeader(format!("bad JXS entry: {tok:?}")))?
            .round() as i64;
    }

    Ok((nxs, jxs))
}

/// Old-style ZAID.suffix identifiers are integer `ZA`; thermal-scattering
/// materials (`lwtr.10t`) use alphanumeric names and have no `Z`/`A`.
/// Any encoded `A` at or above 300 is an MCNP metastable-isomer encoding
/// rather than a ground-state mass number.
fn decode_zaid(zaid: &str) -> (Option<i64>, Option<i64>, Option<i64>, bool, String) {
    let (za_part, suffix) = match zaid.split_once('.') {
        Some((za, suffix)) => (za, suffix.to_string()),
        None => (zaid, String::new()),
    };
    match za_part.parse::<i64>() {
        Ok(za) => {
            let z = za / 1000;
            let a = za - 1000 * z;
            let metastable = a >= 300;
            (Some(za), Some(z), Some(a), metastable, suffix)
        }
        Err(_) => (None, None, None, false, suffix),
    }
}

fn split_comment_record(line: &str) -> (String, String) {
    let chars: Vec<char> = line.trim_end_matches(['\n', '\r']).chars().collect();
    let comment_len = chars.len().min(70);
    let comment: String = chars[..comment_len].iter().collect::<String>().trim_end().to_string();
    let material_id: String = if chars.len() > 70 {
        chars[70..].iter().collect::<String>().trim().to_string()
    } else {
        String::new()
    };
    (comment, material_id)
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<String, AceError> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Err(AceError::InvalidHeader("unexpected end of header".to_string()));
    }
    Ok(line)
}

fn parse_f64(tok: &str) -> Result<f64, AceError> {
    fast_float::parse::<f64, _>(tok).map_err(|_| AceError::InvalidHeader(format!("bad float: {tok:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn nxs_jxs_lines() -> String {
        // 4 IZAW lines x 8 numbers, 2 NXS lines x 8 ints, 4 JXS lines x 8 ints.
        let izaw = "0 0.0 0 0.0 0 0.0 0 0.0\n".repeat(4);
        let nxs_line1 = "100 4 50 10 5 0 0 0\n";
        let nxs_line2 = "92 235 0 0 0 0 0 0\n";
        let jxs = "1 2 3 4 5 6 7 8\n".repeat(4);
        format!("{izaw}{nxs_line1}{nxs_line2}{jxs}")
    }

    #[test]
    fn parses_old_style() {
        let body = format!(
            "92235.50c 233.025 2.53E-08 12/15/93\n{:<70}{:<10}\n{}",
            "endf/b-viii.0 njoy",
            "mat9228",
            nxs_jxs_lines()
        );
        let mut cursor = Cursor::new(body);
        let header = Header::from_reader(&mut cursor).unwrap();
        assert_eq!(header.style, HeaderStyle::Old);
        assert_eq!(header.zaid, "92235.50c");
        assert_eq!(header.z, Some(92));
        assert_eq!(header.a, Some(235));
        assert!(!header.metastable);
        assert_eq!(header.suffix, "50c");
        assert_eq!(header.nxs(1), 100);
        assert_eq!(header.nxs(4), 10);
        assert_eq!(header.jxs(1), 1);
    }

    #[test]
    fn parses_new_style() {
        let body = format!(
            "2.0.1 92235.50c ENDF/B-VIII.0\n99.999 2.5301e-08 2025-02-05 2\nfirst comment line\nsecond comment line\n{}",
            nxs_jxs_lines()
        );
        let mut cursor = Cursor::new(body);
        let header = Header::from_reader(&mut cursor).unwrap();
        assert_eq!(header.style, HeaderStyle::New);
        assert_eq!(header.z, Some(92));
        assert_eq!(header.a, Some(235));
        assert_eq!(header.comment, "first comment line\nsecond comment line");
        assert_eq!(header.nxs(3), 50);
    }

    #[test]
    fn alphanumeric_zaid_has_no_za() {
        let (za, z, a, metastable, suffix) = decode_zaid("lwtr.10t");
        assert!(za.is_none() && z.is_none() && a.is_none());
        assert!(!metastable);
        assert_eq!(suffix, "10t");
    }

    #[test]
    fn truncated_header_is_invalid_header() {
        let mut cursor = Cursor::new("92235.50c 233.025 2.53E-08 12/15/93\n".to_string());
        let err = Header::from_reader(&mut cursor).unwrap_err();
        assert!(matches!(err, AceError::InvalidHeader(_)));
    }
}
