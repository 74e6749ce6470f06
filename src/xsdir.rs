//! Regenerates a single xsdir directory-entry line for a decoded table.
//! Parsing an existing xsdir file is out of scope (§1); this only
//! produces the line an xsdir file would carry for this table.

use crate::model::table::AceTable;

#[derive(Debug, Clone)]
pub struct XsdirCustomization {
    pub zaid: String,
    pub atomic_weight_ratio: f64,
    pub filename: String,
    pub access: String,
    pub file_type: i64,
    pub start_line: u64,
    pub record_length: i64,
    pub num_entries: i64,
    pub temperature: f64,
}

impl XsdirCustomization {
    pub fn from_table(table: &AceTable, filename: impl Into<String>, start_line: u64) -> Self {
        XsdirCustomization {
            zaid: table.header.zaid.clone(),
            atomic_weight_ratio: table.header.atomic_weight_ratio,
            filename: filename.into(),
            access: "0".to_string(),
            file_type: 1,
            start_line,
            record_length: 0,
            num_entries: 0,
            temperature: table.header.temperature,
        }
    }
}

const WRAP_COLUMN: usize = 75;

/// Emits the one-line (or, once it exceeds `WRAP_COLUMN`, `" +"`-
/// continued multi-line) xsdir record for `table`.
pub fn emit_entry(table: &AceTable, custom: &XsdirCustomization) -> String {
    let ptable = if table.header.jxs(23) > 0 { "ptable" } else { "" };
    let fields = [
        custom.zaid.clone(),
        format!("{:.6}", custom.atomic_weight_ratio),
        custom.filename.clone(),
        custom.access.clone(),
        custom.file_type.to_string(),
        custom.start_line.to_string(),
        table.header.nxs(1).to_string(),
        custom.record_length.to_string(),
        custom.num_entries.to_string(),
        format!("{:.6E}", custom.temperature),
        ptable.to_string(),
    ];
    let line = fields
        .iter()
        .filter(|f| !f.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    wrap(&line)
}

fn wrap(line: &str) -> String {
    let words: Vec<&str> = line.split_whitespace().collect();
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        let candidate_len = if current.is_empty() {
            word.len()
        } else {
            current.len() + 1 + word.len()
        };
        if candidate_len > WRAP_COLUMN && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join(" +\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{Header, HeaderStyle};
    use crate::model::table::{CePayload, Payload};

    fn table() -> AceTable {
        let mut nxs = [0i64; 17];
        nxs[1] = 12345;
        let jxs = [0i64; 33];
        AceTable {
            header: Header {
                style: HeaderStyle::New,
                zaid: "92235.50c".to_string(),
                za: Some(92235),
                z: Some(92),
                a: Some(235),
                metastable: false,
                suffix: "50c".to_string(),
                atomic_weight_ratio: 233.025,
                temperature: 2.53e-8,
                processing_date: None,
                comment: String::new(),
                material_id: String::new(),
                nxs,
                jxs,
            },
            payload: Payload::ContinuousEnergy(CePayload::default()),
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn emits_single_line_for_short_entries() {
        let t = table();
        let custom = XsdirCustomization::from_table(&t, "u235.ace", 1);
        let entry = emit_entry(&t, &custom);
        assert!(entry.contains("92235.50c"));
        assert!(entry.contains("12345"));
        assert!(!entry.contains('\n'));
    }

    #[test]
    fn wraps_long_lines_with_continuation() {
        let long = "a".repeat(40);
        let line = format!("{long} {long} {long}");
        let wrapped = wrap(&line);
        assert!(wrapped.contains(" +\n"));
    }
}
