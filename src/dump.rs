use anyhow::Result;
use std::io::Write;

use crate::match_format::MatchSet;

/// Write a match set as a tab-separated position listing with `#`-prefixed
/// header lines, one `pos_a<TAB>pos_b` line per match in emission order.
pub fn write_matches<W: Write>(out: &mut W, set: &MatchSet) -> Result<()> {
    writeln!(out, "# seqdot exact submatches")?;
    writeln!(out, "# k={} m={}", set.k, set.m)?;
    writeln!(
        out,
        "# A: {} ({} symbols, blake3 {})",
        set.seq_a.name,
        set.seq_a.symbols,
        blake3::Hash::from(set.seq_a.blake3_digest)
    )?;
    writeln!(
        out,
        "# B: {} ({} symbols, blake3 {})",
        set.seq_b.name,
        set.seq_b.symbols,
        blake3::Hash::from(set.seq_b.blake3_digest)
    )?;
    writeln!(out, "# matches: {}", set.matches.len())?;
    for m in &set.matches {
        writeln!(out, "{}\t{}", m.pos_a, m.pos_b)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_format::{Match, SequenceInfo, FORMAT_VERSION};

    #[test]
    fn test_listing_layout() {
        let set = MatchSet {
            version: FORMAT_VERSION,
            k: 4,
            m: 4,
            seq_a: SequenceInfo {
                name: "refA".into(),
                symbols: 12,
                blake3_digest: [0; 32],
            },
            seq_b: SequenceInfo {
                name: "qryB".into(),
                symbols: 8,
                blake3_digest: [0; 32],
            },
            matches: vec![
                Match { pos_a: 4, pos_b: 0 },
                Match { pos_a: 8, pos_b: 4 },
            ],
        };

        let mut buf = Vec::new();
        write_matches(&mut buf, &set).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "# k=4 m=4");
        assert!(lines[2].starts_with("# A: refA (12 symbols, blake3 "));
        assert!(lines[3].starts_with("# B: qryB (8 symbols, blake3 "));
        assert_eq!(lines[4], "# matches: 2");
        assert_eq!(&lines[5..], &["4\t0", "8\t4"]);
    }

    #[test]
    fn test_empty_set_has_headers_only() {
        let set = MatchSet {
            version: FORMAT_VERSION,
            k: 2,
            m: 2,
            seq_a: SequenceInfo {
                name: "a".into(),
                symbols: 4,
                blake3_digest: [0; 32],
            },
            seq_b: SequenceInfo {
                name: "b".into(),
                symbols: 4,
                blake3_digest: [0; 32],
            },
            matches: vec![],
        };

        let mut buf = Vec::new();
        write_matches(&mut buf, &set).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.lines().all(|line| line.starts_with('#')));
        assert!(text.contains("# matches: 0"));
    }
}
