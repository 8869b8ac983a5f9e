/// Lazy symbol stream over the raw bytes of a FASTA file.
///
/// The parser is deliberately permissive: header lines (`>` through the end
/// of the line) and all whitespace are skipped, multiple records concatenate
/// into one stream, and symbols come out uppercased. Exhaustion of the bytes
/// ends the stream; there is no error path.
pub struct FastaSymbols<'a> {
    bytes: &'a [u8],
    pos: usize,
    in_header: bool,
}

impl<'a> FastaSymbols<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            in_header: false,
        }
    }
}

impl Iterator for FastaSymbols<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            self.pos += 1;
            if self.in_header {
                if byte == b'\n' {
                    self.in_header = false;
                }
                continue;
            }
            match byte {
                b'>' => self.in_header = true,
                b if b.is_ascii_whitespace() => {}
                sym => return Some(sym.to_ascii_uppercase()),
            }
        }
        None
    }
}

/// Identifier of the first FASTA record: the first whitespace-delimited token
/// after a leading `>`. None for headerless input.
pub fn first_record_id(bytes: &[u8]) -> Option<String> {
    let rest = bytes.strip_prefix(b">")?;
    let line = rest.split(|&b| b == b'\n').next().unwrap_or(&[]);
    let id = line
        .split(|b| b.is_ascii_whitespace())
        .find(|token| !token.is_empty())?;
    Some(String::from_utf8_lossy(id).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(bytes: &[u8]) -> Vec<u8> {
        FastaSymbols::new(bytes).collect()
    }

    #[test]
    fn test_header_and_line_breaks_skipped() {
        assert_eq!(symbols(b">chr1 test\nACGT\nACGT\n"), b"ACGTACGT");
    }

    #[test]
    fn test_records_concatenate() {
        assert_eq!(symbols(b">one\nACGT\n>two\nTTTT\n"), b"ACGTTTTT");
    }

    #[test]
    fn test_symbols_uppercased() {
        assert_eq!(symbols(b">x\nacgtN\n"), b"ACGTN");
    }

    #[test]
    fn test_crlf_tolerated() {
        assert_eq!(symbols(b">x desc\r\nAC\r\nGT\r\n"), b"ACGT");
    }

    #[test]
    fn test_headerless_input_passes_through() {
        assert_eq!(symbols(b"ACGT ACGT"), b"ACGTACGT");
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(symbols(b"").is_empty());
        assert!(symbols(b">only a header\n").is_empty());
    }

    #[test]
    fn test_first_record_id() {
        assert_eq!(
            first_record_id(b">chr1 Homo sapiens\nACGT\n").as_deref(),
            Some("chr1")
        );
        assert_eq!(first_record_id(b">id\r\nAC\n").as_deref(), Some("id"));
        assert_eq!(first_record_id(b"ACGT\n"), None);
        assert_eq!(first_record_id(b">\nACGT\n"), None);
    }
}
