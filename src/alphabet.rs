//! Character classes used by the FASTA validator.
//!
//! This module provides:
//! - The IUPAC nucleotide ambiguity alphabet plus the gap symbol
//! - Lookup for "plain" nucleotide letters used by the quick sniff
//!
//! Lookups go through 256-entry tables so the per-character check is a
//! single index.

/// Gap symbol accepted inside sequence lines.
pub const GAP: u8 = b'-';

/// IUPAC nucleotide letters (upper case) accepted in sequence lines.
pub const IUPAC_NUCLEOTIDES: &[u8] = b"ACGTUWSMKRYBDHVN";

/// Plain nucleotide letters (upper case) looked for by the sniff.
pub const NUCLEOTIDES: &[u8] = b"ACGTU";

const fn build_table(letters: &[u8], extra: Option<u8>) -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < letters.len() {
        let upper = letters[i];
        table[upper as usize] = true;
        table[upper.to_ascii_lowercase() as usize] = true;
        i += 1;
    }
    if let Some(c) = extra {
        table[c as usize] = true;
    }
    table
}

static SEQUENCE_TABLE: [bool; 256] = build_table(IUPAC_NUCLEOTIDES, Some(GAP));
static NUCLEOTIDE_TABLE: [bool; 256] = build_table(NUCLEOTIDES, None);

/// Returns true if `c` may appear in a sequence line.
#[inline]
pub fn is_sequence_char(c: char) -> bool {
    c.is_ascii() && SEQUENCE_TABLE[c as usize]
}

/// Returns true if `c` is one of A, C, G, T, U in either case.
#[inline]
pub fn is_nucleotide(c: char) -> bool {
    c.is_ascii() && NUCLEOTIDE_TABLE[c as usize]
}

/// Collects every character of `line` outside the sequence alphabet,
/// in order of occurrence, duplicates included.
pub fn invalid_chars(line: &str) -> Vec<char> {
    line.chars().filter(|&c| !is_sequence_char(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iupac_letters_both_cases() {
        for &b in IUPAC_NUCLEOTIDES {
            assert!(is_sequence_char(b as char));
            assert!(is_sequence_char(b.to_ascii_lowercase() as char));
        }
        assert!(is_sequence_char('-'));
    }

    #[test]
    fn test_rejected_characters() {
        for c in ['X', 'E', 'F', 'I', 'L', 'P', 'Q', '*', '.', ' ', '1', 'é'] {
            assert!(!is_sequence_char(c), "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_nucleotide_subset() {
        assert!(is_nucleotide('a'));
        assert!(is_nucleotide('U'));
        assert!(!is_nucleotide('N'));
        assert!(!is_nucleotide('-'));
    }

    #[test]
    fn test_invalid_chars_order_and_duplicates() {
        assert_eq!(invalid_chars("AXCXZ"), vec!['X', 'X', 'Z']);
        assert!(invalid_chars("acgt-NNN").is_empty());
    }
}
