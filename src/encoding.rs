// src/encoding.rs
// The stock dataset files are exported in ISO-8859-1, not UTF-8.
// Every Latin-1 byte maps to the Unicode code point of the same value,
// so the decode is a direct byte → char widening. Output is always UTF-8.

/// Decode an ISO-8859-1 (Latin-1) byte buffer into a String.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Decode dataset bytes: UTF-8 when valid, Latin-1 otherwise.
/// Re-exported CSVs are often re-saved as UTF-8; accept both so a
/// round-tripped download loads back unchanged.
pub fn decode_dataset(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => decode_latin1(bytes),
    }
}
