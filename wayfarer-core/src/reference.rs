use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Flight,
    Hotel,
    CarRental,
}

impl ReferenceKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ReferenceKind::Flight => "FL",
            ReferenceKind::Hotel => "HT",
            ReferenceKind::CarRental => "CR",
        }
    }
}

/// Booking reference such as `FL20240215103000-7K3Q9X`.
///
/// The timestamp keeps references sortable and human readable; the random
/// suffix keeps two bookings made in the same second apart.
pub fn generate(kind: ReferenceKind, now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{}{}-{}", kind.prefix(), now.format("%Y%m%d%H%M%S"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_reference_format() {
        let now = Utc.with_ymd_and_hms(2024, 2, 15, 10, 30, 0).unwrap();
        let reference = generate(ReferenceKind::Flight, now);
        assert!(reference.starts_with("FL20240215103000-"));
        assert_eq!(reference.len(), "FL20240215103000-".len() + SUFFIX_LEN);
    }

    #[test]
    fn test_same_second_references_differ() {
        let now = Utc.with_ymd_and_hms(2024, 2, 15, 10, 30, 0).unwrap();
        let refs: HashSet<String> = (0..200).map(|_| generate(ReferenceKind::Hotel, now)).collect();
        assert_eq!(refs.len(), 200);
    }
}
