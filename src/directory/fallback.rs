//! Built-in fallback nationality dataset
//!
//! Served by the cache manager when the remote directory is unreachable, so
//! the directory never appears unavailable to callers. The entries are kept
//! pre-sorted by demonym under the same collation used for fetched data.

use super::NationalityRecord;

/// The fallback entries as (code, name, demonym) tuples, sorted by demonym
const FALLBACK_ENTRIES: [(&str, &str, &str); 20] = [
    ("DZ", "Algérie", "Algérienne"),
    ("DE", "Allemagne", "Allemande"),
    ("US", "États-Unis", "Américaine"),
    ("AU", "Australie", "Australienne"),
    ("BR", "Brésil", "Brésilienne"),
    ("GB", "Royaume-Uni", "Britannique"),
    ("CA", "Canada", "Canadienne"),
    ("CN", "Chine", "Chinoise"),
    ("EG", "Égypte", "Égyptienne"),
    ("ES", "Espagne", "Espagnole"),
    ("FR", "France", "Française"),
    ("IN", "Inde", "Indienne"),
    ("IT", "Italie", "Italienne"),
    ("JP", "Japon", "Japonaise"),
    ("MA", "Maroc", "Marocaine"),
    ("MX", "Mexique", "Mexicaine"),
    ("RU", "Russie", "Russe"),
    ("SA", "Arabie Saoudite", "Saoudienne"),
    ("ZA", "Afrique du Sud", "Sud-africaine"),
    ("TN", "Tunisie", "Tunisienne"),
];

/// Returns the fallback dataset as owned records
pub fn fallback_nationalities() -> Vec<NationalityRecord> {
    FALLBACK_ENTRIES
        .iter()
        .map(|(code, name, demonym)| NationalityRecord::new(*code, *name, *demonym))
        .collect()
}
