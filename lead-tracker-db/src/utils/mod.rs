pub mod password;
pub mod timestamp;

pub use password::*;
pub use timestamp::*;

use heapless::String as HeaplessString;
use std::str::FromStr;

/// Worst-case UTF-8 width. Bounded string capacities are declared in bytes as
/// `max_chars * BYTES_PER_CHAR`.
pub const BYTES_PER_CHAR: usize = 4;

/// Converts a `&str` into a bounded string, naming `field` when it does not fit.
///
/// The limit is `N / BYTES_PER_CHAR` characters, so a `HeaplessString<400>` takes any
/// 100 characters whatever their encoded width.
pub fn to_heapless<const N: usize>(value: &str, field: &str) -> Result<HeaplessString<N>, String> {
    let max_chars = N / BYTES_PER_CHAR;
    let too_long = || format!("Value for '{field}' is too long (max {max_chars} chars)");
    if value.chars().count() > max_chars {
        return Err(too_long());
    }
    HeaplessString::from_str(value).map_err(|_| too_long())
}

/// Optional variant of [`to_heapless`].
pub fn to_optional_heapless<const N: usize>(
    value: Option<&str>,
    field: &str,
) -> Result<Option<HeaplessString<N>>, String> {
    value.map(|v| to_heapless(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_heapless_bounds() {
        let ok: HeaplessString<20> = to_heapless("abcde", "code").unwrap();
        assert_eq!(ok.as_str(), "abcde");

        let err = to_heapless::<20>("abcdef", "code").unwrap_err();
        assert!(err.contains("'code'"));
        assert!(err.contains("max 5 chars"));
    }

    #[test]
    fn test_to_heapless_counts_characters() {
        let accented: HeaplessString<20> = to_heapless("ñandú", "code").unwrap();
        assert_eq!(accented.as_str(), "ñandú");

        let wide: HeaplessString<20> = to_heapless("😀😀😀😀😀", "code").unwrap();
        assert_eq!(wide.chars().count(), 5);

        assert!(to_heapless::<20>("ñandúes", "code").is_err());
    }

    #[test]
    fn test_to_optional_heapless() {
        assert_eq!(to_optional_heapless::<20>(None, "code").unwrap(), None);
        assert!(to_optional_heapless::<8>(Some("abc"), "code").is_err());
    }
}
