/// Genotype representation for the binary GA
///
/// A genotype is a fixed-length sequence of bits read as an unsigned
/// big-endian integer `v`. The phenotype is the linear image of `v` on the
/// search interval:
///
/// ```text
/// x = lower + v / (2^bits - 1) * (upper - lower)
/// ```
///
/// so the all-zero genotype maps to `lower` and the all-one genotype maps to
/// `upper`. Crossover slices and mutation flips operate directly on the
/// `Vec<bool>`, which keeps every genotype a valid candidate.
///
/// # Example
///
/// ```
/// use scalar_ga::config::SearchConfig;
/// use scalar_ga::engines::generation::genome::{decode, render_bits};
///
/// let search = SearchConfig { lower: 0.0, upper: 3.0, bits: 2 };
/// let genotype = vec![true, true];
/// assert_eq!(decode(&genotype, &search).unwrap(), 3.0);
/// assert_eq!(render_bits(&genotype), "11");
/// ```
pub type Genotype = Vec<bool>;

use crate::config::SearchConfig;
use crate::error::GaError;

/// Unsigned big-endian integer value of the bits.
pub fn to_integer(genotype: &[bool]) -> u64 {
    genotype
        .iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Map a genotype onto `[search.lower, search.upper]`.
pub fn decode(genotype: &[bool], search: &SearchConfig) -> Result<f64, GaError> {
    if genotype.len() != search.bits {
        return Err(GaError::Encoding {
            expected: search.bits,
            actual: genotype.len(),
        });
    }

    let value = to_integer(genotype);
    let max = search.max_value();
    if value == max {
        // Exact endpoint regardless of rounding in `upper - lower`
        return Ok(search.upper);
    }

    let ratio = value as f64 / max as f64;
    Ok((search.lower + ratio * (search.upper - search.lower)).min(search.upper))
}

/// Render as literal `0`/`1` characters.
pub fn render_bits(genotype: &[bool]) -> String {
    genotype.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
