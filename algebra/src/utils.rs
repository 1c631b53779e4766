use crate::prelude::*;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

/// Return the base-2 logarithm of `n` if it is a non-zero power of two.
pub fn log2_exact(n: usize) -> Option<u32> {
    if n.is_power_of_two() {
        Some(n.trailing_zeros())
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use ark_std::vec;

    #[test]
    fn b64_round_trip() {
        let bytes = vec![0u8, 1, 2, 250, 251, 252, 253, 254, 255];
        let encoded = super::b64enc(&bytes);
        assert_eq!(super::b64dec(&encoded).unwrap(), bytes);
        assert!(super::b64dec("not base64!").is_err());
    }

    #[test]
    fn log2_exact() {
        assert_eq!(super::log2_exact(1), Some(0));
        assert_eq!(super::log2_exact(2), Some(1));
        assert_eq!(super::log2_exact(1024), Some(10));
        assert_eq!(super::log2_exact(0), None);
        assert_eq!(super::log2_exact(12), None);
    }
}
