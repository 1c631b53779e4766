use crate::bn254::{BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;

/// Helper trait to serialize Prism objects that implement from/to bytes.
pub trait PrismFromToBytes: Sized {
    /// Convert to bytes.
    fn prism_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn prism_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Serde helpers shared by the types implementing `PrismFromToBytes`.
pub mod prism_obj_serde {
    use ark_std::{fmt, vec::Vec};
    use serde::de::{SeqAccess, Visitor};

    /// Collects the serialized bytes, either raw or as a base64 string.
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a valid PrismFromTo Object")
        }

        fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = Vec::new();
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
            Ok(v.to_vec())
        }

        fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
        where
            E: serde::de::Error,
        {
            crate::utils::b64dec(v).map_err(serde::de::Error::custom)
        }
    }
}

/// Implement `serde::Serialize` and `serde::Deserialize` for a type that implements
/// `PrismFromToBytes`: base64 strings for human readable formats, raw bytes otherwise.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes = $crate::serialization::PrismFromToBytes::prism_to_bytes(self);
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&bytes))
                } else {
                    serializer.serialize_bytes(&bytes)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer
                        .deserialize_str($crate::serialization::prism_obj_serde::BytesVisitor)?
                } else {
                    deserializer
                        .deserialize_bytes($crate::serialization::prism_obj_serde::BytesVisitor)?
                };
                <$t as $crate::serialization::PrismFromToBytes>::prism_from_bytes(
                    bytes.as_slice(),
                )
                .map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl PrismFromToBytes for $t {
            fn prism_to_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn prism_from_bytes(bytes: &[u8]) -> Result<$t> {
                $t::from_bytes(bytes).map_err(|_| AlgebraError::DeserializationError)
            }
        }
    };
}

to_from_bytes_scalar!(BN254Scalar);

serialize_deserialize!(BN254Scalar);

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl PrismFromToBytes for $g {
            fn prism_to_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn prism_from_bytes(bytes: &[u8]) -> Result<$g> {
                $g::from_compressed_bytes(bytes).map_err(|_| AlgebraError::SerializationError)
            }
        }
    };
}

to_from_bytes_group!(BN254G1);
to_from_bytes_group!(BN254G2);
to_from_bytes_group!(BN254Gt);

serialize_deserialize!(BN254G1);
serialize_deserialize!(BN254G2);
serialize_deserialize!(BN254Gt);

#[cfg(test)]
mod test {
    use crate::bn254::{BN254Scalar, BN254G1};
    use crate::prelude::*;

    #[test]
    fn scalar_serde_json_round_trip() {
        let mut prng = test_rng();
        let s = BN254Scalar::random(&mut prng);
        let json = serde_json::to_string(&s).unwrap();
        // human readable encodings carry base64 text
        assert!(json.starts_with('"'));
        let back: BN254Scalar = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn point_bincode_round_trip() {
        let mut prng = test_rng();
        let p = BN254G1::random(&mut prng);
        let bytes = bincode::serialize(&p).unwrap();
        let back: BN254G1 = bincode::deserialize(&bytes).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn rejects_garbage() {
        let res: core::result::Result<BN254G1, _> = serde_json::from_str("\"AAAA\"");
        assert!(res.is_err());
    }
}
