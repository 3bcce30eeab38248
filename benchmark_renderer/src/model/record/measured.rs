//!
//! The set of metrics reported by a benchmark line.
//!

bitflags::bitflags! {
    ///
    /// The set of metrics reported by a benchmark line.
    ///
    /// Serialized as the raw bits, so values produced elsewhere with
    /// unknown bits survive a serialization round trip.
    ///
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Measured: u32 {
        /// Time per operation, `ns/op`.
        const NS_PER_OP = 1 << 0;
        /// Bytes allocated per operation, `B/op`.
        const ALLOCED_BYTES_PER_OP = 1 << 1;
        /// Allocations per operation, `allocs/op`.
        const ALLOCS_PER_OP = 1 << 2;
        /// Throughput, `MB/s`.
        const MB_PER_S = 1 << 3;
    }
}

impl serde::Serialize for Measured {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> serde::Deserialize<'de> for Measured {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
