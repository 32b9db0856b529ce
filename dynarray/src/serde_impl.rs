use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::DynArray;

/// Serialized as a plain sequence of the elements; spare capacity is not
/// part of the representation.
impl<T: Serialize> Serialize for DynArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for DynArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        DynArray::try_from(values).map_err(de::Error::custom)
    }
}
