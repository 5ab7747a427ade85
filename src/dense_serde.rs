use serde::de::{self, Deserializer};
use serde::{ser::SerializeSeq, Deserialize, Serialize};

use crate::{dense::DenseMatrix, dims::HasDims, element::Element};

struct DataVec<'a, T: Element>(&'a [T]);

impl<'a, T: Element + Serialize> Serialize for DataVec<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for el in self.0.iter() {
            seq.serialize_element(el)?;
        }
        seq.end()
    }
}

impl<T: Element + Serialize> Serialize for DenseMatrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows()))?;
        for i in 0..self.rows() {
            seq.serialize_element(&DataVec(self.row(i)))?;
        }
        seq.end()
    }
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for DenseMatrix<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        let cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(de::Error::custom(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }
        Ok(DenseMatrix::from_vec(&rows))
    }
}
