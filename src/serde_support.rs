use std::borrow::Cow;

use nalgebra::{DMatrix, DVector};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AdError;
use crate::float::Float;
use crate::hess_dual::HessDual;

impl<F: Float + Serialize> Serialize for HessDual<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<F>> = self
            .hess()
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        let mut s = serializer.serialize_struct("HessDual", 5)?;
        s.serialize_field("value", &self.value())?;
        s.serialize_field("grad", self.grad().as_slice())?;
        s.serialize_field("hess", &rows)?;
        s.serialize_field("index", &self.index())?;
        s.serialize_field("name", self.name())?;
        s.end()
    }
}

impl<'de, F: Float + Deserialize<'de>> Deserialize<'de> for HessDual<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct HessDualData<F> {
            value: F,
            grad: Vec<F>,
            hess: Vec<Vec<F>>,
            #[serde(default)]
            index: Option<usize>,
            #[serde(default)]
            name: Option<String>,
        }

        let data = HessDualData::<F>::deserialize(deserializer)?;
        let n = data.grad.len();

        if data.hess.len() != n || data.hess.iter().any(|row| row.len() != n) {
            return Err(serde::de::Error::custom(format!(
                "hessian must be {n}x{n} to match a gradient of length {n}"
            )));
        }
        if let Some(index) = data.index.filter(|&i| i >= n) {
            return Err(serde::de::Error::custom(AdError::IndexOutOfRange {
                index,
                space_dim: n,
            }));
        }
        let symmetric = (0..n).all(|i| (0..i).all(|j| data.hess[i][j] == data.hess[j][i]));
        if !symmetric {
            return Err(serde::de::Error::custom("hessian must be symmetric"));
        }

        let name = data
            .name
            .map_or(Cow::Borrowed(crate::hess_dual::DEFAULT_NAME), Cow::Owned);

        if let Some(index) = data.index {
            let one_hot = data
                .grad
                .iter()
                .enumerate()
                .all(|(k, &g)| if k == index { g == F::one() } else { g == F::zero() });
            let flat = data.hess.iter().flatten().all(|&h| h == F::zero());
            if !(one_hot && flat) {
                return Err(serde::de::Error::custom(format!(
                    "leaf {index} must have a one-hot gradient and a zero hessian"
                )));
            }
            return HessDual::leaf(data.value, n, index, name).map_err(serde::de::Error::custom);
        }

        let flat: Vec<F> = data.hess.into_iter().flatten().collect();
        Ok(HessDual::from_parts(
            data.value,
            DVector::from_vec(data.grad),
            DMatrix::from_row_slice(n, n, &flat),
        )
        .with_name(name))
    }
}
