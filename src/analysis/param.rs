use std::fmt;
use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::units::{DimVector, Quantity, QuantityError};

use super::error::AnalysisError;

/// Handle to a [`Parameter`] owned by a [`ParamSet`].
///
/// Parameters are identified by handle, never by value: two parameters with
/// the same name and dimension added separately are distinct. A handle
/// only resolves in the set that issued it (or a clone of that set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId {
    set: u64,
    index: usize,
}

impl ParamId {
    /// Position in the owning set.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

static NEXT_SET_ID: AtomicU64 = AtomicU64::new(0);

fn next_set_id() -> u64 {
    NEXT_SET_ID.fetch_add(1, Ordering::Relaxed)
}

/// A named physical quantity and its exponents over the base dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    dim: DimVector,
}

impl Parameter {
    pub fn new(name: impl Into<String>, dim: DimVector) -> Self {
        Self {
            name: name.into(),
            dim,
        }
    }

    pub fn dimensionless(name: impl Into<String>) -> Self {
        Self::new(name, DimVector::dimensionless())
    }

    pub fn of_quantity(name: impl Into<String>, quantity: Quantity) -> Self {
        Self::new(name, quantity.dim())
    }

    /// Looks the dimension up in the named-quantity table.
    pub fn from_quantity_name(
        name: impl Into<String>,
        quantity: &str,
    ) -> Result<Self, QuantityError> {
        Ok(Self::of_quantity(name, Quantity::from_name(quantity)?))
    }

    /// Explicit exponents in `[M L t T N I J]` order; missing trailing entries are zero.
    pub fn from_exponents(name: impl Into<String>, exps: &[f64]) -> Result<Self, QuantityError> {
        Ok(Self::new(name, DimVector::from_slice(exps)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dim(&self) -> &DimVector {
        &self.dim
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.dim)
    }
}

/// Ordered list of every parameter of a physical problem.
///
/// Insertion order is significant: it drives the automatic repeating-set
/// search and the order of the resulting Pi groups.
#[derive(Debug, Clone)]
pub struct ParamSet {
    id: u64,
    params: Vec<Parameter>,
}

impl Default for ParamSet {
    fn default() -> Self {
        Self {
            id: next_set_id(),
            params: Vec::new(),
        }
    }
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, index: usize) -> ParamId {
        ParamId {
            set: self.id,
            index,
        }
    }

    pub fn add(&mut self, param: Parameter) -> ParamId {
        self.params.push(param);
        self.handle(self.params.len() - 1)
    }

    pub fn get(&self, id: ParamId) -> Option<&Parameter> {
        if id.set != self.id {
            return None;
        }
        self.params.get(id.index)
    }

    pub fn contains(&self, id: ParamId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParamId> + '_ {
        (0..self.params.len()).map(|i| self.handle(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &Parameter)> + '_ {
        self.params
            .iter()
            .enumerate()
            .map(|(i, p)| (self.handle(i), p))
    }

    /// First parameter with the given name.
    pub fn find(&self, name: &str) -> Option<ParamId> {
        self.params
            .iter()
            .position(|p| p.name == name)
            .map(|i| self.handle(i))
    }

    pub fn all_dims(&self) -> Vec<DimVector> {
        self.params.iter().map(|p| p.dim).collect()
    }

    pub fn dims(&self, ids: &[ParamId]) -> Result<Vec<DimVector>, AnalysisError> {
        ids.iter()
            .map(|&id| {
                self.get(id)
                    .map(|p| p.dim)
                    .ok_or(AnalysisError::UnknownParam { id })
            })
            .collect()
    }

    pub fn check(&self, id: ParamId) -> Result<(), AnalysisError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(AnalysisError::UnknownParam { id })
        }
    }
}

impl Index<ParamId> for ParamSet {
    type Output = Parameter;

    fn index(&self, id: ParamId) -> &Parameter {
        match self.get(id) {
            Some(param) => param,
            None => panic!("parameter {} does not belong to this set", id),
        }
    }
}

impl FromIterator<Parameter> for ParamSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            id: next_set_id(),
            params: iter.into_iter().collect(),
        }
    }
}
