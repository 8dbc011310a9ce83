use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Location, TypeInfo, Variable};

/// Shared answer for lookups of locations that hold no variables.
static NO_VARIABLES: BTreeSet<Variable> = BTreeSet::new();

/// Read-only mapping from storage location to the set of variables that ever
/// live there.
///
/// Lookups of unknown locations return an empty set without inserting
/// anything, so `len()` always reflects exactly the locations supplied at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableMap {
    #[serde(with = "entry_list")]
    entries: BTreeMap<Location, BTreeSet<Variable>>,
}

/// Structured `Location` keys cannot be JSON object keys, so maps travel as
/// lists of `{ location, variables }` entries.
mod entry_list {
    use std::collections::{BTreeMap, BTreeSet};

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::model::{Location, Variable};

    #[derive(Serialize)]
    struct EntryRef<'a> {
        location: &'a Location,
        variables: &'a BTreeSet<Variable>,
    }

    #[derive(Deserialize)]
    struct Entry {
        location: Location,
        variables: BTreeSet<Variable>,
    }

    pub fn serialize<S: Serializer>(
        entries: &BTreeMap<Location, BTreeSet<Variable>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            entries.iter().map(|(location, variables)| EntryRef { location, variables }),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Location, BTreeSet<Variable>>, D::Error> {
        let list = Vec::<Entry>::deserialize(deserializer)?;
        let mut entries: BTreeMap<Location, BTreeSet<Variable>> = BTreeMap::new();
        for entry in list {
            entries.entry(entry.location).or_default().extend(entry.variables);
        }
        Ok(entries)
    }
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables stored at `location`; empty if the location is unknown.
    pub fn get(&self, location: &Location) -> &BTreeSet<Variable> {
        self.entries.get(location).unwrap_or(&NO_VARIABLES)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.entries.contains_key(location)
    }

    /// Number of locations supplied at construction.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Location> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Location, BTreeSet<Variable>> {
        self.entries.iter()
    }

    /// Every variable at every location, flattened.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.entries.values().flatten()
    }
}

impl From<BTreeMap<Location, BTreeSet<Variable>>> for VariableMap {
    fn from(entries: BTreeMap<Location, BTreeSet<Variable>>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(Location, Variable)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (Location, Variable)>>(iter: I) -> Self {
        let mut entries: BTreeMap<Location, BTreeSet<Variable>> = BTreeMap::new();
        for (location, variable) in iter {
            entries.entry(location).or_default().insert(variable);
        }
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a VariableMap {
    type Item = (&'a Location, &'a BTreeSet<Variable>);
    type IntoIter = btree_map::Iter<'a, Location, BTreeSet<Variable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for VariableMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (location, vars)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{location}: {{")?;
            for (j, var) in vars.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{var}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

/// One view (debug info or decompiler output) of a routine: its name, return
/// type, and the variables it declares, split into arguments and locals and
/// keyed by storage location.
///
/// Arguments and locals are independent namespaces: the same location may
/// host a parameter early on and a local later. A `Function` is never mutated
/// after construction; use [`FunctionBuilder`] to accumulate variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    name: String,
    return_type: TypeInfo,
    arguments: VariableMap,
    local_vars: VariableMap,
    /// Entry address of the routine, when the extractor knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<u64>,
}

impl Function {
    /// Build a function from already-grouped variables. Inputs are trusted as-is.
    pub fn new(
        name: impl Into<String>,
        return_type: TypeInfo,
        arguments: impl Into<VariableMap>,
        local_vars: impl Into<VariableMap>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type,
            arguments: arguments.into(),
            local_vars: local_vars.into(),
            address: None,
        }
    }

    /// Attach the routine's entry address.
    pub fn with_address(mut self, address: u64) -> Self {
        self.address = Some(address);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &TypeInfo {
        &self.return_type
    }

    pub fn arguments(&self) -> &VariableMap {
        &self.arguments
    }

    pub fn local_vars(&self) -> &VariableMap {
        &self.local_vars
    }

    pub fn address(&self) -> Option<u64> {
        self.address
    }

    /// Every storage location any argument or local ever occupies.
    ///
    /// Recomputed on each call.
    pub fn locations(&self) -> BTreeSet<Location> {
        self.arguments.keys().chain(self.local_vars.keys()).cloned().collect()
    }

    /// True if at least one argument or local carries a user-chosen name.
    ///
    /// Functions without any are filtered out of training corpora.
    pub fn has_user_names(&self) -> bool {
        self.arguments.variables().chain(self.local_vars.variables()).any(Variable::user)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.return_type, self.name)?;
        writeln!(f, "    Arguments:  {}", self.arguments)?;
        write!(f, "    Local vars: {}", self.local_vars)
    }
}

/// Mutable accumulator for a [`Function`].
///
/// Extractors usually discover variables one at a time; the builder groups
/// them per location and `build` freezes the result.
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    name: String,
    return_type: TypeInfo,
    address: Option<u64>,
    arguments: BTreeMap<Location, BTreeSet<Variable>>,
    local_vars: BTreeMap<Location, BTreeSet<Variable>>,
}

impl FunctionBuilder {
    pub fn new(name: impl Into<String>, return_type: TypeInfo) -> Self {
        Self {
            name: name.into(),
            return_type,
            address: None,
            arguments: BTreeMap::new(),
            local_vars: BTreeMap::new(),
        }
    }

    pub fn address(mut self, address: u64) -> Self {
        self.address = Some(address);
        self
    }

    pub fn argument(mut self, location: Location, variable: Variable) -> Self {
        self.arguments.entry(location).or_default().insert(variable);
        self
    }

    pub fn local(mut self, location: Location, variable: Variable) -> Self {
        self.local_vars.entry(location).or_default().insert(variable);
        self
    }

    pub fn build(self) -> Function {
        Function {
            name: self.name,
            return_type: self.return_type,
            arguments: VariableMap::from(self.arguments),
            local_vars: VariableMap::from(self.local_vars),
            address: self.address,
        }
    }
}
