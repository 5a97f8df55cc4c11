//! The evaluated type graph.
//!
//! Keys are stable [`TypeRef`] identities; values are resolved [`Type`]s whose
//! nested references point back into the same map. The graph may be cyclic,
//! which is how recursive data types are expressed. It is built once and is
//! read-only afterwards, so it can be shared across threads freely.

use indexmap::IndexMap;

use crate::builtin::Builtin;
use crate::schema::TypeRef;
use crate::types::Type;

/// Dense handle to a graph entry, assigned in insertion order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGraph {
    entries: IndexMap<TypeRef, Type>,
}

impl Default for TypeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeGraph {
    /// Creates a graph seeded with the zero-arity builtins under the null module.
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        for builtin in Builtin::ALL {
            if let Some(shape) = builtin.primitive() {
                entries.insert(TypeRef::builtin(builtin.name()), shape);
            }
        }
        Self { entries }
    }

    /// Inserts or replaces an entry, returning its id.
    pub fn insert(&mut self, key: TypeRef, ty: Type) -> TypeId {
        let (index, _) = self.entries.insert_full(key, ty);
        TypeId(index as u32)
    }

    pub fn get(&self, key: &TypeRef) -> Option<&Type> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &TypeRef) -> bool {
        self.entries.contains_key(key)
    }

    pub fn id(&self, key: &TypeRef) -> Option<TypeId> {
        self.entries.get_index_of(key).map(|i| TypeId(i as u32))
    }

    pub fn entry(&self, id: TypeId) -> Option<(&TypeRef, &Type)> {
        self.entries.get_index(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeRef, &Type)> {
        self.entries.iter()
    }

    /// Chases references until a structural shape is reached.
    ///
    /// Returns the last `Ref` when its target is absent. The walk is bounded by
    /// the graph size, so a hand-built alias cycle also ends on a `Ref`.
    pub fn resolve<'a>(&'a self, ty: &'a Type) -> &'a Type {
        let mut current = ty;
        for _ in 0..=self.entries.len() {
            let Type::Ref(key) = current else {
                return current;
            };
            match self.entries.get(key) {
                Some(next) => current = next,
                None => return current,
            }
        }
        current
    }
}
