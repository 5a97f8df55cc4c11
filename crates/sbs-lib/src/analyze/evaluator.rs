//! Evaluator: resolves references and instantiates generic declarations.
//!
//! Two passes:
//! 1. Collect every module's declarations, rejecting duplicates
//! 2. Evaluate each non-parametric declaration into the graph; parametric
//!    ones are only evaluated when applied, once per distinct argument list

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use sbs_core::{Builtin, Decl, Entry, Field, Module, Type, TypeExpr, TypeGraph, TypeRef};

use super::error::SchemaError;

/// Default bound on nested generic instantiations.
pub const DEFAULT_INSTANTIATION_FUEL: u32 = 256;

/// Default bound on the type nodes in one instantiation's arguments.
pub const DEFAULT_INSTANTIATION_SIZE: u32 = 4096;

/// Evaluator limits. `None` disables a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalFuel {
    /// Nesting depth of generic applications.
    pub instantiation: Option<u32>,
    /// Type nodes across the arguments of a single application. Nesting
    /// alone cannot catch arguments that grow geometrically per level.
    pub instantiation_size: Option<u32>,
}

impl Default for EvalFuel {
    fn default() -> Self {
        Self {
            instantiation: Some(DEFAULT_INSTANTIATION_FUEL),
            instantiation_size: Some(DEFAULT_INSTANTIATION_SIZE),
        }
    }
}

type SymbolTable<'m> = IndexMap<&'m str, IndexMap<&'m str, &'m Decl>>;

/// Builds the type graph for `modules` with default fuel.
pub fn evaluate(modules: &[Module]) -> Result<TypeGraph, SchemaError> {
    evaluate_with_fuel(modules, EvalFuel::default())
}

pub fn evaluate_with_fuel(modules: &[Module], fuel: EvalFuel) -> Result<TypeGraph, SchemaError> {
    let symbols = collect_symbols(modules)?;

    let mut evaluator = Evaluator {
        symbols: &symbols,
        graph: TypeGraph::new(),
        instances: HashMap::new(),
        fuel,
    };

    for (module, decls) in &symbols {
        for decl in decls.values().filter(|d| !d.is_parametric()) {
            let scope = Scope {
                module,
                decl: &decl.name,
                env: HashMap::new(),
            };
            let ty = evaluator.eval(&scope, &decl.body, 0)?;
            evaluator.graph.insert(TypeRef::qualified(module, &decl.name), ty);
        }
    }

    check_alias_cycles(&evaluator.graph)?;

    tracing::debug!(
        modules = symbols.len(),
        types = evaluator.graph.len(),
        instances = evaluator.instances.len(),
        "evaluated schema"
    );

    Ok(evaluator.graph)
}

fn collect_symbols(modules: &[Module]) -> Result<SymbolTable<'_>, SchemaError> {
    let mut symbols = SymbolTable::new();

    for module in modules {
        if symbols.contains_key(module.name.as_str()) {
            return Err(SchemaError::DuplicateModule(module.name.clone()));
        }

        let mut decls = IndexMap::new();
        for decl in &module.decls {
            if decls.insert(decl.name.as_str(), decl).is_some() {
                return Err(SchemaError::DuplicateDefinition {
                    module: module.name.clone(),
                    name: decl.name.clone(),
                });
            }
        }
        symbols.insert(module.name.as_str(), decls);
    }

    Ok(symbols)
}

/// Where an expression is evaluated: its module, the declaration it belongs
/// to, and the bound formal parameters.
struct Scope<'a> {
    module: &'a str,
    decl: &'a str,
    env: HashMap<&'a str, Type>,
}

/// What a reference names after lookup.
enum Target<'m> {
    Param(Type),
    Builtin(Builtin),
    Decl { module: &'m str, decl: &'m Decl },
}

struct Evaluator<'m> {
    symbols: &'m SymbolTable<'m>,
    graph: TypeGraph,
    /// (declaration, arguments) to the synthesized entry holding its body.
    instances: HashMap<(TypeRef, Vec<Type>), TypeRef>,
    fuel: EvalFuel,
}

impl<'m> Evaluator<'m> {
    fn eval(&mut self, scope: &Scope<'_>, expr: &TypeExpr, depth: u32) -> Result<Type, SchemaError> {
        Ok(match expr {
            TypeExpr::None => Type::None,
            TypeExpr::Boolean => Type::Boolean,
            TypeExpr::Integer => Type::Integer,
            TypeExpr::Float => Type::Float,
            TypeExpr::String => Type::String,
            TypeExpr::Bytes => Type::Bytes,
            TypeExpr::Array { element } => Type::array(self.eval(scope, element, depth)?),
            TypeExpr::Record { fields } => {
                if fields.is_empty() {
                    return Err(SchemaError::EmptyRecord {
                        module: scope.module.to_string(),
                        decl: scope.decl.to_string(),
                    });
                }
                Type::Record(self.eval_entries(scope, fields, depth)?)
            }
            TypeExpr::Choice { variants } => {
                if variants.is_empty() {
                    return Err(SchemaError::EmptyChoice {
                        module: scope.module.to_string(),
                        decl: scope.decl.to_string(),
                    });
                }
                Type::Choice(self.eval_entries(scope, variants, depth)?)
            }
            TypeExpr::Ref { target, args } => self.eval_ref(scope, target, args, depth)?,
        })
    }

    fn eval_entries(
        &mut self,
        scope: &Scope<'_>,
        fields: &[Field],
        depth: u32,
    ) -> Result<Vec<Entry>, SchemaError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(fields.len());
        for field in fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateEntry {
                    module: scope.module.to_string(),
                    decl: scope.decl.to_string(),
                    entry: field.name.clone(),
                });
            }
            entries.push(Entry::new(&field.name, self.eval(scope, &field.ty, depth)?));
        }
        Ok(entries)
    }

    fn eval_ref(
        &mut self,
        scope: &Scope<'_>,
        target: &TypeRef,
        args: &[TypeExpr],
        depth: u32,
    ) -> Result<Type, SchemaError> {
        match self.lookup(scope, target)? {
            Target::Param(ty) => {
                if !args.is_empty() {
                    return Err(SchemaError::ParameterApplied {
                        module: scope.module.to_string(),
                        decl: scope.decl.to_string(),
                        param: target.name.clone(),
                    });
                }
                Ok(ty)
            }
            Target::Builtin(builtin) => {
                check_arity(target, builtin.arity(), args.len())?;
                if let Some(primitive) = builtin.primitive() {
                    return Ok(primitive);
                }
                let arg = self.eval(scope, &args[0], depth)?;
                Ok(match builtin {
                    Builtin::Optional => Type::optional(arg),
                    _ => Type::array(arg),
                })
            }
            Target::Decl { module, decl } => {
                check_arity(target, decl.params.len(), args.len())?;
                if !decl.is_parametric() {
                    return Ok(Type::Ref(TypeRef::qualified(module, &decl.name)));
                }
                let args = args
                    .iter()
                    .map(|arg| self.eval(scope, arg, depth))
                    .collect::<Result<Vec<_>, _>>()?;
                self.instantiate(module, decl, args, depth)
            }
        }
    }

    /// Parameters shadow declarations, which shadow builtins.
    fn lookup(&self, scope: &Scope<'_>, target: &TypeRef) -> Result<Target<'m>, SchemaError> {
        let Some(module) = target.module() else {
            if let Some(ty) = scope.env.get(target.name.as_str()) {
                return Ok(Target::Param(ty.clone()));
            }
            if let Some((module, decl)) = self.find_decl(scope.module, &target.name) {
                return Ok(Target::Decl { module, decl });
            }
            return Builtin::from_name(&target.name)
                .map(Target::Builtin)
                .ok_or_else(|| SchemaError::UndefinedReference {
                    module: scope.module.to_string(),
                    reference: target.clone(),
                });
        };

        if !self.symbols.contains_key(module) {
            return Err(SchemaError::UnknownModule {
                module: scope.module.to_string(),
                target: module.to_string(),
            });
        }
        self.find_decl(module, &target.name)
            .map(|(module, decl)| Target::Decl { module, decl })
            .ok_or_else(|| SchemaError::UndefinedReference {
                module: scope.module.to_string(),
                reference: target.clone(),
            })
    }

    fn find_decl(&self, module: &str, name: &str) -> Option<(&'m str, &'m Decl)> {
        let (module, decls) = self.symbols.get_key_value(module)?;
        decls.get(name).map(|decl| (*module, *decl))
    }

    fn instantiate(
        &mut self,
        module: &'m str,
        decl: &'m Decl,
        args: Vec<Type>,
        depth: u32,
    ) -> Result<Type, SchemaError> {
        let origin = TypeRef::qualified(module, &decl.name);
        let key = (origin, args);
        if let Some(existing) = self.instances.get(&key) {
            return Ok(Type::Ref(existing.clone()));
        }
        let (origin, args) = key;

        if let Some(limit) = self.fuel.instantiation
            && depth >= limit
        {
            return Err(SchemaError::InstantiationLimitExceeded {
                reference: origin,
                limit,
            });
        }

        if let Some(limit) = self.fuel.instantiation_size {
            let size: usize = args.iter().map(type_size).sum();
            if size > limit as usize {
                return Err(SchemaError::InstantiationTooLarge {
                    reference: origin,
                    size,
                    limit,
                });
            }
        }

        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        let instance = TypeRef::qualified(module, &format!("{}({})", decl.name, rendered.join(", ")));

        // Registered before the body so recursive uses resolve to this entry.
        self.instances
            .insert((origin, args.clone()), instance.clone());

        let scope = Scope {
            module,
            decl: &decl.name,
            env: decl.params.iter().map(String::as_str).zip(args).collect(),
        };
        let body = self.eval(&scope, &decl.body, depth + 1)?;

        tracing::trace!(%instance, body = %body, "instantiated");
        self.graph.insert(instance.clone(), body);
        Ok(Type::Ref(instance))
    }
}

/// Counts type nodes; references count as one without being followed.
fn type_size(ty: &Type) -> usize {
    match ty {
        Type::Array(element) => 1 + type_size(element),
        Type::Record(entries) | Type::Choice(entries) => {
            1 + entries.iter().map(|entry| type_size(&entry.ty)).sum::<usize>()
        }
        _ => 1,
    }
}

fn check_arity(target: &TypeRef, expected: usize, found: usize) -> Result<(), SchemaError> {
    if expected != found {
        return Err(SchemaError::ArityMismatch {
            reference: target.clone(),
            expected,
            found,
        });
    }
    Ok(())
}

/// A chain of references that never reaches a shape would make the codec spin.
fn check_alias_cycles(graph: &TypeGraph) -> Result<(), SchemaError> {
    for (key, ty) in graph.iter() {
        let mut seen = HashSet::from([key]);
        let mut current = ty;
        while let Type::Ref(next) = current {
            if !seen.insert(next) {
                return Err(SchemaError::AliasCycle(key.clone()));
            }
            match graph.get(next) {
                Some(ty) => current = ty,
                None => break,
            }
        }
    }
    Ok(())
}
