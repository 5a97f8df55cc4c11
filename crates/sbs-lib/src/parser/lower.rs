//! Lowering from the typed AST to the owned schema model.
//!
//! Only called on trees without error diagnostics, so missing parts are
//! skipped rather than reported.

use sbs_core::{Decl, Field, Module, TypeExpr, TypeRef};

use super::ast;

pub fn lower_root(root: &ast::Root) -> Module {
    let name = root
        .header()
        .and_then(|h| h.name())
        .map(|t| t.text().to_string())
        .unwrap_or_default();

    let decls = root.decls().filter_map(|decl| lower_decl(&decl)).collect();
    Module { name, decls }
}

fn lower_decl(decl: &ast::Decl) -> Option<Decl> {
    let name = decl.name()?.text().to_string();
    let params = decl
        .params()
        .map(|p| p.names().map(|t| t.text().to_string()).collect())
        .unwrap_or_default();
    let body = lower_type(&decl.body()?)?;
    Some(Decl::new(name, params, body))
}

fn lower_type(ty: &ast::Type) -> Option<TypeExpr> {
    match ty {
        ast::Type::Record(record) => Some(TypeExpr::Record {
            fields: lower_entries(record.entries())?,
        }),
        ast::Type::Choice(choice) => Some(TypeExpr::Choice {
            variants: lower_entries(choice.entries())?,
        }),
        ast::Type::Ref(r) => lower_ref(r),
    }
}

fn lower_entries(entries: impl Iterator<Item = ast::Entry>) -> Option<Vec<Field>> {
    entries
        .map(|entry| {
            let name = entry.name()?.text().to_string();
            let ty = lower_type(&entry.ty()?)?;
            Some(Field::new(name, ty))
        })
        .collect()
}

fn lower_ref(r: &ast::Ref) -> Option<TypeExpr> {
    let name = r.name()?;
    let module = r.module();
    let target = TypeRef::new(module.as_ref().map(|m| m.text()), name.text());
    let args = match r.args() {
        Some(args) => args
            .types()
            .map(|t| lower_type(&t))
            .collect::<Option<Vec<_>>>()?,
        None => Vec::new(),
    };
    Some(TypeExpr::Ref { target, args })
}
