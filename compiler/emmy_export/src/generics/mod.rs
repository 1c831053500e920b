//! Generic Instantiation Normalization
//!
//! A type model extracted from a compiled program can contain many closed
//! instantiations of one generic definition (`Cache<int>`, `Cache<string>`).
//! The annotation output wants one declaration per definition, so the list is
//! normalized once before the export pass begins.

use emmy_fmt::names::{generic_parts, split_generic_args};
use emmy_model::{Method, TypeDeclaration};
use rustc_hash::FxHashSet;

/// Replaces the declaration list before export.
///
/// Implementations must be idempotent: normalizing an already normalized
/// list returns it unchanged.
pub trait GenericNormalizer {
    fn normalize(&self, declarations: Vec<TypeDeclaration>) -> Vec<TypeDeclaration>;
}

/// Leaves the list untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct Passthrough;

impl GenericNormalizer for Passthrough {
    fn normalize(&self, declarations: Vec<TypeDeclaration>) -> Vec<TypeDeclaration> {
        declarations
    }
}

/// Collapses closed instantiations into one open declaration.
///
/// A declaration whose name carries an argument list (`Foo<int>`) is a closed
/// instantiation. It is dropped when the same namespace already declares
/// `Foo` directly; otherwise the first instantiation seen is kept, renamed to
/// `Foo`, and given placeholder generic parameters. Its member types are
/// rewritten so each concrete argument reads as its placeholder again
/// (`Cache<int>` with a field of `List<int>` becomes `Cache<T>` with
/// `List<T>`). Later instantiations of the same definition are dropped.
/// Relative order is preserved.
#[derive(Copy, Clone, Debug, Default)]
pub struct MergeInstantiations;

impl GenericNormalizer for MergeInstantiations {
    fn normalize(&self, declarations: Vec<TypeDeclaration>) -> Vec<TypeDeclaration> {
        let open: FxHashSet<(String, String)> = declarations
            .iter()
            .filter(|decl| !decl.name().contains('<'))
            .map(|decl| (decl.namespace().to_owned(), decl.name().to_owned()))
            .collect();

        let before = declarations.len();
        let mut merged: FxHashSet<(String, String)> = FxHashSet::default();
        let mut result = Vec::with_capacity(before);

        for mut decl in declarations {
            let (base, args) = match generic_parts(decl.name()) {
                Some((outer, args)) => (
                    outer.trim().to_owned(),
                    split_generic_args(args)
                        .into_iter()
                        .map(str::to_owned)
                        .collect::<Vec<_>>(),
                ),
                None => {
                    result.push(decl);
                    continue;
                }
            };

            let key = (decl.namespace().to_owned(), base);
            if open.contains(&key) || merged.contains(&key) {
                continue;
            }

            let placeholders = placeholder_parameters(args.len());
            let bindings: Vec<(String, String)> =
                args.into_iter().zip(placeholders.iter().cloned()).collect();
            rebind_members(&mut decl, &bindings);

            let info = decl.info_mut();
            info.name.clone_from(&key.1);
            info.generic_parameters = placeholders;
            merged.insert(key);
            result.push(decl);
        }

        if result.len() != before {
            tracing::debug!(
                before,
                after = result.len(),
                "merged closed generic instantiations"
            );
        }
        result
    }
}

/// Rewrite every type name the declaration refers to through `bindings`.
fn rebind_members(decl: &mut TypeDeclaration, bindings: &[(String, String)]) {
    match decl {
        TypeDeclaration::Class(class) => {
            rebind(&mut class.base_type, bindings);
            for name in &mut class.interfaces {
                rebind(name, bindings);
            }
            for field in &mut class.fields {
                rebind(&mut field.type_name, bindings);
            }
            for method in &mut class.methods {
                rebind_method(method, bindings);
            }
        }
        TypeDeclaration::Interface(iface) => {
            for name in &mut iface.interfaces {
                rebind(name, bindings);
            }
            for field in &mut iface.fields {
                rebind(&mut field.type_name, bindings);
            }
            for method in &mut iface.methods {
                rebind_method(method, bindings);
            }
        }
        TypeDeclaration::Enum(_) => {}
        TypeDeclaration::Delegate(delegate) => rebind_method(&mut delegate.invoke, bindings),
    }
}

fn rebind_method(method: &mut Method, bindings: &[(String, String)]) {
    rebind(&mut method.return_type, bindings);
    for param in &mut method.parameters {
        rebind(&mut param.type_name, bindings);
    }
}

fn rebind(name: &mut String, bindings: &[(String, String)]) {
    if let Some(rebound) = substitute(name, bindings) {
        *name = rebound;
    }
}

/// `name` with whole-type matches of a bound argument replaced by its
/// placeholder, looking through array suffixes and generic argument lists.
/// `None` when nothing matched.
fn substitute(name: &str, bindings: &[(String, String)]) -> Option<String> {
    let name = name.trim();
    if let Some((_, placeholder)) = bindings.iter().find(|(arg, _)| arg == name) {
        return Some(placeholder.clone());
    }
    if let Some(element) = name.strip_suffix("[]") {
        return substitute(element, bindings).map(|element| format!("{element}[]"));
    }

    let (outer, args) = generic_parts(name)?;
    let mut changed = false;
    let args: Vec<String> = split_generic_args(args)
        .into_iter()
        .map(|arg| match substitute(arg, bindings) {
            Some(rebound) => {
                changed = true;
                rebound
            }
            None => arg.to_owned(),
        })
        .collect();
    changed.then(|| format!("{}<{}>", outer.trim(), args.join(", ")))
}

/// `T` for a single parameter, `T1..Tn` otherwise.
pub fn placeholder_parameters(arity: usize) -> Vec<String> {
    match arity {
        0 => Vec::new(),
        1 => vec!["T".to_owned()],
        n => (1..=n).map(|i| format!("T{i}")).collect(),
    }
}
