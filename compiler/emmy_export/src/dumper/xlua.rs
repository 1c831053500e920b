//! XLua binding convention.
//!
//! Every host type is reachable from Lua as `CS.<namespace>.<Name>`. Each
//! declaration is rendered as a local table carrying the annotations, which
//! is then bound to that path once the namespace tables exist.

use std::fs;

use emmy_fmt::annotations::{
    write_binding, write_comment_and_location, write_constructor_overload,
    write_default_constructor, write_delegate_alias, write_enum_entry, write_event, write_field,
    write_local_table, write_method_stub, write_parameters, write_return, write_type_header,
};
use emmy_fmt::names::{declaration_name, generic_parts, lua_identifier};
use emmy_fmt::{ensure_namespace, namespace_chain, Emitter, RenderError, StringEmitter, TypeScope};
use emmy_model::{
    ClassType, DeclKind, DelegateType, EnumType, InterfaceType, Member, Method, TypeDeclaration,
    TypeInfo,
};
use rustc_hash::FxHashMap;

use super::chunks::ChunkWriter;
use super::{Dumper, ExportSummary};
use crate::config::ExportConfig;
use crate::error::{DeclarationError, ExportError};
use crate::generics::{GenericNormalizer, MergeInstantiations, Passthrough};
use crate::tracker::ReferenceTracker;

/// Exporter for the XLua `CS.*` convention.
#[derive(Copy, Clone, Debug, Default)]
pub struct XLuaDumper;

impl Dumper for XLuaDumper {
    fn name(&self) -> &'static str {
        "XLuaDumper"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(count = declarations.len()))]
    fn dump(
        &self,
        declarations: Vec<TypeDeclaration>,
        config: &ExportConfig,
    ) -> Result<ExportSummary, ExportError> {
        config.validate()?;
        fs::create_dir_all(&config.output_dir).map_err(|source| ExportError::CreateDir {
            path: config.output_dir.clone(),
            source,
        })?;

        let normalizer: &dyn GenericNormalizer = if config.merge_generics {
            &MergeInstantiations
        } else {
            &Passthrough
        };
        let declarations = normalizer.normalize(declarations);

        let mut run = XLuaRun::new(config);
        run.seed(&declarations);
        for decl in &declarations {
            run.export(decl)?;
        }
        run.finish()
    }
}

/// What a registered path refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NamespaceEntry {
    /// A namespace table (`A`, `A.B`).
    Namespace,
    /// A type declared in the global namespace.
    Type,
}

/// State of one export run.
struct XLuaRun<'c> {
    config: &'c ExportConfig,
    tracker: ReferenceTracker,
    namespaces: FxHashMap<String, NamespaceEntry>,
    writer: ChunkWriter<'c>,
    failures: Vec<DeclarationError>,
    exported: usize,
}

impl<'c> XLuaRun<'c> {
    fn new(config: &'c ExportConfig) -> Self {
        XLuaRun {
            config,
            tracker: ReferenceTracker::new(),
            namespaces: FxHashMap::default(),
            writer: ChunkWriter::new(config),
            failures: Vec::new(),
            exported: 0,
        }
    }

    /// Pass 1: register exported names and namespace paths.
    fn seed(&mut self, declarations: &[TypeDeclaration]) {
        self.tracker.seed(declarations);

        for decl in declarations {
            self.register_namespace(decl.info());
        }

        for decl in declarations {
            let name = decl.qualified_name();
            if self.namespaces.get(&name) == Some(&NamespaceEntry::Namespace) {
                tracing::warn!(
                    kind = %decl.kind(),
                    name = %name,
                    "declaration shares its path with a namespace"
                );
            }
        }

        tracing::debug!(namespaces = self.namespaces.len(), "registered namespaces");
    }

    fn register_namespace(&mut self, info: &TypeInfo) {
        if info.namespace.is_empty() {
            self.namespaces
                .entry(info.name.clone())
                .or_insert(NamespaceEntry::Type);
            return;
        }

        // Malformed namespaces are reported when the declaration is rendered.
        let Ok(chain) = namespace_chain(&info.namespace) else {
            return;
        };
        for path in chain {
            self.namespaces
                .insert(path.to_owned(), NamespaceEntry::Namespace);
        }
    }

    /// Pass 2: render one declaration and flush if the chunk is full.
    fn export(&mut self, decl: &TypeDeclaration) -> Result<(), ExportError> {
        self.writer.begin_declaration();

        let out = self.writer.buffer();
        let tracker = &mut self.tracker;
        let rendered = match decl {
            TypeDeclaration::Class(class) => write_class(tracker, out, class),
            TypeDeclaration::Interface(interface) => write_interface(tracker, out, interface),
            TypeDeclaration::Enum(enum_type) => write_enum(out, enum_type),
            TypeDeclaration::Delegate(delegate) => write_delegate(tracker, out, delegate),
        };

        match rendered {
            Ok(()) => {
                self.exported += 1;
                tracing::debug!(kind = %decl.kind(), name = %decl.qualified_name(), "exported");
            }
            Err(source) => {
                let error = DeclarationError {
                    name: decl.qualified_name(),
                    kind: decl.kind(),
                    source,
                };
                tracing::warn!("{error}");
                self.failures.push(error);
            }
        }

        self.writer.end_declaration()
    }

    /// Pass 3: write the last chunk and the fallback file.
    fn finish(self) -> Result<ExportSummary, ExportError> {
        let files = self.writer.finish()?;

        let fallback_path = self.config.fallback_path();
        let fallback_file = self
            .tracker
            .write_fallback_file(&fallback_path)
            .map_err(|source| ExportError::Write {
                path: fallback_path.clone(),
                source,
            })?
            .then_some(fallback_path);

        let summary = ExportSummary {
            files,
            fallback_file,
            unexported: self.tracker.unexported_count(),
            exported_declarations: self.exported,
            failures: self.failures,
            namespaces: self
                .namespaces
                .values()
                .filter(|entry| **entry == NamespaceEntry::Namespace)
                .count(),
        };

        tracing::info!(
            files = summary.files.len(),
            unexported = summary.unexported,
            failures = summary.failures.len(),
            "export finished"
        );
        Ok(summary)
    }
}

/// Names a declaration is rendered and bound under.
struct Target<'d> {
    namespace: &'d str,
    /// Declaration name without an instantiation argument list.
    name: &'d str,
    /// Lua local holding the table (`Foo`, `_end`).
    local: String,
    /// Annotation name (`CS.A.B.Foo`).
    full_name: String,
}

impl<'d> Target<'d> {
    /// Validate the name and namespace before anything is emitted.
    fn new(info: &'d TypeInfo, kind: DeclKind) -> Result<Self, RenderError> {
        let name = generic_parts(&info.name)
            .map_or(info.name.as_str(), |(outer, _)| outer)
            .trim();
        if name.is_empty() {
            return Err(RenderError::EmptyName { kind });
        }
        namespace_chain(&info.namespace)?;

        Ok(Target {
            namespace: &info.namespace,
            name,
            local: lua_identifier(name).into_owned(),
            full_name: declaration_name(&info.namespace, name),
        })
    }

    /// Create the namespace tables and bind the local to its path.
    fn bind(&self, out: &mut StringEmitter) -> Result<(), RenderError> {
        ensure_namespace(out, self.namespace)?;
        write_binding(out, self.namespace, self.name, &self.local);
        Ok(())
    }
}

fn write_class(
    tracker: &mut ReferenceTracker,
    out: &mut StringEmitter,
    class: &ClassType,
) -> Result<(), RenderError> {
    let info = &class.info;
    let target = Target::new(info, DeclKind::Class)?;
    let scope = TypeScope::new(&info.generic_parameters);

    let mut supertypes: Vec<&str> = Vec::with_capacity(class.interfaces.len() + 1);
    if !class.base_type.is_empty() {
        supertypes.push(&class.base_type);
    }
    supertypes.extend(class.interfaces.iter().map(String::as_str));
    for supertype in &supertypes {
        tracker.check_scoped(supertype, &scope);
    }

    write_comment_and_location(out, &info.comment, &info.source_location, 0);
    write_type_header(
        out,
        "class",
        &target.full_name,
        &info.generic_parameters,
        &supertypes,
    );

    // Static classes cannot be instantiated from Lua.
    if !class.is_static {
        let mut ctors = class
            .methods
            .iter()
            .filter(|m| m.is_constructor())
            .peekable();
        if ctors.peek().is_none() {
            write_default_constructor(out, &target.full_name);
        }
        for ctor in ctors {
            for param in &ctor.parameters {
                tracker.check_scoped(&param.type_name, &scope);
            }
            write_constructor_overload(out, ctor, &target.full_name, &scope)?;
        }
    }

    write_local_table(out, &target.local);
    write_members(tracker, out, &target.local, &class.fields, &scope)?;
    write_methods(tracker, out, &target.local, &class.methods, &scope)?;
    target.bind(out)
}

fn write_interface(
    tracker: &mut ReferenceTracker,
    out: &mut StringEmitter,
    interface: &InterfaceType,
) -> Result<(), RenderError> {
    let info = &interface.info;
    let target = Target::new(info, DeclKind::Interface)?;
    let scope = TypeScope::new(&info.generic_parameters);

    let supertypes: Vec<&str> = interface.interfaces.iter().map(String::as_str).collect();
    for supertype in &supertypes {
        tracker.check_scoped(supertype, &scope);
    }

    write_comment_and_location(out, &info.comment, &info.source_location, 0);
    write_type_header(
        out,
        "interface",
        &target.full_name,
        &info.generic_parameters,
        &supertypes,
    );
    write_local_table(out, &target.local);
    write_members(tracker, out, &target.local, &interface.fields, &scope)?;
    write_methods(tracker, out, &target.local, &interface.methods, &scope)?;
    target.bind(out)
}

fn write_enum(out: &mut StringEmitter, enum_type: &EnumType) -> Result<(), RenderError> {
    let info = &enum_type.info;
    let target = Target::new(info, DeclKind::Enum)?;

    write_comment_and_location(out, &info.comment, &info.source_location, 0);
    write_type_header(out, "enum", &target.full_name, &[], &[]);
    out.emit_line(&format!("local {} = {{", target.local));
    for field in &enum_type.fields {
        write_enum_entry(out, &target.local, field)?;
    }
    out.emit_line("}");
    target.bind(out)
}

fn write_delegate(
    tracker: &mut ReferenceTracker,
    out: &mut StringEmitter,
    delegate: &DelegateType,
) -> Result<(), RenderError> {
    let info = &delegate.info;
    let target = Target::new(info, DeclKind::Delegate)?;
    let scope = TypeScope::new(&info.generic_parameters);

    let invoke = &delegate.invoke;
    tracker.check_scoped(&invoke.return_type, &scope);
    for param in &invoke.parameters {
        tracker.check_scoped(&param.type_name, &scope);
    }

    write_comment_and_location(out, &info.comment, &info.source_location, 0);
    write_delegate_alias(out, &target.full_name, invoke, &scope)
}

/// Fields and events, each preceded by its comment block.
fn write_members(
    tracker: &mut ReferenceTracker,
    out: &mut StringEmitter,
    owner: &str,
    members: &[Member],
    scope: &TypeScope<'_>,
) -> Result<(), RenderError> {
    for member in members {
        tracker.check_scoped(&member.type_name, scope);
        write_comment_and_location(out, &member.comment, &member.source_location, 0);
        if member.is_event {
            write_event(out, owner, member, scope)?;
        } else {
            write_field(out, owner, member, scope)?;
        }
    }
    Ok(())
}

/// Every method except constructors: comment, parameters, return, stub.
fn write_methods(
    tracker: &mut ReferenceTracker,
    out: &mut StringEmitter,
    owner: &str,
    methods: &[Method],
    scope: &TypeScope<'_>,
) -> Result<(), RenderError> {
    for method in methods.iter().filter(|m| !m.is_constructor()) {
        tracker.check_scoped(&method.return_type, scope);
        for param in &method.parameters {
            tracker.check_scoped(&param.type_name, scope);
        }

        write_comment_and_location(out, &method.comment, &method.source_location, 0);
        let extra = write_parameters(out, method, scope)?;
        write_return(out, &method.return_type, &extra, scope);
        write_method_stub(out, owner, method)?;
    }
    Ok(())
}
