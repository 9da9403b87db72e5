//! Identity-addressed declaration arena.

use std::{collections::HashMap, ops::Index};

use crate::{
    DeclId, DeclKind, Declaration, Error, Member, QualifiedName, RawDecl, RawKind, Result,
};

/// Builtin scalar names that may be referenced without being declared.
const BUILTINS: &[&str] = &[
    "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
    "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr",
];

/// Builtin names that denote "any value".
const BUILTIN_INTERFACES: &[&str] = &["any", "interface{}"];

/// Immutable graph of every declaration known to the run.
#[derive(Debug, Clone, Default)]
pub struct DeclGraph {
    decls: Vec<Declaration>,
    by_key: HashMap<String, DeclId>,
}

impl DeclGraph {
    /// Build the graph from raw declarations.
    ///
    /// References to undeclared builtins are materialized on the fly; any
    /// other dangling reference is an error.
    pub fn from_raw(raw: &[RawDecl]) -> Result<Self> {
        let mut graph = DeclGraph::default();

        for decl in raw {
            let key = decl.name.to_string();
            if graph.by_key.contains_key(&key) {
                return Err(Box::new(Error::DuplicateDeclaration { name: key }));
            }
            // Placeholder kind, replaced once every key has an id.
            graph.push(Declaration::new(decl.name.clone(), DeclKind::Primitive));
        }

        for decl in raw {
            for target in references(decl) {
                if graph.by_key.contains_key(target) {
                    continue;
                }
                if BUILTINS.contains(&target) {
                    graph.push(Declaration::new(QualifiedName::bare(target), DeclKind::Primitive));
                } else if BUILTIN_INTERFACES.contains(&target) {
                    graph.push(Declaration::new(QualifiedName::bare(target), DeclKind::Interface));
                } else {
                    return Err(Box::new(Error::UnresolvedReference {
                        from: decl.name.to_string(),
                        target: target.to_string(),
                    }));
                }
            }
        }

        for (index, decl) in raw.iter().enumerate() {
            let kind = graph.convert_kind(decl)?;
            let slot = &mut graph.decls[index];
            slot.kind = kind;
            slot.comment_lines = decl.comment_lines.clone();
            slot.second_closest_comment_lines = decl.second_closest_comment_lines.clone();
        }

        graph.check_acyclic()?;
        Ok(graph)
    }

    /// Reject alias, constant and wrapper chains that lead back to where
    /// they started. Records break chains, so self-referencing records are
    /// fine.
    fn check_acyclic(&self) -> Result<()> {
        let mut marks = vec![Mark::Unvisited; self.decls.len()];
        let mut path = Vec::new();
        for index in 0..self.decls.len() {
            self.visit(DeclId::new(index), &mut marks, &mut path)?;
        }
        Ok(())
    }

    fn visit(&self, id: DeclId, marks: &mut [Mark], path: &mut Vec<DeclId>) -> Result<()> {
        match marks[id.index()] {
            Mark::Done => return Ok(()),
            Mark::OnPath => {
                let start = path.iter().position(|p| *p == id).unwrap_or_default();
                let cycle = path[start..]
                    .iter()
                    .chain([&id])
                    .map(|p| self.get(*p).name.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                return Err(Box::new(Error::CyclicDeclaration {
                    name: self.get(id).name.to_string(),
                    cycle,
                }));
            }
            Mark::Unvisited => {}
        }

        marks[id.index()] = Mark::OnPath;
        path.push(id);
        for next in chain_links(&self.get(id).kind) {
            self.visit(next, marks, path)?;
        }
        path.pop();
        marks[id.index()] = Mark::Done;
        Ok(())
    }

    fn push(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId::new(self.decls.len());
        self.by_key.insert(decl.name.to_string(), id);
        self.decls.push(decl);
        id
    }

    fn convert_kind(&self, decl: &RawDecl) -> Result<DeclKind> {
        let required = |field: &'static str, value: &Option<String>| -> Result<DeclId> {
            let key = value.as_deref().ok_or_else(|| {
                Box::new(Error::MissingField {
                    name: decl.name.to_string(),
                    kind: decl.kind.as_str(),
                    field,
                })
            })?;
            Ok(self.by_key[key])
        };

        Ok(match decl.kind {
            RawKind::Struct => DeclKind::Record {
                members: decl
                    .members
                    .iter()
                    .map(|m| Member {
                        name: m.name.clone(),
                        ty: self.by_key[m.ty.as_str()],
                        tags: m.tags.clone(),
                        comment_lines: m.comment_lines.clone(),
                        embedded: m.embedded,
                    })
                    .collect(),
            },
            RawKind::Alias => DeclKind::Alias {
                underlying: required("underlying", &decl.underlying)?,
            },
            RawKind::Builtin => DeclKind::Primitive,
            RawKind::Pointer => DeclKind::Pointer {
                elem: required("elem", &decl.elem)?,
            },
            RawKind::Slice => DeclKind::Slice {
                elem: required("elem", &decl.elem)?,
            },
            RawKind::Map => DeclKind::Map {
                key: required("key", &decl.key)?,
                elem: required("elem", &decl.elem)?,
            },
            RawKind::DeclarationOf => DeclKind::Constant {
                underlying: required("underlying", &decl.underlying)?,
                value: decl.const_value.clone(),
            },
            RawKind::Interface => DeclKind::Interface,
        })
    }

    pub fn get(&self, id: DeclId) -> &Declaration {
        &self.decls[id.index()]
    }

    /// Find a declaration by its qualified key (`package.Name`).
    pub fn lookup(&self, key: &str) -> Option<DeclId> {
        self.by_key.get(key).copied()
    }

    pub fn lookup_name(&self, name: &QualifiedName) -> Option<DeclId> {
        self.lookup(&name.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, decl)| (DeclId::new(i), decl))
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Strip every pointer, slice and map wrapper down to the element type.
    pub fn innermost(&self, mut id: DeclId) -> DeclId {
        while let Some(elem) = self.get(id).kind.elem() {
            id = elem;
        }
        id
    }

    /// Follow alias and constant definitions down to the base type.
    pub fn final_underlying(&self, mut id: DeclId) -> DeclId {
        while let Some(underlying) = self.get(id).kind.underlying() {
            id = underlying;
        }
        id
    }
}

impl Index<DeclId> for DeclGraph {
    type Output = Declaration;

    fn index(&self, id: DeclId) -> &Declaration {
        self.get(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Declarations a kind is defined in terms of, as followed by display-name
/// resolution and the underlying/innermost walks.
fn chain_links(kind: &DeclKind) -> impl Iterator<Item = DeclId> {
    let key = match kind {
        DeclKind::Map { key, .. } => Some(*key),
        _ => None,
    };
    kind.elem().into_iter().chain(key).chain(kind.underlying())
}

fn references(decl: &RawDecl) -> impl Iterator<Item = &str> {
    decl.members
        .iter()
        .map(|m| m.ty.as_str())
        .chain(decl.elem.as_deref())
        .chain(decl.key.as_deref())
        .chain(decl.underlying.as_deref())
}
