//! Hash-consed expression arena.
//!
//! Expressions are stored once in an [`ExprManager`] and referred to through
//! cheap [`ExprId`] handles. Structurally equal expressions always share one
//! handle, so oracles can key their tables directly on `ExprId`.
//!
//! Applications are flattened: `mk_app(mk_app(f, [a]), [b])` and
//! `mk_app(f, [a, b])` produce the same expression.

use crate::error::{GrindError, Result};
use lasso::{Rodeo, Spur};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;

/// Handle to an expression in an [`ExprManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub u32);

/// Handle to a metavariable. Goals are metavariables too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MVarId(pub u32);

/// Expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// Global constant.
    Const(Spur),
    /// Free (local) variable.
    FVar(Spur),
    /// Metavariable, possibly assigned.
    MVar(MVarId),
    /// Application of `head` to `args`. `head` is never itself an application.
    App {
        /// Function being applied.
        head: ExprId,
        /// Arguments, outermost last.
        args: SmallVec<[ExprId; 4]>,
    },
    /// Annotation wrapper. Transparent for matching purposes.
    MData(ExprId),
}

/// Names the case-split engine matches on or builds terms from.
#[derive(Debug, Clone, Copy)]
pub struct Builtins {
    /// `And a b`
    pub and: Spur,
    /// `Or a b`
    pub or: Spur,
    /// `Not a`
    pub not: Spur,
    /// `Iff a b`
    pub iff: Spur,
    /// `Eq α a b`
    pub eq: Spur,
    /// `ite α c inst t e`
    pub ite: Spur,
    /// `dite α c inst t e`
    pub dite: Spur,
    /// `or_of_and_eq_false : (a ∧ b) = False → ¬a ∨ ¬b`
    pub or_of_and_eq_false: Spur,
    /// `Classical.em : p ∨ ¬p`
    pub em: Spur,
}

impl Builtins {
    fn intern(names: &mut Rodeo) -> Self {
        Self {
            and: names.get_or_intern_static("And"),
            or: names.get_or_intern_static("Or"),
            not: names.get_or_intern_static("Not"),
            iff: names.get_or_intern_static("Iff"),
            eq: names.get_or_intern_static("Eq"),
            ite: names.get_or_intern_static("ite"),
            dite: names.get_or_intern_static("dite"),
            or_of_and_eq_false: names.get_or_intern_static("Lean.Grind.or_of_and_eq_false"),
            em: names.get_or_intern_static("Classical.em"),
        }
    }
}

/// Arena owning every expression, name and metavariable assignment.
#[derive(Debug)]
pub struct ExprManager {
    nodes: Vec<ExprKind>,
    cache: FxHashMap<ExprKind, ExprId>,
    names: Rodeo,
    assignments: FxHashMap<MVarId, ExprId>,
    next_mvar: u32,
    /// Pre-interned builtin names.
    pub builtins: Builtins,
}

impl Default for ExprManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprManager {
    /// Create an empty arena with the builtin names interned.
    pub fn new() -> Self {
        let mut names = Rodeo::default();
        let builtins = Builtins::intern(&mut names);
        Self {
            nodes: Vec::new(),
            cache: FxHashMap::default(),
            names,
            assignments: FxHashMap::default(),
            next_mvar: 0,
            builtins,
        }
    }

    fn intern_node(&mut self, kind: ExprKind) -> ExprId {
        if let Some(&id) = self.cache.get(&kind) {
            return id;
        }
        let id = ExprId(self.nodes.len() as u32);
        self.nodes.push(kind.clone());
        self.cache.insert(kind, id);
        id
    }

    /// Number of distinct expressions.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up an expression node.
    pub fn get(&self, id: ExprId) -> Option<&ExprKind> {
        self.nodes.get(id.0 as usize)
    }

    /// Look up an expression node, failing on a foreign handle.
    pub fn kind(&self, id: ExprId) -> Result<&ExprKind> {
        self.get(id).ok_or(GrindError::UnknownExpr(id))
    }

    /// Intern a name.
    pub fn intern(&mut self, name: &str) -> Spur {
        self.names.get_or_intern(name)
    }

    /// Resolve an interned name.
    pub fn name(&self, name: Spur) -> &str {
        self.names.resolve(&name)
    }

    /// Find a name without interning it.
    pub fn lookup_name(&self, name: &str) -> Option<Spur> {
        self.names.get(name)
    }

    /// `c`
    pub fn mk_const(&mut self, name: &str) -> ExprId {
        let name = self.intern(name);
        self.mk_const_named(name)
    }

    /// `c` from an already interned name.
    pub fn mk_const_named(&mut self, name: Spur) -> ExprId {
        self.intern_node(ExprKind::Const(name))
    }

    /// Local variable.
    pub fn mk_fvar(&mut self, name: &str) -> ExprId {
        let name = self.intern(name);
        self.intern_node(ExprKind::FVar(name))
    }

    /// Allocate a metavariable id without building an expression for it.
    pub fn fresh_mvar_id(&mut self) -> MVarId {
        let id = MVarId(self.next_mvar);
        self.next_mvar += 1;
        id
    }

    /// Fresh, unassigned metavariable.
    pub fn mk_mvar(&mut self) -> ExprId {
        let id = self.fresh_mvar_id();
        self.intern_node(ExprKind::MVar(id))
    }

    /// Apply `head` to `args`, flattening nested applications.
    pub fn mk_app(&mut self, head: ExprId, args: &[ExprId]) -> ExprId {
        if args.is_empty() {
            return head;
        }
        let (head, all_args) = match self.get(head) {
            Some(ExprKind::App {
                head: inner,
                args: prefix,
            }) => {
                let mut all: SmallVec<[ExprId; 4]> = prefix.clone();
                all.extend_from_slice(args);
                (*inner, all)
            }
            _ => (head, SmallVec::from_slice(args)),
        };
        self.intern_node(ExprKind::App {
            head,
            args: all_args,
        })
    }

    /// Apply a builtin constant.
    fn mk_builtin_app(&mut self, name: Spur, args: &[ExprId]) -> ExprId {
        let head = self.mk_const_named(name);
        self.mk_app(head, args)
    }

    /// Wrap `e` in an annotation.
    pub fn mk_mdata(&mut self, e: ExprId) -> ExprId {
        self.intern_node(ExprKind::MData(e))
    }

    /// `¬p`
    pub fn mk_not(&mut self, p: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.not, &[p])
    }

    /// `p ∧ q`
    pub fn mk_and(&mut self, p: ExprId, q: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.and, &[p, q])
    }

    /// `p ∨ q`
    pub fn mk_or(&mut self, p: ExprId, q: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.or, &[p, q])
    }

    /// `p ↔ q`
    pub fn mk_iff(&mut self, p: ExprId, q: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.iff, &[p, q])
    }

    /// `@Eq α a b`
    pub fn mk_eq(&mut self, ty: ExprId, a: ExprId, b: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.eq, &[ty, a, b])
    }

    /// `@ite α c inst t e`
    pub fn mk_ite(&mut self, ty: ExprId, c: ExprId, inst: ExprId, t: ExprId, e: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.ite, &[ty, c, inst, t, e])
    }

    /// `@dite α c inst t e`
    pub fn mk_dite(&mut self, ty: ExprId, c: ExprId, inst: ExprId, t: ExprId, e: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.dite, &[ty, c, inst, t, e])
    }

    /// `Classical.em p : p ∨ ¬p`
    pub fn mk_em(&mut self, p: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.em, &[p])
    }

    /// `or_of_and_eq_false a b h : ¬a ∨ ¬b`
    pub fn mk_or_of_and_eq_false(&mut self, a: ExprId, b: ExprId, proof: ExprId) -> ExprId {
        self.mk_builtin_app(self.builtins.or_of_and_eq_false, &[a, b, proof])
    }

    /// Assign a metavariable. Each metavariable is assigned at most once.
    pub fn assign_mvar(&mut self, mvar: MVarId, value: ExprId) -> Result<()> {
        if self.assignments.contains_key(&mvar) {
            return Err(GrindError::MVarAssigned(mvar));
        }
        let value_head = self.cleanup(value);
        if self.get(value_head) == Some(&ExprKind::MVar(mvar)) {
            return Err(GrindError::MVarAssigned(mvar));
        }
        self.assignments.insert(mvar, value);
        Ok(())
    }

    /// Current assignment of a metavariable.
    pub fn mvar_assignment(&self, mvar: MVarId) -> Option<ExprId> {
        self.assignments.get(&mvar).copied()
    }

    /// Strip annotations and follow assigned metavariables at the head.
    pub fn cleanup(&self, mut e: ExprId) -> ExprId {
        loop {
            match self.get(e) {
                Some(ExprKind::MData(inner)) => e = *inner,
                Some(ExprKind::MVar(m)) => match self.assignments.get(m) {
                    Some(&value) => e = value,
                    None => return e,
                },
                _ => return e,
            }
        }
    }

    /// Head of an application, or `e` itself.
    pub fn app_fn(&self, e: ExprId) -> ExprId {
        let e = self.cleanup(e);
        match self.get(e) {
            Some(ExprKind::App { head, .. }) => self.cleanup(*head),
            _ => e,
        }
    }

    /// Arguments of an application, or nothing.
    pub fn app_args(&self, e: ExprId) -> &[ExprId] {
        let e = self.cleanup(e);
        match self.get(e) {
            Some(ExprKind::App { args, .. }) => args,
            _ => &[],
        }
    }

    /// Name of `e` if it is a constant (after cleanup).
    pub fn const_name(&self, e: ExprId) -> Option<Spur> {
        match self.get(self.cleanup(e)) {
            Some(ExprKind::Const(name)) => Some(*name),
            _ => None,
        }
    }

    /// Name of the head constant of `e`, if any.
    pub fn head_const(&self, e: ExprId) -> Option<Spur> {
        self.const_name(self.app_fn(e))
    }

    /// Arguments of `e` when it is `name` applied to exactly `arity` arguments.
    pub fn app_of(&self, e: ExprId, name: Spur, arity: usize) -> Option<&[ExprId]> {
        if self.head_const(e) != Some(name) {
            return None;
        }
        let args = self.app_args(e);
        (args.len() == arity).then_some(args)
    }

    /// Displayable view of an expression.
    pub fn display(&self, e: ExprId) -> ExprDisplay<'_> {
        ExprDisplay { exprs: self, e }
    }
}

/// S-expression style rendering used by trace output.
pub struct ExprDisplay<'a> {
    exprs: &'a ExprManager,
    e: ExprId,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exprs.get(self.e) {
            None => write!(f, "<unknown {}>", self.e.0),
            Some(ExprKind::Const(name)) | Some(ExprKind::FVar(name)) => {
                write!(f, "{}", self.exprs.name(*name))
            }
            Some(ExprKind::MVar(m)) => match self.exprs.mvar_assignment(*m) {
                Some(value) => write!(f, "{}", self.exprs.display(value)),
                None => write!(f, "?m.{}", m.0),
            },
            Some(ExprKind::MData(inner)) => write!(f, "{}", self.exprs.display(*inner)),
            Some(ExprKind::App { head, args }) => {
                write!(f, "({}", self.exprs.display(*head))?;
                for arg in args {
                    write!(f, " {}", self.exprs.display(*arg))?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_consing() {
        let mut exprs = ExprManager::new();
        let p = exprs.mk_fvar("p");
        let q = exprs.mk_fvar("q");
        let a = exprs.mk_or(p, q);
        let b = exprs.mk_or(p, q);
        assert_eq!(a, b);
        assert_ne!(a, exprs.mk_or(q, p));
    }

    #[test]
    fn test_builtin_names() {
        let exprs = ExprManager::new();
        let b = &exprs.builtins;
        let names: Vec<&str> = [b.and, b.or, b.not, b.iff, b.eq, b.ite, b.dite, b.or_of_and_eq_false, b.em]
            .into_iter()
            .map(|s| exprs.name(s))
            .collect();
        assert_eq!(
            names,
            [
                "And",
                "Or",
                "Not",
                "Iff",
                "Eq",
                "ite",
                "dite",
                "Lean.Grind.or_of_and_eq_false",
                "Classical.em"
            ]
        );
    }

    #[test]
    fn test_app_flattening() {
        let mut exprs = ExprManager::new();
        let f = exprs.mk_const("f");
        let a = exprs.mk_fvar("a");
        let b = exprs.mk_fvar("b");
        let fa = exprs.mk_app(f, &[a]);
        let fab = exprs.mk_app(fa, &[b]);
        assert_eq!(fab, exprs.mk_app(f, &[a, b]));
        assert_eq!(exprs.app_fn(fab), f);
        assert_eq!(exprs.app_args(fab), &[a, b]);
    }

    #[test]
    fn test_cleanup_strips_mdata_and_mvars() {
        let mut exprs = ExprManager::new();
        let p = exprs.mk_fvar("p");
        let q = exprs.mk_fvar("q");
        let or = exprs.mk_or(p, q);
        let m = exprs.mk_mvar();
        let Some(ExprKind::MVar(mvar)) = exprs.get(m).cloned() else {
            panic!("expected a metavariable");
        };
        let annotated = exprs.mk_mdata(m);
        assert_eq!(exprs.cleanup(annotated), m);

        exprs.assign_mvar(mvar, or).unwrap();
        assert_eq!(exprs.cleanup(annotated), or);
        assert_eq!(exprs.head_const(annotated), Some(exprs.builtins.or));
    }

    #[test]
    fn test_assign_twice_fails() {
        let mut exprs = ExprManager::new();
        let m = exprs.mk_mvar();
        let Some(ExprKind::MVar(mvar)) = exprs.get(m).cloned() else {
            panic!("expected a metavariable");
        };
        let p = exprs.mk_fvar("p");
        assert_eq!(exprs.assign_mvar(mvar, m), Err(GrindError::MVarAssigned(mvar)));
        exprs.assign_mvar(mvar, p).unwrap();
        assert_eq!(exprs.assign_mvar(mvar, p), Err(GrindError::MVarAssigned(mvar)));
    }

    #[test]
    fn test_app_of_checks_arity() {
        let mut exprs = ExprManager::new();
        let p = exprs.mk_fvar("p");
        let q = exprs.mk_fvar("q");
        let and = exprs.mk_and(p, q);
        let and_name = exprs.builtins.and;
        assert_eq!(exprs.app_of(and, and_name, 2), Some(&[p, q][..]));
        assert_eq!(exprs.app_of(and, and_name, 3), None);
        assert_eq!(exprs.app_of(p, and_name, 2), None);
    }

    #[test]
    fn test_display() {
        let mut exprs = ExprManager::new();
        let p = exprs.mk_fvar("p");
        let q = exprs.mk_fvar("q");
        let or = exprs.mk_or(p, q);
        assert_eq!(exprs.display(or).to_string(), "(Or p q)");
    }
}
