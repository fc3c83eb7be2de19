//! Declaration binding
//!
//! A [`FullComment`](crate::comments::FullComment) documents exactly one declaration. The
//! declaration model lives outside this crate; it is seen here only through the narrow
//! [`Decl`] capability trait. [`DeclInfo`] holds a non-owning reference to the declaration and
//! a lazily computed [`DeclSummary`] of it: the simplified kind tags, the formal parameter
//! view, the result type and the template parameter list that `\param` and `\tparam`
//! references are resolved against.
//!
//! State machine: Unfilled -> Filled, exactly once per `DeclInfo`. The first read of any
//! classification-dependent field calls [`Decl::introspect`]; every later read returns the
//! memoized summary, even if the declaration would now answer differently.

use once_cell::sync::OnceCell;
use std::fmt;

/// Simplified declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeclKind {
    /// Everything not covered below. Also the kind of an unfilled `DeclInfo`.
    #[default]
    Other,
    /// Functions, methods, function templates and function-like aliases
    Function,
    /// Classes, structs, unions and their templates
    Class,
    /// Variables, fields and enumerators
    Variable,
    Namespace,
    /// Typedefs and type aliases
    Typedef,
    Enum,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKind::Other => "other",
            DeclKind::Function => "function",
            DeclKind::Class => "class",
            DeclKind::Variable => "variable",
            DeclKind::Namespace => "namespace",
            DeclKind::Typedef => "typedef",
            DeclKind::Enum => "enum",
        }
    }
}

/// What kind of template the declaration is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateDeclKind {
    #[default]
    NotTemplate,
    Template,
    TemplateSpecialization,
    TemplatePartialSpecialization,
}

/// One formal parameter of a function-like declaration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamVarDecl {
    /// `None` for unnamed parameters
    pub name: Option<String>,
}

impl ParamVarDecl {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn unnamed() -> Self {
        Self { name: None }
    }
}

/// One template parameter. Template template parameters carry their own nested list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateParameter {
    pub name: Option<String>,
    pub nested: Option<TemplateParameterList>,
}

impl TemplateParameter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            nested: None,
        }
    }

    /// A template template parameter, e.g. `template<typename T> class TT`
    pub fn template(name: impl Into<String>, nested: TemplateParameterList) -> Self {
        Self {
            name: Some(name.into()),
            nested: Some(nested),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateParameterList {
    pub params: Vec<TemplateParameter>,
}

impl TemplateParameterList {
    pub fn new(params: Vec<TemplateParameter>) -> Self {
        Self { params }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TemplateParameter> {
        self.params.get(index)
    }
}

/// The classification of a declaration, produced by [`Decl::introspect`]
///
/// `param_vars` and `result_type` are only meaningful for function-like declarations,
/// `template_parameters` only for templates and partial specializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeclSummary<'d> {
    pub kind: DeclKind,
    pub template_kind: TemplateDeclKind,
    pub param_vars: &'d [ParamVarDecl],
    pub result_type: Option<&'d str>,
    pub template_parameters: Option<&'d TemplateParameterList>,
    pub is_objc_method: bool,
    pub is_instance_method: bool,
    pub is_class_method: bool,
}

/// Capability interface implemented by the external declaration model
pub trait Decl: fmt::Debug + Sync {
    fn name(&self) -> &str;

    /// Classify the declaration. Called at most once per [`DeclInfo`].
    fn introspect(&self) -> DeclSummary<'_>;
}

/// Lazily filled summary of the declaration a comment is attached to
pub struct DeclInfo<'d> {
    decl: &'d dyn Decl,
    filled: OnceCell<DeclSummary<'d>>,
}

impl<'d> DeclInfo<'d> {
    pub fn new(decl: &'d dyn Decl) -> Self {
        Self {
            decl,
            filled: OnceCell::new(),
        }
    }

    /// The declaration itself; never triggers a fill
    pub fn decl(&self) -> &'d dyn Decl {
        self.decl
    }

    pub fn is_filled(&self) -> bool {
        self.filled.get().is_some()
    }

    /// Classify the declaration if that has not happened yet
    pub fn fill(&self) -> &DeclSummary<'d> {
        self.filled.get_or_init(|| {
            let summary = self.decl.introspect();
            log::debug!(
                "filled decl info for '{}': kind={} template={:?} params={}",
                self.decl.name(),
                summary.kind.as_str(),
                summary.template_kind,
                summary.param_vars.len()
            );
            summary
        })
    }

    pub fn kind(&self) -> DeclKind {
        self.fill().kind
    }

    pub fn template_kind(&self) -> TemplateDeclKind {
        self.fill().template_kind
    }

    pub fn param_vars(&self) -> &'d [ParamVarDecl] {
        self.fill().param_vars
    }

    pub fn result_type(&self) -> Option<&'d str> {
        self.fill().result_type
    }

    pub fn template_parameters(&self) -> Option<&'d TemplateParameterList> {
        self.fill().template_parameters
    }

    pub fn is_objc_method(&self) -> bool {
        self.fill().is_objc_method
    }

    pub fn is_instance_method(&self) -> bool {
        self.fill().is_instance_method
    }

    pub fn is_class_method(&self) -> bool {
        self.fill().is_class_method
    }

    pub fn is_function_decl(&self) -> bool {
        self.kind() == DeclKind::Function
    }

    pub fn is_template_decl(&self) -> bool {
        self.template_kind() != TemplateDeclKind::NotTemplate
    }
}

impl fmt::Debug for DeclInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclInfo")
            .field("decl", &self.decl.name())
            .field("filled", &self.filled.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CountingDecl {
        params: Vec<ParamVarDecl>,
        fills: AtomicUsize,
    }

    impl Decl for CountingDecl {
        fn name(&self) -> &str {
            "f"
        }

        fn introspect(&self) -> DeclSummary<'_> {
            self.fills.fetch_add(1, Ordering::SeqCst);
            DeclSummary {
                kind: DeclKind::Function,
                param_vars: &self.params,
                result_type: Some("int"),
                ..DeclSummary::default()
            }
        }
    }

    fn decl() -> CountingDecl {
        CountingDecl {
            params: vec![ParamVarDecl::named("a"), ParamVarDecl::unnamed()],
            fills: AtomicUsize::new(0),
        }
    }

    #[test]
    fn test_decl_does_not_fill() {
        let decl = decl();
        let info = DeclInfo::new(&decl);
        assert_eq!(info.decl().name(), "f");
        assert!(!info.is_filled());
        assert_eq!(decl.fills.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_fill_happens_once() {
        let decl = decl();
        let info = DeclInfo::new(&decl);
        for _ in 0..5 {
            assert_eq!(info.kind(), DeclKind::Function);
            assert_eq!(info.param_vars().len(), 2);
        }
        assert!(info.is_filled());
        assert_eq!(info.result_type(), Some("int"));
        assert!(info.is_function_decl());
        assert!(!info.is_template_decl());
        assert!(info.template_parameters().is_none());
        assert_eq!(decl.fills.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_access_fills_once() {
        let decl = decl();
        let info = DeclInfo::new(&decl);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| info.param_vars().len());
            }
        });
        assert_eq!(decl.fills.load(Ordering::SeqCst), 1);
    }
}
