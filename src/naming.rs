//! Logger names derived from lexical and type context.
//!
//! A [`Context`] describes where a logger is requested: the outermost-first
//! chain of enclosing [`Scope`]s and, optionally, the static type that owns
//! the logger. [`Context::resolve`] turns it into a [`LoggerName`]:
//!
//! - singleton contexts named by symbol, and nested types, are named by
//!   walking their enclosing scopes;
//! - everything else is named after its type, with generic arguments erased,
//!   falling back to the scope walk when the type is not a plain path.
//!
//! ```
//! use lazylog::naming::{Context, NamingStrategy};
//!
//! let ctx = Context::root().singleton("Outer").ty("Inner");
//! assert_eq!(ctx.resolve(NamingStrategy::ByType).as_str(), "Outer.Inner");
//! ```

use std::any::TypeId;
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Separator between the segments of a [`LoggerName`].
pub const SEPARATOR: char = '.';

/// Dotted logger name, e.g. `app.db.Pool`.
///
/// Cloning is cheap. Rust path separators (`::`) are normalized to `.` on
/// construction and separators at either end are dropped. The empty name is
/// the root logger.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoggerName(Arc<str>);

impl LoggerName {
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if name.contains("::") {
            Self(Arc::from(name.replace("::", ".").trim_matches(SEPARATOR)))
        } else {
            Self(Arc::from(name.trim_matches(SEPARATOR)))
        }
    }

    /// The root logger name.
    pub fn root() -> Self {
        Self(Arc::from(""))
    }

    /// Name of the logger owned by `T`, using type naming.
    pub fn of_type<T: ?Sized + 'static>() -> Self {
        Context::of_type::<T>().resolve(NamingStrategy::ByType)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Dotted segments, outermost first. The root name has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    /// The enclosing name, or `None` for the root.
    pub fn parent(&self) -> Option<LoggerName> {
        if self.is_root() {
            return None;
        }
        Some(match self.0.rfind(SEPARATOR) {
            Some(idx) => Self(Arc::from(self.0.get(..idx).unwrap_or_default())),
            None => Self::root(),
        })
    }

    /// Check whether `prefix` names this logger or one of its ancestors.
    ///
    /// Matching respects segment boundaries: `app.db` is within `app`,
    /// but `app.dbx` is not within `app.db`. Every name is within the root.
    pub fn is_within(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        match self.0.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
            None => false,
        }
    }
}

impl fmt::Display for LoggerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for LoggerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LoggerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoggerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for LoggerName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// How a logger is named when both rules could apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
pub enum NamingStrategy {
    /// Name after the owning static type.
    #[default]
    #[cfg_attr(feature = "config", serde(rename = "type", alias = "by-type"))]
    ByType,
    /// Name after the declared symbol and its enclosing scopes.
    #[cfg_attr(feature = "config", serde(rename = "symbol", alias = "by-symbol"))]
    BySymbol,
}

impl FromStr for NamingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "type" | "by-type" => Ok(Self::ByType),
            "symbol" | "by-symbol" => Ok(Self::BySymbol),
            other => Err(format!("unknown naming strategy '{other}': expected type or symbol")),
        }
    }
}

/// What kind of item a [`Scope`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// A module. Always statically addressable.
    Module,
    /// Module-level items standing in for their owning module. Contributes
    /// no segment of its own.
    Companion,
    /// A struct, enum or trait.
    Type,
    /// A single statically reachable value, such as a `static` item.
    Singleton,
}

/// One named enclosing scope of a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub name: Cow<'static, str>,
    pub kind: ScopeKind,
}

impl Scope {
    pub fn new(name: impl Into<Cow<'static, str>>, kind: ScopeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Shape of the innermost scope of a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    TopLevel,
    Nested,
    Singleton,
}

/// The place a logger is requested from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    scopes: Vec<Scope>,
    type_name: Option<&'static str>,
    type_id: Option<TypeId>,
}

impl Context {
    /// A context with no enclosing scopes.
    pub fn root() -> Self {
        Self::default()
    }

    /// A context for module-level code at `path`, usually `module_path!()`.
    pub fn module(path: &'static str) -> Self {
        let scopes = path
            .split("::")
            .filter(|s| !s.is_empty())
            .map(|s| Scope::new(s, ScopeKind::Module))
            .collect();
        Self {
            scopes,
            ..Self::default()
        }
    }

    /// A context owned by the type `T`.
    ///
    /// Scopes come from the type's path. Types that are not plain paths
    /// (tuples, slices, closures) get a single scope holding the raw name.
    pub fn of_type<T: ?Sized + 'static>() -> Self {
        let raw = std::any::type_name::<T>();
        let scopes = match erase_type_name(raw) {
            Some(erased) => {
                let mut segments: Vec<&'static str> = erased.path.split("::").collect();
                let last = segments.pop().unwrap_or(raw);
                segments
                    .into_iter()
                    .map(|s| Scope::new(s, ScopeKind::Module))
                    .chain(std::iter::once(Scope::new(last, ScopeKind::Type)))
                    .collect()
            }
            None => vec![Scope::new(raw, ScopeKind::Type)],
        };
        Self {
            scopes,
            type_name: Some(raw),
            type_id: Some(TypeId::of::<T>()),
        }
    }

    /// Attach `T` as the static type of the innermost scope.
    pub fn typed<T: ?Sized + 'static>(mut self) -> Self {
        self.type_name = Some(std::any::type_name::<T>());
        self.type_id = Some(TypeId::of::<T>());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn ty(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.scope(Scope::new(name, ScopeKind::Type))
    }

    pub fn singleton(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.scope(Scope::new(name, ScopeKind::Singleton))
    }

    pub fn companion(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.scope(Scope::new(name, ScopeKind::Companion))
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    pub fn kind(&self) -> ContextKind {
        match self.scopes.split_last() {
            Some((last, _)) if last.kind == ScopeKind::Singleton => ContextKind::Singleton,
            Some((last, owners)) if last.kind == ScopeKind::Type => match owners.last() {
                Some(owner) if matches!(owner.kind, ScopeKind::Type | ScopeKind::Singleton) => {
                    ContextKind::Nested
                }
                _ => ContextKind::TopLevel,
            },
            _ => ContextKind::TopLevel,
        }
    }

    /// Derive the logger name for this context.
    pub fn resolve(&self, strategy: NamingStrategy) -> LoggerName {
        let by_symbol = match self.kind() {
            ContextKind::Nested => true,
            ContextKind::Singleton => strategy == NamingStrategy::BySymbol,
            ContextKind::TopLevel => false,
        };
        if by_symbol {
            return self.name_by_symbol();
        }
        self.name_by_type()
            .unwrap_or_else(|| self.name_by_symbol())
    }

    fn name_by_type(&self) -> Option<LoggerName> {
        let erased = erase_type_name(self.type_name?)?;
        if erased.higher_kinded {
            return None;
        }
        Some(LoggerName::new(erased.path))
    }

    fn name_by_symbol(&self) -> LoggerName {
        let mut segments: Vec<&str> = Vec::with_capacity(self.scopes.len());
        let mut rest = self.scopes.as_slice();

        while let Some((scope, owners)) = rest.split_last() {
            if scope.kind == ScopeKind::Companion {
                rest = owners;
                continue;
            }
            if is_static(owners) {
                // Statically addressable: take its full path and stop.
                segments.extend(
                    rest.iter()
                        .rev()
                        .filter(|s| s.kind != ScopeKind::Companion)
                        .map(|s| s.name.as_ref()),
                );
                break;
            }
            segments.push(scope.name.as_ref());
            rest = owners;
        }

        segments.reverse();
        LoggerName::new(segments.join("."))
    }
}

fn is_static(owners: &[Scope]) -> bool {
    owners.iter().all(|s| s.kind != ScopeKind::Type)
}

/// A type name with its generic arguments removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErasedType<'a> {
    /// Path without generic arguments, with `::` separators.
    pub path: &'a str,
    /// Whether any generic argument itself has generic arguments.
    pub higher_kinded: bool,
}

/// Strip generic arguments from a `type_name` string.
///
/// References and `dyn` prefixes are looked through. Returns `None` when the
/// name is not a plain path: tuples, slices, arrays, pointers, function types
/// and closures.
///
/// ```
/// use lazylog::naming::erase_type_name;
///
/// let erased = erase_type_name("app::Wrapper<u32>").unwrap();
/// assert_eq!(erased.path, "app::Wrapper");
/// assert!(!erased.higher_kinded);
/// assert!(erase_type_name("(u8, u16)").is_none());
/// ```
pub fn erase_type_name(raw: &str) -> Option<ErasedType<'_>> {
    let mut name = raw.trim();
    loop {
        let stripped = name
            .strip_prefix("&mut ")
            .or_else(|| name.strip_prefix('&'))
            .or_else(|| name.strip_prefix("dyn "));
        match stripped {
            Some(rest) => name = rest.trim_start(),
            None => break,
        }
    }

    let (path, args) = match name.find('<') {
        Some(idx) => (name.get(..idx)?, name.get(idx..)?),
        None => (name, ""),
    };

    let plain_path = !path.is_empty()
        && !path.starts_with(':')
        && !path.ends_with(':')
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == ':');
    if !plain_path {
        return None;
    }

    let higher_kinded = if args.is_empty() {
        false
    } else {
        let inner = args.strip_prefix('<')?.strip_suffix('>')?;
        inner.contains('<')
    };

    Some(ErasedType {
        path,
        higher_kinded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    struct Alpha;
    #[allow(dead_code)]
    struct Wrapper<T>(T);

    #[test]
    fn test_logger_name_normalizes_paths() {
        assert_eq!(LoggerName::new("app::db::Pool").as_str(), "app.db.Pool");
        assert_eq!(LoggerName::new(" app.db ").as_str(), "app.db");
        assert_eq!(LoggerName::new("app.db.").as_str(), "app.db");
        assert_eq!(LoggerName::new("app::").as_str(), "app");
        assert!(LoggerName::new("").is_root());
        assert!(LoggerName::new(".").is_root());
    }

    #[test]
    fn test_logger_name_parent_and_segments() {
        let name = LoggerName::new("app.db.Pool");
        assert_eq!(name.segments().collect::<Vec<_>>(), ["app", "db", "Pool"]);
        assert_eq!(name.parent(), Some(LoggerName::new("app.db")));
        assert_eq!(LoggerName::new("app").parent(), Some(LoggerName::root()));
        assert_eq!(LoggerName::root().parent(), None);
        assert_eq!(LoggerName::root().segments().count(), 0);
    }

    #[test]
    fn test_logger_name_is_within() {
        let name = LoggerName::new("app.db.Pool");
        assert!(name.is_within("app"));
        assert!(name.is_within("app.db"));
        assert!(name.is_within("app.db.Pool"));
        assert!(name.is_within(""));
        assert!(!name.is_within("app.d"));
        assert!(!name.is_within("app.db.Pool.Inner"));
    }

    #[test]
    fn test_erase_type_name() {
        let plain = erase_type_name("app::Alpha");
        assert_eq!(plain.map(|e| e.path), Some("app::Alpha"));

        let generic = erase_type_name("app::Wrapper<alloc::string::String, u8>");
        assert_eq!(generic.map(|e| e.path), Some("app::Wrapper"));
        assert_eq!(generic.map(|e| e.higher_kinded), Some(false));

        let nested = erase_type_name("app::Wrapper<alloc::vec::Vec<u8>>");
        assert_eq!(nested.map(|e| e.higher_kinded), Some(true));

        assert_eq!(erase_type_name("&mut app::Alpha").map(|e| e.path), Some("app::Alpha"));
        assert_eq!(erase_type_name("&dyn app::Speak").map(|e| e.path), Some("app::Speak"));
        assert_eq!(erase_type_name("u32").map(|e| e.path), Some("u32"));
    }

    #[test]
    fn test_erase_rejects_non_paths() {
        assert!(erase_type_name("(u8, u16)").is_none());
        assert!(erase_type_name("[u8]").is_none());
        assert!(erase_type_name("[u8; 4]").is_none());
        assert!(erase_type_name("*const u8").is_none());
        assert!(erase_type_name("fn(u8) -> u8").is_none());
        assert!(erase_type_name("app::main::{{closure}}").is_none());
        assert!(erase_type_name("dyn app::Speak + Send").is_none());
        assert!(erase_type_name("<app::A as app::T>::Out").is_none());
    }

    #[test]
    fn test_context_kind() {
        assert_eq!(Context::root().kind(), ContextKind::TopLevel);
        assert_eq!(Context::module("app::db").kind(), ContextKind::TopLevel);
        assert_eq!(Context::module("app").ty("Alpha").kind(), ContextKind::TopLevel);
        assert_eq!(Context::module("app").singleton("CACHE").kind(), ContextKind::Singleton);
        assert_eq!(
            Context::module("app").ty("Outer").ty("Inner").kind(),
            ContextKind::Nested
        );
        assert_eq!(
            Context::module("app").singleton("Outer").ty("Inner").kind(),
            ContextKind::Nested
        );
    }

    #[test]
    fn test_top_level_type() {
        let ctx = Context::root().ty("Alpha");
        assert_eq!(ctx.resolve(NamingStrategy::ByType).as_str(), "Alpha");
        assert_eq!(ctx.resolve(NamingStrategy::BySymbol).as_str(), "Alpha");
    }

    #[test]
    fn test_module_context() {
        let ctx = Context::module("app::db");
        assert_eq!(ctx.resolve(NamingStrategy::ByType).as_str(), "app.db");
    }

    #[test]
    fn test_nested_type() {
        let ctx = Context::root().singleton("Outer").ty("Inner");
        assert_eq!(ctx.resolve(NamingStrategy::ByType).as_str(), "Outer.Inner");

        let deep = Context::module("app").ty("A").ty("B").ty("C");
        assert_eq!(deep.resolve(NamingStrategy::ByType).as_str(), "app.A.B.C");
    }

    #[test]
    fn test_nested_ignores_type_descriptor() {
        let ctx = Context::module("app").ty("Outer").ty("Inner").typed::<Alpha>();
        assert_eq!(ctx.resolve(NamingStrategy::ByType).as_str(), "app.Outer.Inner");
    }

    #[test]
    fn test_companion_scope_is_dropped() {
        let ctx = Context::module("app::db").companion("items").ty("Pool");
        assert_eq!(ctx.resolve(NamingStrategy::ByType).as_str(), "app.db.Pool");

        let only = Context::module("app::db").companion("items");
        assert_eq!(only.resolve(NamingStrategy::BySymbol).as_str(), "app.db");
    }

    #[test]
    fn test_singleton_strategy() {
        let ctx = Context::module("app").singleton("REGISTRY").typed::<Alpha>();
        let by_type = ctx.resolve(NamingStrategy::ByType);
        let by_symbol = ctx.resolve(NamingStrategy::BySymbol);

        assert!(by_type.as_str().ends_with(".Alpha"));
        assert_eq!(by_symbol.as_str(), "app.REGISTRY");
    }

    #[test]
    fn test_of_type_erases_generics() {
        let expected = format!("{}.Wrapper", module_path!().replace("::", "."));
        assert_eq!(LoggerName::of_type::<Wrapper<u32>>().as_str(), expected);
        assert_eq!(LoggerName::of_type::<Wrapper<Vec<u8>>>().as_str(), expected);
    }

    #[test]
    fn test_of_type_non_path() {
        let name = LoggerName::of_type::<(u8, u16)>();
        assert_eq!(name.as_str(), "(u8, u16)");
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("symbol".parse::<NamingStrategy>().ok(), Some(NamingStrategy::BySymbol));
        assert_eq!("By-Type".parse::<NamingStrategy>().ok(), Some(NamingStrategy::ByType));
        assert!("class".parse::<NamingStrategy>().is_err());
    }
}
