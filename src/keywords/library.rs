use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use tracing::debug;

use super::keyword::KeywordInfo;
use crate::core::MethodSignature;
use crate::introspection::{LibraryConstant, TypeIntrospection};

/// Keyword view over one introspected type.
///
/// Constants and keywords are read from the type on first access and cached
/// for the descriptor's lifetime; the type is assumed not to change.
#[derive(Debug)]
pub struct LibraryDescriptor<T> {
    library_type: T,
    version: OnceCell<Option<String>>,
    scope: OnceCell<Option<String>>,
    doc_format: OnceCell<Option<String>>,
    keywords: OnceCell<IndexMap<String, KeywordInfo>>,
}

/// Describe a type as a keyword library
pub fn describe<T: TypeIntrospection>(library_type: T) -> LibraryDescriptor<T> {
    LibraryDescriptor::new(library_type)
}

impl<T: TypeIntrospection> LibraryDescriptor<T> {
    pub fn new(library_type: T) -> Self {
        Self {
            library_type,
            version: OnceCell::new(),
            scope: OnceCell::new(),
            doc_format: OnceCell::new(),
            keywords: OnceCell::new(),
        }
    }

    pub fn library_type(&self) -> &T {
        &self.library_type
    }

    pub fn type_name(&self) -> &str {
        self.library_type.type_name()
    }

    /// Read a library constant straight from the type, uncached
    pub fn constant(&self, constant: LibraryConstant) -> Option<String> {
        self.library_type
            .public_static_string_field(constant.field_name())
    }

    pub fn version(&self) -> Option<&str> {
        self.version
            .get_or_init(|| self.constant(LibraryConstant::Version))
            .as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope
            .get_or_init(|| self.constant(LibraryConstant::Scope))
            .as_deref()
    }

    pub fn doc_format(&self) -> Option<&str> {
        self.doc_format
            .get_or_init(|| self.constant(LibraryConstant::DocFormat))
            .as_deref()
    }

    /// Keywords by name, in the order their first overload was enumerated
    pub fn keywords(&self) -> &IndexMap<String, KeywordInfo> {
        self.keywords
            .get_or_init(|| collect_keywords(&self.library_type))
    }

    pub fn keyword(&self, name: &str) -> Option<&KeywordInfo> {
        self.keywords().get(name)
    }

    pub fn keyword_names(&self) -> impl Iterator<Item = &str> {
        self.keywords().keys().map(String::as_str)
    }
}

fn collect_keywords<T: TypeIntrospection>(library_type: &T) -> IndexMap<String, KeywordInfo> {
    let keywords: IndexMap<String, KeywordInfo> = group_by_name(
        library_type
            .public_methods()
            .into_iter()
            .filter(|method| !method.is_universal_root_member()),
    )
    .into_iter()
    .map(|(name, methods)| (name.clone(), KeywordInfo::from_group(name, methods)))
    .collect();

    debug!(
        library = library_type.type_name(),
        keywords = keywords.len(),
        "collected keywords"
    );

    keywords
}

// Pure function: exact-name groups, each holding at least one member
fn group_by_name(
    methods: impl IntoIterator<Item = MethodSignature>,
) -> IndexMap<String, Vec<MethodSignature>> {
    let mut groups: IndexMap<String, Vec<MethodSignature>> = IndexMap::new();
    for method in methods {
        groups.entry(method.name.clone()).or_default().push(method);
    }
    groups
}
