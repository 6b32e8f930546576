//! Core data model shared by the index builder, the search pipeline and the formatter.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Category of an indexed item.
///
/// Discriminants mirror the `kindCode`s of the raw search index. They are
/// load-bearing: the derived `Ord` is the kind tie-break used when ranking, and
/// [`ItemKind::as_str`] is the page prefix used when generating links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    Module = 0,
    ExternCrate = 1,
    Import = 2,
    Struct = 3,
    Enum = 4,
    Function = 5,
    TypeAlias = 6,
    Static = 7,
    Trait = 8,
    Impl = 9,
    TyMethod = 10,
    Method = 11,
    StructField = 12,
    Variant = 13,
    Macro = 14,
    Primitive = 15,
    AssocType = 16,
    Constant = 17,
}

impl ItemKind {
    /// Every kind, in discriminant order.
    pub const ALL: [Self; 18] = [
        Self::Module,
        Self::ExternCrate,
        Self::Import,
        Self::Struct,
        Self::Enum,
        Self::Function,
        Self::TypeAlias,
        Self::Static,
        Self::Trait,
        Self::Impl,
        Self::TyMethod,
        Self::Method,
        Self::StructField,
        Self::Variant,
        Self::Macro,
        Self::Primitive,
        Self::AssocType,
        Self::Constant,
    ];

    /// Look up a kind by its raw index code.
    pub fn from_code(code: u64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|code| Self::ALL.get(code).copied())
    }

    /// The raw index code of this kind.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Name used in documentation page file names (`struct.Vec.html`) and anchors.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "mod",
            Self::ExternCrate => "externcrate",
            Self::Import => "import",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Function => "fn",
            Self::TypeAlias => "type",
            Self::Static => "static",
            Self::Trait => "trait",
            Self::Impl => "impl",
            Self::TyMethod => "tymethod",
            Self::Method => "method",
            Self::StructField => "structfield",
            Self::Variant => "variant",
            Self::Macro => "macro",
            Self::Primitive => "primitive",
            Self::AssocType => "associatedtype",
            Self::Constant => "constant",
        }
    }

    /// Inverse of [`ItemKind::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ItemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An entry of a group's path table: the kind and name of a container item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub kind: ItemKind,
    pub name: String,
}

/// A named type in a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeName {
    pub name: String,
}

/// Input and output types of a function-like item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub inputs: Vec<TypeName>,
    #[serde(default)]
    pub output: Option<TypeName>,
}

/// A single indexed item.
///
/// Records are addressed by their position in [`crate::SearchIndex`]; that
/// position is assigned once at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    /// Group (crate) the item was indexed from.
    pub group: String,
    pub kind: ItemKind,
    pub name: String,
    /// Fully-qualified path of the item's container, e.g. `std::fs`.
    pub path: String,
    pub description: String,
    pub parent: Option<PathEntry>,
    pub signature: Option<Signature>,
}

/// One formatted search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Human-readable path, e.g. `std::fs::File::open`.
    pub display: String,
    /// Link to the item's documentation page.
    pub url: String,
}
