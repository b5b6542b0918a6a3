//! Member filtering for generated API docs.
//!
//! The generator asks, once per candidate member, whether the member should
//! be left out of the documentation. The decision here is intentionally
//! blunt: private names and raw attributes stay out, everything else stays
//! in.

use std::fmt;

use crate::config::InclusionTable;

/// Classification the generator reports for a candidate member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Module,
    Class,
    Exception,
    Function,
    Method,
    Attribute,
    Property,
    Data,
    /// Any kind outside the known set. Such members fall through to the
    /// "include" branch unless the name rules fire.
    Other(String),
}

impl MemberKind {
    /// Parse the kind string the generator hands to the hook.
    pub fn from_what(what: &str) -> Self {
        match what {
            "module" => MemberKind::Module,
            "class" => MemberKind::Class,
            "exception" => MemberKind::Exception,
            "function" => MemberKind::Function,
            "method" => MemberKind::Method,
            "attribute" => MemberKind::Attribute,
            "property" => MemberKind::Property,
            "data" => MemberKind::Data,
            other => MemberKind::Other(other.to_string()),
        }
    }

    /// The kind name as the generator spells it.
    pub fn as_str(&self) -> &str {
        match self {
            MemberKind::Module => "module",
            MemberKind::Class => "class",
            MemberKind::Exception => "exception",
            MemberKind::Function => "function",
            MemberKind::Method => "method",
            MemberKind::Attribute => "attribute",
            MemberKind::Property => "property",
            MemberKind::Data => "data",
            MemberKind::Other(name) => name,
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate documentation member, as reported by the generator.
///
/// Transient: built for one filter query and discarded afterwards.
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    pub kind: MemberKind,
    /// The name exactly as handed over by the generator.
    pub name: String,
}

impl MemberDescriptor {
    pub fn new(kind: MemberKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Decides which members stay out of the generated API docs.
pub struct MemberFilter {
    /// Allow-list of members per module and class. Built once and carried
    /// here, but not consulted by [`MemberFilter::should_skip`]; the generic
    /// rules below do all the gating.
    include_members: InclusionTable,
}

impl Default for MemberFilter {
    fn default() -> Self {
        Self::new(InclusionTable::new())
    }
}

impl MemberFilter {
    /// Create a filter holding the given allow-list.
    pub fn new(include_members: InclusionTable) -> Self {
        Self { include_members }
    }

    /// Whether a member should be excluded from the documentation.
    ///
    /// First match wins: `__init__` is excluded, then any name with a
    /// leading underscore, then any attribute. Everything else is included,
    /// including members of unknown kind.
    // TODO: decide whether the allow-list in `include_members` should gate
    // members ahead of the underscore rules (it would re-admit the
    // `Inferences.__init__` entry the shipped table lists), or whether the
    // table should be deleted instead.
    pub fn should_skip(&self, member: &MemberDescriptor) -> bool {
        if member.name == "__init__" {
            return true;
        }
        if member.name.starts_with('_') {
            return true;
        }
        if member.kind == MemberKind::Attribute {
            return true;
        }
        false
    }

    /// The allow-list this filter was built with.
    pub fn inclusion_table(&self) -> &InclusionTable {
        &self.include_members
    }
}
