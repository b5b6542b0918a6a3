//! Hook adapter between the documentation build and the scrubbing logic.
//!
//! A build host drives two events: one carrying each page's source text
//! before it is parsed, and one asking whether a candidate member belongs in
//! the generated API docs. [`ScrubExtension`] answers both.

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashMap;

use crate::cleaner::clean_source;
use crate::config::{InclusionTable, ScrubConfig};
use crate::members::{MemberDescriptor, MemberFilter, MemberKind};

/// Event surface a documentation build host calls into.
///
/// `on_source_read` mirrors the host convention of passing the page text as
/// the first element of a mutable container, to be updated in place.
/// `on_skip_member` returns the exclusion decision directly.
pub trait AutodocHooks {
    /// Name the extension registers under.
    fn name(&self) -> &'static str;

    /// Rewrite a page's source text before parsing.
    fn on_source_read(&self, docname: &str, source: &mut Vec<String>);

    /// Whether the named member should be excluded from the docs.
    fn on_skip_member(
        &self,
        what: &str,
        name: &str,
        default_skip: bool,
        options: &HashMap<String, String>,
    ) -> bool;
}

/// The scrubbing extension: cleans generated page sources and filters
/// members out of the API docs.
pub struct ScrubExtension {
    filter: MemberFilter,
}

impl Default for ScrubExtension {
    fn default() -> Self {
        Self::new(ScrubConfig::default())
    }
}

impl ScrubExtension {
    /// Build the extension from an already assembled configuration.
    pub fn new(config: ScrubConfig) -> Self {
        info!(
            "Scrub extension ready, inclusion table covers {} module(s)",
            config.include_members.module_count()
        );
        Self {
            filter: MemberFilter::new(config.include_members),
        }
    }

    /// Build the extension from YAML configuration text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config =
            ScrubConfig::from_yaml_str(text).context("Failed to load scrub configuration")?;
        Ok(Self::new(config))
    }

    /// The allow-list carried by the member filter.
    pub fn inclusion_table(&self) -> &InclusionTable {
        self.filter.inclusion_table()
    }
}

impl AutodocHooks for ScrubExtension {
    fn name(&self) -> &'static str {
        "sphinx_scrub"
    }

    fn on_source_read(&self, docname: &str, source: &mut Vec<String>) {
        if let Some(text) = source.first_mut() {
            let cleaned = clean_source(text);
            debug!(
                "Cleaned source of '{}' ({} -> {} bytes)",
                docname,
                text.len(),
                cleaned.len()
            );
            *text = cleaned;
        }
    }

    fn on_skip_member(
        &self,
        what: &str,
        name: &str,
        _default_skip: bool,
        _options: &HashMap<String, String>,
    ) -> bool {
        let member = MemberDescriptor::new(MemberKind::from_what(what), name);
        let skip = self.filter.should_skip(&member);
        if skip {
            debug!("Skipping {} '{}'", member.kind, member.name);
        }
        skip
    }
}
