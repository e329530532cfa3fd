//! Data model for parsed module documentation — format-agnostic.

use std::collections::BTreeMap;
use std::fmt;

/// Recognized section header keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Description,
    BuildDepends,
    Depends,
    Processing,
    Media,
    Input,
    Output,
    Option,
}

/// How lines under a section header are accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Lines are joined into one space-separated string.
    Text,
    /// Each line is a comma-separated list replacing the previous value.
    List,
    /// `name (type)` headers followed by multi-line descriptions.
    Options,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Description,
        Section::BuildDepends,
        Section::Depends,
        Section::Processing,
        Section::Media,
        Section::Input,
        Section::Output,
        Section::Option,
    ];

    /// The exact header token as written in sources.
    pub fn keyword(self) -> &'static str {
        match self {
            Section::Description => "DESCRIPTION",
            Section::BuildDepends => "BUILD-DEPENDS",
            Section::Depends => "DEPENDS",
            Section::Processing => "PROCESSING",
            Section::Media => "MEDIA",
            Section::Input => "INPUT",
            Section::Output => "OUTPUT",
            Section::Option => "OPTION",
        }
    }

    pub fn kind(self) -> SectionKind {
        match self {
            Section::Description
            | Section::BuildDepends
            | Section::Depends
            | Section::Processing => SectionKind::Text,
            Section::Media | Section::Input | Section::Output => SectionKind::List,
            Section::Option => SectionKind::Options,
        }
    }

    /// Match a content line against the keyword set (exact, case-sensitive).
    pub fn from_keyword(line: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.keyword() == line)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Key of an `OPTION` record: the option name and its type without parentheses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionKey {
    pub name: String,
    pub value_type: String,
}

impl OptionKey {
    pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value_type)
    }
}

/// Typed value accumulated under one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    Text(String),
    List(Vec<String>),
    Options(BTreeMap<OptionKey, String>),
}

/// Parsed sections of one artifact, keyed by section.
pub type Sections = BTreeMap<Section, SectionValue>;

/// Complete parsed documentation of a single module source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModuleDoc {
    /// Display name, e.g. "x11" for `import_x11.c`
    pub name: String,
    /// Label of the originating source, e.g. "import_x11.c"
    pub source: String,
    pub sections: Sections,
}

impl ModuleDoc {
    pub fn new(name: impl Into<String>, source: impl Into<String>, sections: Sections) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn text(&self, section: Section) -> Option<&str> {
        match self.sections.get(&section) {
            Some(SectionValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn list(&self, section: Section) -> Option<&[String]> {
        match self.sections.get(&section) {
            Some(SectionValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn options(&self) -> Option<&BTreeMap<OptionKey, String>> {
        match self.sections.get(&Section::Option) {
            Some(SectionValue::Options(opts)) => Some(opts),
            _ => None,
        }
    }
}
