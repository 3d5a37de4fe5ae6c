//! Command filter: marks the units whose directives ask for a given command.
//!
//! A filter `mock` matches the command `mock` itself and any namespaced command such as
//! `mock:iface`, but not `mocking`.

use super::types::Directive;

/// A unit the filter can inspect and mark for generation.
pub trait ParsingUnit {
    /// Directives from the unit's header comment.
    fn directives(&self) -> &[Directive];

    /// Directives attached to declarations inside the unit.
    fn inline_directives(&self) -> &[Directive];

    /// Mark the unit as included. Calling it again has no further effect.
    fn include(&mut self);

    fn is_included(&self) -> bool;
}

/// Source of the units a filter pass runs over.
pub trait FilterEngine {
    fn parsing_units(&mut self) -> Vec<&mut dyn ParsingUnit>;
}

impl<U: ParsingUnit> FilterEngine for Vec<U> {
    fn parsing_units(&mut self) -> Vec<&mut dyn ParsingUnit> {
        self.iter_mut().map(|u| u as &mut dyn ParsingUnit).collect()
    }
}

pub fn filter_by_command(command: impl Into<String>) -> CommandFilter {
    CommandFilter(command.into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFilter(String);

impl CommandFilter {
    pub fn command(&self) -> &str {
        &self.0
    }

    /// Include units whose header directives match. Returns the number of matching units.
    pub fn filter<E: FilterEngine + ?Sized>(&self, engine: &mut E) -> usize {
        let mut matched = 0;
        for unit in engine.parsing_units() {
            if self.include(unit.directives()) {
                unit.include();
                matched += 1;
            }
        }
        matched
    }

    /// Like [`filter`](Self::filter), falling back to inline directives when the header
    /// does not match.
    pub fn filter_all<E: FilterEngine + ?Sized>(&self, engine: &mut E) -> usize {
        let mut matched = 0;
        for unit in engine.parsing_units() {
            if self.include(unit.directives()) || self.include(unit.inline_directives()) {
                unit.include();
                matched += 1;
            }
        }
        matched
    }

    /// Whether any directive names this command, exactly or as a `command:` namespace.
    pub fn include(&self, directives: &[Directive]) -> bool {
        directives.iter().any(|d| self.matches(d.cmd()))
    }

    fn matches(&self, cmd: &str) -> bool {
        cmd.strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
    }
}
