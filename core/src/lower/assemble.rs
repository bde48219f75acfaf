//! Program assembly: lower a forest of top-level trees into one `ProgramUnit`.

use log::debug;

use crate::target::ProgramUnit;
use crate::tree::SourceNode;

use super::err::LoweringError;
use super::{Lowered, Lowerer};

impl Lowerer {
    /// Lower every tree in order and backfill locations. A top-level `do`
    /// contributes its statements in place. Any failure aborts the whole pass.
    pub fn assemble(&self, name: &str, forest: &[SourceNode]) -> Result<ProgramUnit, LoweringError> {
        let mut body = Vec::with_capacity(forest.len());
        for tree in forest {
            match self.lower(tree)? {
                Lowered::Single(node) => body.push(node),
                Lowered::Sequence(nodes) => body.extend(nodes),
            }
        }

        let mut unit = ProgramUnit::new(name, body);
        unit.fix_missing_locations();
        debug!("assembled `{}`: {} top-level form(s) -> {} statement(s)", name, forest.len(), unit.len());
        Ok(unit)
    }
}

/// Lower `forest` with the default form tables.
pub fn assemble_program(name: &str, forest: &[SourceNode]) -> Result<ProgramUnit, LoweringError> {
    Lowerer::new().assemble(name, forest)
}
