use serde::{Deserialize, Serialize};

use crate::location::Location;

use super::node::TargetNode;

/// The top-level container handed to an execution backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramUnit {
    /// Module name; used for diagnostics and as the file of backfilled locations.
    pub name: String,
    pub body: Vec<TargetNode>,
}

impl ProgramUnit {
    pub fn new(name: impl Into<String>, body: Vec<TargetNode>) -> Self {
        ProgramUnit { name: name.into(), body }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Location every top-level statement without one of its own inherits.
    pub fn root_location(&self) -> Location {
        Location::new(self.name.clone(), 1, 1)
    }

    /// Give every node in the tree a location. A node that has none inherits
    /// the location of its parent; top-level statements inherit `root_location`.
    pub fn fix_missing_locations(&mut self) {
        fn fix(node: &mut TargetNode, parent: &Location) {
            if node.location.is_none() {
                node.location = Some(parent.clone());
            }
            let here = node.location.clone().unwrap_or_else(|| parent.clone());
            for child in node.children_mut() {
                fix(child, &here);
            }
        }

        let root = self.root_location();
        for stmt in self.body.iter_mut() {
            fix(stmt, &root);
        }
    }

    /// True when every node in the tree carries a location.
    pub fn is_fully_located(&self) -> bool {
        fn located(node: &TargetNode) -> bool {
            node.location.is_some() && node.children().into_iter().all(located)
        }
        self.body.iter().all(located)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for ProgramUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# module {}", self.name)?;
        for stmt in self.body.iter() {
            stmt.write_stmt(f, 0)?;
        }
        Ok(())
    }
}
