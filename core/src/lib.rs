pub mod error;
pub mod location;
pub mod lower;
pub mod target;
pub mod tree;

pub use error::{HyforgeErrorExt, Level};
pub use location::{Location, Span};
pub use lower::{assemble_program, Lowered, Lowerer, LoweringError, LoweringErrorKind};
pub use target::{ProgramUnit, TargetKind, TargetNode};
pub use tree::{SourceKind, SourceNode};

pub fn generate_error_report<E: HyforgeErrorExt + ?Sized>(error: &E) -> String {
    let level = error.level();
    let location = match error.location() {
        Some(loc) => loc.to_string(),
        None => "unknown location".to_string(),
    };
    let message = error.message();

    format!("HYFORGE | {} | {} | {}", level, location, message)
}

/// Lower a forest into a located program unit, reporting failures through the
/// common error surface.
pub fn compile_forest(
    name: &str,
    forest: &[SourceNode],
) -> Result<ProgramUnit, Box<dyn HyforgeErrorExt>> {
    let unit = assemble_program(name, forest)?;
    Ok(unit)
}
