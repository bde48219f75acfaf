//! `hyforge forms`: list what the default lowerer recognizes.

use comfy_table::{Table, presets::UTF8_FULL};
use hyforge_core::Lowerer;

pub fn forms_table(lowerer: &Lowerer) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Form", "Kind", "Arguments"]);

    for name in lowerer.structural_forms().names() {
        table.add_row(vec![name, "structural", "raw"]);
    }
    for name in lowerer.special_forms().names() {
        if lowerer.structural_forms().contains(name) {
            // shadowed by the structural table
            continue;
        }
        table.add_row(vec![name, "special", "lowered"]);
    }
    table
}
