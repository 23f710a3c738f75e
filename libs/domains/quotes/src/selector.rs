//! Machine selection policy.
//!
//! Small parts in easy materials go to the compact printer; everything else
//! goes to the large-format one. Matching is by name substring so catalog
//! edits don't require code changes; first match wins when several names
//! share a substring.

use crate::error::{QuoteError, QuoteResult};
use crate::models::Machine;

/// Parts at or below this size can run on the compact printer.
const SMALL_PART_MAX_CM: f64 = 15.0;
/// ABS needs an enclosed chamber, which the compact printer lacks.
const ENCLOSED_MATERIAL: &str = "ABS";

const COMPACT_PRINTER: &str = "A1 Mini";
const LARGE_FORMAT_PRINTER: &str = "K2 Plus";

fn find_by_name<'a>(machines: &'a [Machine], needle: &str) -> Option<&'a Machine> {
    machines.iter().find(|m| m.name.contains(needle))
}

/// Choose the production machine for a part.
///
/// Small (≤ 15 cm) parts in anything but ABS prefer the compact printer,
/// falling back to the first machine in the catalog. Large parts and ABS
/// prefer the large-format printer, falling back to the last machine.
/// The asymmetric fallbacks are intentional: the catalog is ordered
/// cheapest-first, so the default is the cheap machine and the large-part
/// fallback is the most capable one.
pub fn select_machine<'a>(
    size_cm: f64,
    material: &str,
    machines: &'a [Machine],
) -> QuoteResult<&'a Machine> {
    if machines.is_empty() {
        return Err(QuoteError::EmptyCatalog);
    }

    let machine = if size_cm <= SMALL_PART_MAX_CM && !material.eq_ignore_ascii_case(ENCLOSED_MATERIAL)
    {
        find_by_name(machines, COMPACT_PRINTER).unwrap_or(&machines[0])
    } else {
        match find_by_name(machines, LARGE_FORMAT_PRINTER) {
            Some(machine) => machine,
            None => &machines[machines.len() - 1],
        }
    };

    Ok(machine)
}
