use std::io::{self, Write};

use crate::types::Detection;

/// One `"<language>: MSE <distance>"` line per detection, in the given order
pub fn format_report(detections: &[Detection]) -> Vec<String> {
    detections.iter().map(ToString::to_string).collect()
}

pub fn print_report<W: Write>(detections: &[Detection], mut out: W) -> io::Result<()> {
    for line in format_report(detections) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
