//! Extract command handler

use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;

use drillcraft::{DrillExtraction, DrillExtractor};

use super::{print_json, read_input};

/// Extract drills from stdin or from each file.
///
/// A single input prints one result object; several files print an array in
/// argument order.
#[cfg(not(tarpaulin_include))]
pub fn handle_extract(
    extractor: &DrillExtractor,
    files: &[PathBuf],
    drills_only: bool,
    pretty: bool,
) -> Result<()> {
    if files.len() <= 1 {
        let content = read_input(files.first().map(PathBuf::as_path))?;
        let result = extractor.extract(&content);
        return print_result(&result, drills_only, pretty);
    }

    let results = files
        .par_iter()
        .map(|path| read_input(Some(path)).map(|content| extractor.extract(&content)))
        .collect::<Result<Vec<_>>>()?;

    if drills_only {
        let drills: Vec<_> = results.iter().map(|r| &r.drills).collect();
        print_json(&drills, pretty)
    } else {
        print_json(&results, pretty)
    }
}

fn print_result(result: &DrillExtraction, drills_only: bool, pretty: bool) -> Result<()> {
    if drills_only {
        print_json(&result.drills, pretty)
    } else {
        print_json(result, pretty)
    }
}
