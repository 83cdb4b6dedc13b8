// this_file: fontindex/src/collect.rs
//
// One-shot catalog collection

use crate::{
    font::{FontDescription, Webfont},
    index::Indices,
    source::WebfontSource,
    utils::write_json,
    Result,
};
use std::path::Path;

/// Fetch the catalog and build both indices.
///
/// Stops at the first record that fails validation; nothing built so far is
/// returned in that case.
pub fn collect_all<S: WebfontSource + ?Sized>(source: &S) -> Result<Indices> {
    let items = source.list()?;
    log::info!("Received {} catalog records", items.len());

    let mut indices = Indices::new();
    for item in &items {
        let font = Webfont::from_value(item)?;
        let desc = FontDescription::from_webfont(&font)?;
        log::debug!("Indexed {} ({} tags)", desc.id, desc.tags.len());
        indices.insert(desc);
    }

    Ok(indices)
}

/// Collect the catalog and write it to `output` only if collection succeeded
pub fn collect_and_write<S: WebfontSource + ?Sized>(source: &S, output: &Path) -> Result<Indices> {
    let indices = collect_all(source)?;
    write_json(output, &indices)?;
    log::info!("Wrote {} families to {}", indices.len(), output.display());
    Ok(indices)
}
