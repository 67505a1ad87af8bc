use std::fs;
use std::path::Path;

use vpgtag_lib::{Grammar, RawGrammar, parse_grammar};

/// Read and resolve one grammar file.
///
/// `.json` files are decoded directly; anything else goes through the text
/// front end. A grammar without a header is named after its file.
pub fn load_grammar(path: &Path) -> Result<Grammar, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let mut raw = if is_json {
        RawGrammar::from_json(&content)
    } else {
        parse_grammar(&content)
    }
    .map_err(|e| format!("{}: {}", path.display(), e))?;

    if raw.name.is_none() {
        raw.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }

    Grammar::from_raw(&raw).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Load a grammar or exit with a diagnostic.
pub fn load_or_exit(path: &Path) -> Grammar {
    load_grammar(path).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}
