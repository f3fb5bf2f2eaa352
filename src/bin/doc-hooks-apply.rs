use doc_hooks::{parse_document, HookError, Renderer, Route};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: doc-hooks-apply <document.yaml> <route-url> [origin]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  doc-hooks-apply page.yaml 'https://docs.example.org/#/guide/install'");
        eprintln!("  doc-hooks-apply page.yaml 'https://docs.example.org/#/api' 'https://docs.example.org'");
        process::exit(1);
    }

    let file_path = &args[1];
    let url = &args[2];
    let origin = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| origin_of(url));

    match apply_file(file_path, url, &origin) {
        Ok(yaml) => {
            println!("✓ {} rewritten for route {}", file_path, url);
            println!("{}", yaml);
        }
        Err(e) => {
            eprintln!("✗ {} has errors:", file_path);
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}

fn apply_file(path: &str, url: &str, origin: &str) -> Result<String, HookError> {
    let content = fs::read_to_string(path)
        .map_err(|e| HookError::ValidationError(format!("Failed to read file: {}", e)))?;

    let mut doc = parse_document(&content)?;
    let route = Route::new(url, origin);
    let mut renderer = Renderer::with_default_plugins();
    renderer.render(&mut doc, &route);

    serde_yaml::to_string(&doc).map_err(|e| HookError::YamlError(e.to_string()))
}

/// Scheme-plus-host prefix of a URL, best effort: everything up to the first
/// `/` after the `://`.
fn origin_of(url: &str) -> String {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            match rest.find('/') {
                Some(host_end) => url[..scheme_end + 3 + host_end].to_string(),
                None => url.to_string(),
            }
        }
        None => String::new(),
    }
}
