/// Profiling binary for flamegraph analysis
/// Processes multiple HTML files to generate sufficient samples
use content_gravity::extract;
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: profile_extract <html_dir> [limit]");
        eprintln!("  html_dir: Directory containing HTML files");
        eprintln!("  limit: Optional max number of files to process (default: all)");
        std::process::exit(1);
    }

    let dir = &args[1];
    let limit: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(usize::MAX);

    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html" || ext == "htm"))
        .collect();

    entries.sort_by_key(fs::DirEntry::path);

    let total = entries.len().min(limit);
    eprintln!("Processing {total} HTML files from {dir}");

    let mut with_content = 0;
    let mut empty = 0;
    let mut failed = 0;
    let mut total_bytes = 0usize;

    for entry in entries.into_iter().take(limit) {
        let Ok(html) = fs::read_to_string(entry.path()) else {
            failed += 1;
            continue;
        };
        total_bytes += html.len();

        match extract(&html) {
            Ok(result) if result.top_node_score.is_some() => with_content += 1,
            Ok(_) => empty += 1,
            Err(_) => failed += 1,
        }
    }

    eprintln!(
        "Processed {} files ({} MB): {} with content, {} empty, {} failed",
        total,
        total_bytes / 1_000_000,
        with_content,
        empty,
        failed
    );

    Ok(())
}
