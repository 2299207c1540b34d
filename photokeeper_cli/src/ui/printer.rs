//! Functions for printing library entries to the console.

use chrono::Local;
use photokeeper::library::{Entry, LoadReport};
use photokeeper::utils::time::format_medium;

/// 打印列表中的一行：描述与修改时间
pub fn print_entry_row(entry: &Entry) {
    let subtitle = format_medium(&entry.version.modification_date());
    let title = entry
        .metadata
        .as_ref()
        .and_then(|m| m.text.title.as_deref())
        .unwrap_or("");
    if title.is_empty() {
        println!("{:<32} {}", entry.description(), subtitle);
    } else {
        println!("{:<32} {}  \"{}\"", entry.description(), subtitle, title);
    }
}

/// 打印单个条目的详细信息
pub fn print_entry_details(entry: &Entry) {
    println!("----------------------------------------");
    println!("  Name:      {}", entry.description());
    println!("  Path:      {}", entry.file_path.display());

    let modified = entry
        .version
        .modification_date()
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S %Z");
    println!("  Modified:  {}", modified);

    let Some(metadata) = &entry.metadata else {
        println!("  (metadata unavailable)");
        return;
    };

    // 缩略图尺寸；无法解码时只显示字节数
    match &metadata.image {
        Some(thumbnail) => match thumbnail.dimensions() {
            Ok((width, height)) => println!("  Thumbnail: {}x{}", width, height),
            Err(_) => println!("  Thumbnail: {} bytes (undecodable)", thumbnail.len()),
        },
        None => println!("  Thumbnail: (none)"),
    }

    if let Some(title) = &metadata.text.title {
        println!("  Title:     {}", title);
    }
    if let Some(note) = &metadata.text.note {
        println!("  Note:      {}", note);
    }
}

/// Prints the entry list, newest first.
pub fn print_entry_list(entries: &[Entry], detail: bool) {
    if entries.is_empty() {
        println!("(empty)");
        return;
    }
    for entry in entries {
        if detail {
            print_entry_details(entry);
        } else {
            print_entry_row(entry);
        }
    }
    if detail {
        println!("----------------------------------------");
    }
}

/// 打印扫描结果中的失败项
pub fn print_load_report(report: &LoadReport) {
    if report.is_clean() {
        return;
    }
    eprintln!("Warning: {} item(s) could not be loaded:", report.failed.len());
    for (path, error) in &report.failed {
        eprintln!("  - {}: {}", path.display(), error);
    }
}
