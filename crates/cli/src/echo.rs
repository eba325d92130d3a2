use owo_colors::OwoColorize;

use filmwiki_core::Page;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "Filmwiki".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Render movie catalogs into wiki pages\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print a table of rendered pages with their sizes
pub fn print_page_summary(pages: &[Page]) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Pages".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());

    for page in pages {
        eprintln!(
            "  {:<48} {:>9}",
            page.relative_path().display().to_string().bright_white(),
            format_size(page.content().len()).dimmed()
        );
    }

    let total: usize = pages.iter().map(|p| p.content().len()).sum();
    eprintln!("  {} {}\n", format!("{}:", "Total").bold().dimmed(), format_size(total).bright_white());
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
