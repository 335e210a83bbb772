//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════╗
║     Cambly Downloader                         ║
║     Save your lesson recordings locally       ║
╚═══════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(email: &str, limit: i64, destination: &str) {
    let limit_label = if limit > 0 {
        limit.to_string()
    } else {
        "all".to_string()
    };

    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Account: {}", email);
    println!("  Lessons: {}", limit_label);
    println!("  Directory: {}", destination);
    println!();
}
