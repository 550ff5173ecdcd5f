// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Taskline v{} - natural language quick entry for markdown tasks",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <text...>", binary_name);
    println!("    echo \"<text>\" | {} [OPTIONS]", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --lang <code>         Pattern language (en, de, fr, es, ru). Overrides config.");
    println!("    --date <YYYY-MM-DD>   Resolve relative dates against this day instead of today.");
    println!("    --json                Print the parsed result as JSON.");
    println!("    --config <path>       Read settings from this TOML file.");
    println!("    -r, --root <path>     Use a different directory for config.");
    println!("    -v, --verbose         Log each extraction step to stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("With no text arguments, each line on stdin is parsed as one task.");
    println!();
    println!("QUICK ENTRY SYNTAX (default triggers):");
    println!("    #tag              Tag (supports hierarchy: #work/reports)");
    println!("    @context          Context (@office, @phone)");
    println!("    +project          Project (+Garden, +[[Big Plan]])");
    println!("    *status           Status (*done, *waiting) or a bare status word");
    println!("    !priority         Priority (!high, !urgent) or a bare priority word");
    println!("    1h30m, 45min      Time estimate");
    println!("    every monday      Recurrence (every 2 weeks, every other day, mondays)");
    println!("    due <date>        Due date (due friday 5pm, by jan 15)");
    println!("    scheduled <date>  Scheduled date (start tomorrow)");
    println!("    <date> to <date>  Range: start becomes scheduled, end becomes due");
    println!();
    println!("EXAMPLES:");
    println!("    {} \"Submit report due tomorrow 5pm #work @office +ProjectX\"", binary_name);
    println!("    {} --json \"Weekly sync every monday 30min\"", binary_name);
    println!("    {} --lang de \"Bericht schreiben morgen dringend\"", binary_name);
    println!();
    println!("CONFIG:");
    println!("    Settings live in config.toml in the platform config directory;");
    println!("    see --root to relocate it.");
}
