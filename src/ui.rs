use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use passmask::crack::CrackOutcome;
use passmask::entropy::{self, CrackTime};

pub const MIN_SAFE_ENTROPY: f64 = 72.0;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

impl DisplayOptions {
    pub fn detect(quiet: bool) -> Self {
        Self {
            unicode_support: supports_unicode::on(supports_unicode::Stream::Stdout),
            color_support: supports_color::on(supports_color::Stream::Stdout).is_some(),
            quiet,
        }
    }
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support { ("✓", "!") } else { ("+", "!") }
}

fn tree_glyphs(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support { ("├─", "└─") } else { ("|-", "`-") }
}

pub fn strength_label(bits: f64) -> &'static str {
    if bits >= PARANOID_ENTROPY {
        "Paranoid"
    } else if bits >= MIN_SAFE_ENTROPY {
        "Strong"
    } else {
        "Weak"
    }
}

fn strength_style(bits: f64, options: &DisplayOptions) -> Style {
    if !options.color_support {
        return Style::new();
    }
    if bits >= MIN_SAFE_ENTROPY {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

pub fn show_progress<F, T>(options: &DisplayOptions, message: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let pb = ProgressBar::new_spinner();

    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let style = if options.unicode_support {
        style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    } else {
        style.tick_chars("-\\|/-")
    };
    pb.set_style(style);

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = f();

    pb.finish_and_clear();
    result
}

pub fn display_analysis(
    possibilities: u128,
    bits: f64,
    time: CrackTime,
    options: &DisplayOptions,
) {
    let (mid, last) = tree_glyphs(options.unicode_support);
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let style = strength_style(bits, options);
    let status = if bits >= MIN_SAFE_ENTROPY {
        check_ok
    } else {
        check_warn
    };

    println!("Possibility space:");
    println!("  {mid} Possibilities {possibilities}");
    println!(
        "  {mid} Entropy       {} {} bits ({})",
        style.apply_to(format!("[{status}]")),
        style.apply_to(format!("{bits:.4}")),
        style.apply_to(strength_label(bits))
    );
    println!(
        "  {mid} Crack time    {:.2} hrs ({:.2} days)",
        time.hours, time.days
    );
    println!(
        "  {last} Rate          {} M h/s",
        entropy::rate_megahashes(entropy::HASH_RATE)
    );
}

pub fn display_crack(outcome: &CrackOutcome, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let ok_style = if options.color_support {
        Style::new().green()
    } else {
        Style::new()
    };
    let warn_style = if options.color_support {
        Style::new().yellow()
    } else {
        Style::new()
    };

    match outcome {
        CrackOutcome::Found { plaintext, elapsed } => {
            println!(
                "{} Recovered: {}",
                ok_style.apply_to(format!("[{check_ok}]")),
                ok_style.apply_to(plaintext)
            );
            if !options.quiet {
                println!("    Took {:.2}s to crack", elapsed.as_secs_f64());
            }
        }
        CrackOutcome::Exhausted { matches, elapsed } => {
            let style = if *matches > 0 { &ok_style } else { &warn_style };
            println!(
                "{} Search space exhausted: {} of the targets matched",
                style.apply_to(format!("[{check_ok}]")),
                style.apply_to(matches)
            );
            if !options.quiet {
                println!("    Cracked {} passwords in {:.2}s", matches, elapsed.as_secs_f64());
            }
        }
        CrackOutcome::TimedOut { matches, elapsed } => {
            println!(
                "{} Timed out after {:.2}s: {} matched so far",
                warn_style.apply_to(format!("[{check_warn}]")),
                elapsed.as_secs_f64(),
                matches
            );
        }
        CrackOutcome::Interrupted { matches, elapsed } => {
            println!(
                "{} Interrupted: {} matched so far",
                warn_style.apply_to(format!("[{check_warn}]")),
                matches
            );
            if !options.quiet {
                println!("    Cracked {} passwords in {:.2}s", matches, elapsed.as_secs_f64());
            }
        }
    }
}

pub fn display_counts(counts: &[(&'static str, usize)], options: &DisplayOptions) {
    let (mid, last) = tree_glyphs(options.unicode_support);

    println!("Catalog categories:");
    for (at, (category, count)) in counts.iter().enumerate() {
        let glyph = if at == counts.len() - 1 { last } else { mid };
        println!("  {glyph} {category:<13} {count}");
    }
}

pub fn display_sample(passphrase: &str) {
    println!("{passphrase}");
}
