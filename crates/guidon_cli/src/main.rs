//! guidon: Terminal indent guide renderer.
//!
//! Usage:
//!   guidon [options] [file...]
//!
//! Plays the role of the editor host: reads source files, runs the
//! indent guide overlay over each line, and paints a vertical mark at
//! every indentation level.

use clap::Parser;
use guidon_core::{advance_column, LineIndex};
use guidon_overlay::{scan_line, GuideSpan, GuideStyle, IndentGuideOverlay, OverlayRegistry};
use guidon_settings::{EditorSettings, Preferences};
use std::io::IsTerminal;
use std::path::Path;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "guidon", about = "guidon - indent guide renderer for the terminal")]
struct Cli {
    /// Source files to render.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Number of columns in one indentation unit.
    #[arg(long = "tab-width", default_value_t = 4)]
    tab_width: u32,

    /// Use '|' instead of the box-drawing guide character.
    #[arg(long)]
    ascii: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Print "line:column depth style" spans instead of painting lines.
    #[arg(long = "list-spans")]
    list_spans: bool,

    /// Path to a preferences file carrying the enabled toggle.
    #[arg(long)]
    prefs: Option<String>,

    /// Flip the enabled toggle in the preferences file and exit.
    #[arg(long)]
    toggle: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

// Guide colors cycled by depth: cyan, magenta, blue, yellow, green
const GUIDE_COLORS: &[&str] = &["\x1b[36m", "\x1b[35m", "\x1b[34m", "\x1b[33m", "\x1b[32m"];

fn main() {
    let cli = Cli::parse();

    let exit_code = if cli.toggle {
        run_toggle(&cli)
    } else {
        run_render(&cli)
    };
    process::exit(exit_code);
}

fn run_toggle(cli: &Cli) -> i32 {
    let Some(ref path) = cli.prefs else {
        print_error("--toggle requires --prefs <path>.");
        return 1;
    };

    let mut prefs = if Path::new(path).exists() {
        match guidon_settings::load_preferences_file(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                print_error(&format!("Failed to load preferences '{}': {}", path, e));
                return 1;
            }
        }
    } else {
        Preferences::default()
    };

    let enabled = prefs.toggle();
    if let Err(e) = guidon_settings::save_preferences_file(path, &prefs) {
        print_error(&format!("Failed to save preferences '{}': {}", path, e));
        return 1;
    }

    println!("Indent guides {}.", if enabled { "on" } else { "off" });
    0
}

fn run_render(cli: &Cli) -> i32 {
    if cli.files.is_empty() {
        print_error("No input files.");
        return 1;
    }

    let settings = EditorSettings::new(cli.tab_width);

    // Invoked by hand, the renderer defaults to on; a preferences file
    // supplies the persisted toggle instead.
    let prefs = match cli.prefs {
        Some(ref path) => match guidon_settings::load_preferences_file(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                print_error(&format!("Failed to load preferences '{}': {}", path, e));
                return 1;
            }
        },
        None => Preferences { enabled: true },
    };

    let overlay = IndentGuideOverlay;
    let mut registry = OverlayRegistry::new();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let mut exit_code = 0;
    for (pane, file) in cli.files.iter().enumerate() {
        let pane = pane as u32;
        registry.sync(pane, &prefs);

        let text = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) => {
                print_error(&format!("Failed to read '{}': {}", file, e));
                exit_code = 1;
                continue;
            }
        };

        let index = LineIndex::new(&text);
        for line_no in 0..index.line_count() {
            let line = index.line(&text, line_no as u32);

            if !registry.is_attached(pane) {
                if !cli.list_spans {
                    println!("{}", line);
                }
                continue;
            }

            let spans = scan_line(&overlay, line, &settings);
            if cli.list_spans {
                for span in &spans {
                    println!(
                        "{}:{} {} {}",
                        line_no + 1,
                        span.column,
                        span.depth,
                        GuideStyle::new(span.depth)
                    );
                }
            } else {
                println!("{}", paint_line(line, &spans, &settings, cli.ascii, use_color));
            }
        }
    }

    exit_code
}

/// Repaint one line with guide marks over its indentation columns.
fn paint_line(
    line: &str,
    spans: &[GuideSpan],
    settings: &EditorSettings,
    ascii: bool,
    use_color: bool,
) -> String {
    let guide_char = if ascii { '|' } else { '│' };
    let tab_width = settings.space_units();

    // Expand leading whitespace to display columns and find where the
    // content starts.
    let mut indent_cols = 0u32;
    let mut content = "";
    for (at, ch) in line.char_indices() {
        if ch == ' ' || ch == '\t' {
            indent_cols = advance_column(indent_cols, ch, tab_width);
        } else {
            content = &line[at..];
            break;
        }
    }

    // Overwrite the classified guide columns with marks.
    let mut cells: Vec<Option<u32>> = vec![None; indent_cols as usize];
    for span in spans {
        if let Some(cell) = cells.get_mut(span.column as usize) {
            *cell = Some(span.depth);
        }
    }

    let mut out = String::with_capacity(line.len() + 16);
    for cell in &cells {
        match cell {
            Some(depth) if use_color => {
                let color = GUIDE_COLORS[*depth as usize % GUIDE_COLORS.len()];
                out.push_str(color);
                out.push(guide_char);
                out.push_str(RESET);
            }
            Some(_) => out.push(guide_char),
            None => out.push(' '),
        }
    }
    out.push_str(content);
    out
}

fn print_error(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}
