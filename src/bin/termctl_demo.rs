//! Termctl Demo - Interactive terminal paint test
//!
//! A simple CLI program that exercises cursor movement, colors, and font
//! attributes against the real terminal. Run it from an interactive
//! shell; it refuses to start when stdout is redirected.

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use termctl::style::{Color, FontAttr};
use termctl::terminal::{TermResult, Terminal};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> TermResult<()> {
    let mut term = Terminal::stdout()?;
    let size = term.size();
    tracing::info!("Terminal ready: {}x{}", size.cols, size.rows);

    term.clear_screen()?;
    term.to_home()?;

    term.set_foreground(Color::Green)?;
    term.add_attributes(FontAttr::BOLD)?;
    print_text("termctl demo");
    term.reset_attributes()?;

    // One swatch line per color, painted at a fixed column
    let colors = [
        (Color::Red, "red"),
        (Color::Green, "green"),
        (Color::Yellow, "yellow"),
        (Color::Blue, "blue"),
        (Color::Magenta, "magenta"),
        (Color::Cyan, "cyan"),
        (Color::White, "white"),
    ];

    for (i, (color, name)) in colors.iter().enumerate() {
        term.set_position(5, 3 + i as u16)?;
        term.set_foreground(*color)?;
        print_text(name);

        term.move_by(4, 0)?;
        term.add_attributes(FontAttr::UNDERLINE)?;
        print_text("underlined");
        term.remove_attributes(FontAttr::UNDERLINE)?;
    }
    term.reset_attributes()?;

    // Relative-move and save/restore round trip
    let status_row = 3 + colors.len() as u16 + 1;
    term.set_position(1, status_row)?;
    term.save_position()?;
    term.set_foreground(Color::Yellow)?;
    print_text("temporary status line");
    thread::sleep(Duration::from_millis(500));
    term.restore_position()?;
    term.clear_entire_line()?;
    term.reset_attributes()?;
    print_text("done");
    term.move_by(0, 1)?;
    term.to_line_start()?;

    Ok(())
}

/// Write plain text to stdout so it interleaves with the control
/// sequences, which target the same descriptor.
fn print_text(text: &str) {
    let mut out = io::stdout();
    let _ = out.write_all(text.as_bytes());
    let _ = out.flush();
}
