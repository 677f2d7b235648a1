use std::io::{self, BufRead};

use clap::Parser;

use webzhuyin_keyboard::{apply, BufferSurface, KeyPress};

#[derive(Parser)]
#[command(name = "webzhuyin-keyboard")]
#[command(about = "Translate QWERTY key presses into bopomofo text entry")]
#[command(version)]
struct Cli {
    /// Keys to translate in one shot instead of starting the REPL
    keys: Option<String>,
}

fn type_keys(surface: &mut BufferSurface, keys: &str) -> usize {
    let mut passed_through = 0;
    for ch in keys.chars() {
        if !apply(&KeyPress::new(ch.to_string()), surface) {
            passed_through += 1;
        }
    }
    passed_through
}

fn run_repl() {
    println!("webzhuyin keyboard demo — type QWERTY keys and press Enter");
    println!("Example: su3cl3 for ㄋㄧˇ ㄏㄠˇ");
    println!("Ctrl-D to exit.");

    let mut surface = BufferSurface::new();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(raw) => {
                let passed = type_keys(&mut surface, &raw);
                if passed > 0 {
                    println!("({passed} key(s) left to default handling)");
                }
                println!("buffer: {}", surface.text());
            }
            Err(e) => {
                eprintln!("error reading stdin: {}", e);
                break;
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.keys {
        Some(keys) => {
            let mut surface = BufferSurface::new();
            type_keys(&mut surface, &keys);
            println!("{}", surface.text());
        }
        None => run_repl(),
    }
}
