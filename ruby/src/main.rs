use anyhow::Result;
use clap::{Parser, Subcommand};

use webzhuyin_ruby::{
    compose, decompose, generate_style, segment, Layout, RenderConfig, RubyOptions, StyleOptions,
};

#[derive(Parser)]
#[command(name = "webzhuyin")]
#[command(about = "Render zhuyin ruby annotations for Chinese text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render annotated markup for source text plus its transcription
    Render {
        /// Source text; `[...]` groups characters, `\` escapes
        text: String,
        /// Zhuyin transcription, whitespace- or tone-separated
        zhuyin: String,
        /// Layout mode: vert, horiUp or horiRight
        #[arg(long, default_value = "horiRight")]
        layout: String,
        /// id attribute for the container
        #[arg(long, default_value = "")]
        id: String,
        /// Extra class names for the container
        #[arg(long, default_value = "")]
        class: String,
        /// Embed the stylesheet into the markup
        #[arg(long)]
        embed_css: bool,
        /// Leave annotations user-selectable
        #[arg(long)]
        selectable: bool,
        /// Font target: all, zhuyin or none
        #[arg(long, default_value = "all")]
        font_for: String,
        /// TOML render configuration; replaces the individual flags
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
    /// Emit the minified stylesheet for a layout
    Css {
        /// Layout mode: vert, horiUp or horiRight
        #[arg(long, default_value = "horiRight")]
        layout: String,
        /// Scope rules under this id
        #[arg(long, default_value = "")]
        id: String,
        /// Scope rules under these class names
        #[arg(long, default_value = "")]
        class: String,
        /// Font target: all, zhuyin or none
        #[arg(long, default_value = "all")]
        font_for: String,
        /// Skip the @font-face declarations
        #[arg(long)]
        no_font_face: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            text,
            zhuyin,
            layout,
            id,
            class,
            embed_css,
            selectable,
            font_for,
            config,
        } => {
            let (layout, opts) = match config {
                Some(path) => {
                    let cfg = RenderConfig::load_toml(&path)
                        .map_err(|e| anyhow::anyhow!("load config {}: {e}", path.display()))?;
                    (cfg.layout, cfg.ruby)
                }
                None => {
                    let layout: Layout = layout.parse()?;
                    let opts = RubyOptions {
                        id,
                        class,
                        with_css: embed_css,
                        user_selectable: selectable,
                        font_for: font_for.parse()?,
                        ..RubyOptions::default()
                    };
                    (layout, opts)
                }
            };

            let units = segment(&text);
            let pairs = decompose(&zhuyin);
            println!("{}", compose(&units, &pairs, layout, &opts));
        }

        Commands::Css {
            layout,
            id,
            class,
            font_for,
            no_font_face,
        } => {
            let layout: Layout = layout.parse()?;
            let opts = StyleOptions {
                scope_id: id,
                scope_class: class,
                font_for: font_for.parse()?,
                with_font_face: !no_font_face,
            };
            println!("{}", generate_style(layout, &opts));
        }
    }

    Ok(())
}
