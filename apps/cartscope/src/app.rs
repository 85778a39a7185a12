use anyhow::{Context, Result};
use cartscope_core::{
    Header,
    header::{LogoStyle, layout},
    read_rom,
    report::hexpad,
};
use tracing::info;

use crate::args::Args;

pub struct App {
    args: Args,
    rom: Vec<u8>,
}

impl App {
    pub fn new(args: Args) -> Result<Self> {
        let rom = read_rom(&args.rom)
            .with_context(|| format!("loading {}", args.rom.display()))?;
        info!(path = %args.rom.display(), len = rom.len(), "loaded ROM");
        Ok(Self { args, rom })
    }

    pub fn run(&self) -> Result<()> {
        let header = Header::parse(&self.rom)
            .with_context(|| format!("decoding header of {}", self.args.rom.display()))?;

        if self.args.minimal {
            print!("{}", header.minimal_report());
            return Ok(());
        }

        println!();
        if !self.args.no_logo {
            let style = LogoStyle {
                filled: self.args.filled,
                blank: self.args.blank,
            };
            for line in header.logo_art(style) {
                println!("{line}");
            }
            println!();
        }

        if self.args.layout {
            print_layout();
            println!();
        }

        print!("{}", header.report());
        println!();
        Ok(())
    }
}

fn print_layout() {
    for (name, range) in layout::FIELDS {
        println!(
            "{:<22} {}-{} ({} bytes)",
            name,
            hexpad(range.start as u64, 4),
            hexpad(range.end as u64, 4),
            range.len()
        );
    }
}
