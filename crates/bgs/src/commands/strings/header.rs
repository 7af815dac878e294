use bgs_strings::read::parse_directory;
use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct HeaderArgs {
    /// An input string table
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Also list the directory entries
    #[arg(long, default_value_t = false)]
    entries: bool,
}

impl HeaderArgs {
    pub fn handle(&self) -> Result<()> {
        let data = std::fs::read(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;

        let header = bgs_strings::parse_header(&data)?;

        println!("{}", self.file.display().bold());
        println!("  strings:    {}", header.strings_count);
        println!("  data size:  {}", header.data_size);
        println!(
            "  data block: {:#x}..{:#x}",
            header.data_start(),
            header.data_end()
        );
        println!("  file size:  {}", data.len());

        if header.data_end() > data.len() as u64 {
            println!("  {}", "data block runs past the end of the file".red());
        }

        if self.entries {
            for entry in parse_directory(&data, &header)? {
                let marker = if entry.offset >= header.data_size {
                    format!("{}", "out of bounds".red())
                } else {
                    String::new()
                };
                println!("  {:>10} @ {:#010x} {}", entry.id, entry.offset, marker);
            }
        }

        Ok(())
    }
}
