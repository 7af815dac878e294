use bgs_strings::{LocaleTable, StringTable};
use clap::Args;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::{read_table, Kind, Table};

#[derive(Args)]
pub struct DecodeArgs {
    /// An input string table, or a directory to search for them
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,

    /// The type of string table, detected from the extension when omitted
    #[arg(short, long, value_enum)]
    kind: Option<Kind>,

    /// The locale of the text, taken from the file name when omitted
    #[arg(short, long)]
    locale: Option<String>,

    /// The locale table used to pick a text encoding
    #[arg(short, long, value_enum, default_value_t = Table::Legacy)]
    table: Table,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Allow overwriting existing JSON files
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl DecodeArgs {
    fn create(&self, path: &Path) -> Result<File> {
        let file = if self.overwrite {
            File::create(path)
        } else {
            File::create_new(path)
        };

        file.into_diagnostic()
            .context(format!("creating {}", path.display()))
    }

    fn write(&self, mut out: impl Write, strings: &StringTable) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, strings).into_diagnostic()?;
        writeln!(out).into_diagnostic()
    }

    fn handle_directory(&self, table: &LocaleTable) -> Result<()> {
        let files = WalkDir::new(&self.file)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Kind::from_path(e.path()).is_some());

        let mut count = 0;
        for entry in files {
            let path = entry.path();
            let strings = match read_table(path, self.kind, self.locale.as_deref(), table) {
                Ok(strings) => strings,
                Err(e) => {
                    warn!("skipping {}: {:?}", path.display(), e);
                    continue;
                }
            };

            let mut target = path.as_os_str().to_owned();
            target.push(".json");
            let target = PathBuf::from(target);

            let out = match self.create(&target) {
                Ok(out) => out,
                Err(e) => {
                    warn!("skipping {}: {:?}", path.display(), e);
                    continue;
                }
            };

            info!("writing {} strings to {}", strings.len(), target.display());
            self.write(out, &strings)?;
            count += 1;
        }

        info!("decoded {} string tables", count);
        Ok(())
    }

    pub fn handle(&self) -> Result<()> {
        let table = LocaleTable::from(self.table);

        if self.file.is_dir() {
            if self.output.is_some() {
                return Err(miette!("--output cannot be used with a directory"));
            }
            return self.handle_directory(&table);
        }

        let strings = read_table(&self.file, self.kind, self.locale.as_deref(), &table)?;

        match &self.output {
            Some(path) => {
                info!("writing {} strings to {}", strings.len(), path.display());
                self.write(self.create(path)?, &strings)
            }
            None => self.write(std::io::stdout().lock(), &strings),
        }
    }
}
