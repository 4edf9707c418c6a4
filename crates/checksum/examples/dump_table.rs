//! Print a variant's lookup table as a Rust array literal.
//!
//! Run with: `cargo run --example dump_table -p checksum -- CRC-16/KERMIT`
//!
//! Without an argument every named variant is printed.

use checksum::{Crc16, Crc32, CrcParams};

fn main() {
  let wanted = std::env::args().nth(1);

  let selected: Vec<CrcParams> = match wanted.as_deref() {
    Some(name) => match CrcParams::by_name(name) {
      Some(params) => vec![params],
      None => {
        eprintln!("unknown variant {name:?}; known variants:");
        for params in CrcParams::CATALOGUE {
          eprintln!("  {}", params.name);
        }
        std::process::exit(2);
      }
    },
    None => CrcParams::CATALOGUE.to_vec(),
  };

  for params in selected {
    println!("// {} (poly {:#x}, reflect_in {})", params.name, params.polynomial, params.reflect_in);
    let result = match params.width {
      16 => Crc16::from_params(&params).map(|engine| engine.table_literal().to_string()),
      _ => Crc32::from_params(&params).map(|engine| engine.table_literal().to_string()),
    };
    match result {
      Ok(literal) => println!("{literal}\n"),
      Err(err) => eprintln!("{}: {err}", params.name),
    }
  }
}
