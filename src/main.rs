//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::File;
use std::io::Read;
use std::process::exit;

use log::{error, info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

use huffman::bitstream::bitwriter::BitWriter;
use huffman::error::{Error, Result};
use huffman::huffman_coding::codes::{code_map, extract_codes, show_codes};
use huffman::huffman_coding::tree::HuffmanTree;
use huffman::tools::cli::{args_init, Command};
use huffman::tools::freq_count::{FreqTable, ALPHABET_SIZE};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let args = args_init();

    //----- Figure out what we need to do and go do it
    let result = match &args.command {
        Command::Stat { filename } => stat(filename),
        Command::Encode { filename } => encode(filename),
    };

    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
    info!("Done.\n");
}

/// Scan a file into a frequency table and print every occurring byte with
/// its count, then the code the tree assigns it.
fn stat(filename: &str) -> Result<()> {
    let fin = match File::open(filename) {
        Ok(fin) => fin,
        Err(e) => {
            error!("Can not open file '{}'", filename);
            return Err(e.into());
        }
    };

    let mut table = FreqTable::new(ALPHABET_SIZE);
    table.scan(fin)?;

    for (symbol, count) in table.iter().filter(|&(_, count)| count > 0) {
        let (tag, ch) = match u8::try_from(symbol) {
            Ok(b) if b == b' ' || b.is_ascii_graphic() => ("c", b as char),
            _ => ("i", '.'),
        };
        println!("CHAR {}'{}'({}) - {}", tag, ch, symbol, count);
    }
    println!("Total {} types of characters.", table.nonzero_count());

    let tree = HuffmanTree::build(&table);
    show_codes(&tree, &table);
    Ok(())
}

/// Encode a file with codes built from its own frequencies. Two passes:
/// first to count, then to emit each byte's code into <filename>.huf.
fn encode(filename: &str) -> Result<()> {
    let fin = match File::open(filename) {
        Ok(fin) => fin,
        Err(e) => {
            error!("Can not open file '{}'", filename);
            return Err(e.into());
        }
    };

    let mut table = FreqTable::new(ALPHABET_SIZE);
    table.scan(fin)?;

    let tree = HuffmanTree::build(&table);
    let codes = extract_codes(&tree);
    if codes.len() < 2 {
        // A lone symbol gets the empty code, which would write nothing
        warn!(
            "'{}' holds fewer than two distinct byte values, nothing to encode",
            filename
        );
        return Err(Error::TooFewSymbols);
    }
    let map = code_map(&codes);

    let fname = format!("{}.huf", filename);
    let mut bw = BitWriter::create(&fname)?;
    let mut fin = File::open(filename)?;
    let mut buf = vec![0_u8; 1 << 16];
    loop {
        let got = fin.read(&mut buf)?;
        if got == 0 {
            break;
        }
        for &byte in &buf[..got] {
            // Pass one counted every byte, so the map always has a code
            if let Some(code) = map.get(&(byte as u16)) {
                bw.write_buffer(code)?;
            }
        }
    }
    bw.flush()?;

    info!(
        "Encoded {} bytes of '{}' into {} code bits ({} bytes in '{}')",
        table.total(),
        filename,
        bw.bit_len(),
        (bw.bit_len() + 7) / 8,
        fname
    );
    Ok(())
}
