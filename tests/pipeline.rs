//! End-to-end run of the table -> tree -> codes -> bitstream pipeline
//! against real files.

use std::fs::File;
use std::io::Write;

use huffman::bitstream::bitreader::BitReader;
use huffman::bitstream::bitwriter::BitWriter;
use huffman::huffman_coding::codes::{code_map, extract_codes};
use huffman::huffman_coding::tree::HuffmanTree;
use huffman::tools::freq_count::{FreqTable, ALPHABET_SIZE};

#[test]
fn encode_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.txt");
    let output = dir.path().join("sample.txt.huf");

    let data = b"abracadabra abracadabra\n";
    File::create(&input).unwrap().write_all(data).unwrap();

    // Pass one: count
    let mut table = FreqTable::new(ALPHABET_SIZE);
    table.scan(File::open(&input).unwrap()).unwrap();
    assert_eq!(table.total(), data.len() as u64);

    // Build the code set
    let tree = HuffmanTree::build(&table);
    let codes = extract_codes(&tree);
    let map = code_map(&codes);
    assert!(codes.len() >= 2);

    // Pass two: emit every byte's code
    let mut bw = BitWriter::create(&output).unwrap();
    for &byte in data.iter() {
        bw.write_buffer(&map[&(byte as u16)]).unwrap();
    }
    bw.flush().unwrap();
    let written_bits = bw.bit_len();

    // The encoded stream must read back as exactly the emitted code bits,
    // then zero padding to the byte boundary, then end of stream.
    let mut br = BitReader::open(&output).unwrap();
    for &byte in data.iter() {
        for &bit in map[&(byte as u16)].bits() {
            assert_eq!(br.read_bit().unwrap(), bit);
        }
    }
    let mut padding = 0;
    while let Ok(bit) = br.read_bit() {
        assert_eq!(bit, 0);
        padding += 1;
    }
    assert!(padding < 8);
    assert_eq!((written_bits + padding) % 8, 0);
    assert!(br.at_end());
}

#[test]
fn empty_file_is_an_exhausted_stream() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty");
    File::create(&path).unwrap();

    let br = BitReader::open(&path).unwrap();
    assert!(br.at_end());

    let mut table = FreqTable::new(ALPHABET_SIZE);
    table.scan(File::open(&path).unwrap()).unwrap();
    assert_eq!(table.nonzero_count(), 0);
    assert!(HuffmanTree::build(&table).root.is_none());
}
