use std::io::Read;

use rayon::prelude::*;

use crate::error::Result;

/// One entry per possible byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Inputs above this size are counted in parallel.
const PAR_MIN: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
const PAR_CHUNK: usize = 16_000;

const READ_SIZE: usize = 1 << 16;

/// Occurrence counts for a fixed alphabet, one slot per symbol value in
/// ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: Vec<u64>,
}

impl FreqTable {
    /// A table of `alphabet_size` symbols, every count zero.
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            counts: vec![0; alphabet_size],
        }
    }

    pub fn alphabet_size(&self) -> usize {
        self.counts.len()
    }

    /// Read the source to exhaustion, incrementing the count of every
    /// observed byte. End of input is the read call returning zero bytes,
    /// so no byte value can ever be mistaken for an end marker.
    pub fn scan<R: Read>(&mut self, mut source: R) -> Result<()> {
        let mut buf = vec![0_u8; READ_SIZE];
        loop {
            let got = source.read(&mut buf)?;
            if got == 0 {
                break;
            }
            self.count_bytes(&buf[..got]);
        }
        Ok(())
    }

    /// Add the counts of a slice of data. Uses parallelism when the slice
    /// is over 64k and the table covers the full byte alphabet.
    pub fn count_bytes(&mut self, data: &[u8]) {
        if data.len() > PAR_MIN && self.counts.len() == ALPHABET_SIZE {
            let partial = data
                .par_chunks(PAR_CHUNK)
                .fold(
                    || vec![0_u64; ALPHABET_SIZE],
                    |mut freqs, chunk| {
                        chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                        freqs
                    },
                )
                .reduce(
                    || vec![0_u64; ALPHABET_SIZE],
                    |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
                );
            for (slot, add) in self.counts.iter_mut().zip(partial) {
                *slot += add;
            }
        } else {
            for &el in data {
                if let Some(slot) = self.counts.get_mut(el as usize) {
                    *slot += 1;
                }
            }
        }
    }

    /// Bump one symbol's count by one and return the new count. Returns 0
    /// without applying when the symbol is outside the alphabet - callers
    /// that need to tell "did not apply" from "count is zero" must bounds
    /// check first.
    pub fn increment(&mut self, symbol: u16) -> u64 {
        match self.counts.get_mut(symbol as usize) {
            Some(slot) => {
                *slot += 1;
                *slot
            }
            None => 0,
        }
    }

    /// Overwrite one symbol's count and return it. Same out-of-range
    /// behavior as increment().
    pub fn set_count(&mut self, symbol: u16, count: u64) -> u64 {
        match self.counts.get_mut(symbol as usize) {
            Some(slot) => {
                *slot = count;
                *slot
            }
            None => 0,
        }
    }

    pub fn get(&self, symbol: u16) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// How many symbols occurred at least once.
    pub fn nonzero_count(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Sum of all counts - the number of bytes scanned.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (symbol, count) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(symbol, &count)| (symbol as u16, count))
    }
}

#[cfg(test)]
mod test {
    use super::{FreqTable, ALPHABET_SIZE};

    #[test]
    fn scan_test() {
        let mut table = FreqTable::new(ALPHABET_SIZE);
        table.scan("Hello, world!".as_bytes()).unwrap();
        assert_eq!(table.get(b'l' as u16), 3);
        assert_eq!(table.get(b'o' as u16), 2);
        assert_eq!(table.get(b'H' as u16), 1);
        assert_eq!(table.get(b'z' as u16), 0);
        assert_eq!(table.total(), 13);
        assert_eq!(table.nonzero_count(), 10);
    }

    #[test]
    fn increment_test() {
        let mut table = FreqTable::new(ALPHABET_SIZE);
        assert_eq!(table.increment(b'a' as u16), 1);
        assert_eq!(table.increment(b'a' as u16), 2);
        assert_eq!(table.get(b'a' as u16), 2);
    }

    #[test]
    fn out_of_range_is_a_no_op_test() {
        let mut table = FreqTable::new(ALPHABET_SIZE);
        assert_eq!(table.increment(256), 0);
        assert_eq!(table.set_count(1000, 5), 0);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn parallel_matches_serial_test() {
        // Enough data to take the par_chunks path
        let data: Vec<u8> = (0..100_000_usize).map(|i| (i % 251) as u8).collect();

        let mut par = FreqTable::new(ALPHABET_SIZE);
        par.count_bytes(&data);

        let mut serial = FreqTable::new(ALPHABET_SIZE);
        for &el in &data {
            serial.increment(el as u16);
        }
        assert_eq!(par, serial);
    }

    #[test]
    fn small_alphabet_ignores_strays_test() {
        let mut table = FreqTable::new(16);
        table.count_bytes(&[0, 3, 15, 200, 255]);
        assert_eq!(table.get(3), 1);
        assert_eq!(table.total(), 3);
    }
}
