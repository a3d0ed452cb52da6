//! Writes a folder of synthetic `.NEF` files for trying out `focal-tally`.
//!
//! Each file is a minimal little-endian TIFF container (the layout NEF uses)
//! holding `Make`, `Model`, `FocalLength` and `FNumber`. A few decoys are
//! added: files with other extensions, one without a focal length and one
//! that is not a TIFF at all.
//!
//! Usage: `generate_sample [OUTPUT_DIR] [COUNT]`

use std::fs;
use std::path::Path;

use exif::Tag;

#[path = "../data/fixtures.rs"]
#[allow(dead_code)]
mod fixtures;

use fixtures::{ascii, rational, write_fields as write_tiff};

/// (focal length mm, relative weight) for a typical zoom-heavy shooter.
const FOCAL_WEIGHTS: [(u32, u32); 10] = [
    (18, 6),
    (24, 10),
    (28, 4),
    (35, 14),
    (50, 18),
    (70, 7),
    (85, 9),
    (105, 3),
    (135, 2),
    (200, 1),
];

const MONTHS: [&str; 3] = ["2022-03", "2022-07", "2022-11"];

const APERTURES: [(u32, u32); 6] = [(18, 10), (28, 10), (40, 10), (56, 10), (80, 10), (110, 10)];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: u32) -> u32 {
        (self.next_u64() % n as u64) as u32
    }

    /// Pick a focal length according to `FOCAL_WEIGHTS`.
    fn focal_length(&mut self) -> u32 {
        let total: u32 = FOCAL_WEIGHTS.iter().map(|(_, w)| w).sum();
        let mut pick = self.below(total);
        for &(mm, weight) in &FOCAL_WEIGHTS {
            if pick < weight {
                return mm;
            }
            pick -= weight;
        }
        FOCAL_WEIGHTS[FOCAL_WEIGHTS.len() - 1].0
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let out_dir = args.next().unwrap_or_else(|| "sample_raws".to_string());
    let count: u32 = args
        .next()
        .map(|n| n.parse().expect("COUNT must be a positive integer"))
        .unwrap_or(200);

    let out_dir = Path::new(&out_dir);
    let mut rng = SimpleRng::new(42);

    for (i, month) in MONTHS.iter().enumerate() {
        fs::create_dir_all(out_dir.join(month)).expect("Failed to create output directory");
        // Sidecar decoy: wrong extension, never opened by the scanner.
        fs::write(out_dir.join(month).join(format!("notes_{i}.txt")), b"shoot notes")
            .expect("Failed to write decoy");
    }

    for n in 0..count {
        let dir = out_dir.join(MONTHS[n as usize % MONTHS.len()]);
        let (f_num, f_den) = APERTURES[rng.below(APERTURES.len() as u32) as usize];
        let fields = [
            ascii(Tag::Make, "NIKON CORPORATION"),
            ascii(Tag::Model, "NIKON D7500"),
            rational(Tag::FocalLength, rng.focal_length(), 1),
            rational(Tag::FNumber, f_num, f_den),
        ];
        write_tiff(&dir.join(format!("DSC_{n:04}.NEF")), &fields);

        // Every tenth shot also gets a lowercase-extension copy, which the
        // case-sensitive match skips.
        if n % 10 == 0 {
            write_tiff(&dir.join(format!("DSC_{n:04}.nef")), &fields);
        }
    }

    write_tiff(
        &out_dir.join("NO_FOCAL.NEF"),
        &[ascii(Tag::Make, "NIKON CORPORATION")],
    );
    fs::write(out_dir.join("CORRUPT.NEF"), b"\x00\x00 truncated transfer")
        .expect("Failed to write corrupt sample");

    println!(
        "Wrote {count} sample RAW files (+ decoys) to {}",
        out_dir.display()
    );
}
