use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 transfer function: sRGB to linear, both on 0.0..=1.0
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.040449936 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("critical_planes.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Each plane sits halfway between two adjacent 8-bit channel values,
    // expressed on the 0..=100 linear scale.
    writeln!(file, "/// Linear RGB coordinates (0..=100) where a channel crosses").unwrap();
    writeln!(file, "/// from one 8-bit sRGB value to the next.").unwrap();
    writeln!(file, "pub(crate) static CRITICAL_PLANES: [f64; 255] = [").unwrap();
    for i in 0..255 {
        let srgb = (i as f64 + 0.5) / 255.0;
        let linear = 100.0 * srgb_to_linear_exact(srgb);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        // `{:?}` prints the shortest representation that round-trips exactly.
        write!(file, "    {:?},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
