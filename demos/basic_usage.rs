//! Basic usage example for packetmaker
//!
//! Run with: cargo run --example basic_usage

use packetmaker::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    println!("packetmaker Basic Usage Example");
    println!("===============================");

    // Example 1: Declare, then make
    println!("\n1. Simple Packet:");
    {
        let mut maker = Maker::new();
        maker
            .byte(0x01) // message type
            .u32(12345, Endian::Big) // sequence number
            .u64(1_700_000_000_000_000_000, Endian::Big) // timestamp (ns)
            .string("AAPL");

        println!("  Declared {} fields, {} bytes", maker.field_count(), maker.len());
        println!("  Bytes: {}", hex(&maker.make()));
    }

    // Example 2: Endianness
    println!("\n2. Endianness:");
    {
        let big = Maker::new().u16(60000, Endian::Big).make();
        let little = Maker::new().u16(60000, Endian::Little).make();
        println!("  u16 60000 big-endian:    {}", hex(&big));
        println!("  u16 60000 little-endian: {}", hex(&little));

        let signed = Maker::new().i32(-2_000_000_069, Endian::Little).make();
        println!("  i32 -2000000069 little-endian: {}", hex(&signed));
    }

    // Example 3: Reusing a scratch pad
    println!("\n3. Pad Reuse:");
    {
        let mut pad = Some(Vec::with_capacity(64));

        for seq in 0..3u32 {
            let mut maker = Maker::new();
            maker.u32(seq, Endian::Big).string("heartbeat");

            let (section, reallocated) = maker.manipulate_pad(pad.take());
            println!(
                "  seq={} len={} reallocated={} bytes: {}",
                seq,
                section.len(),
                reallocated,
                hex(&section)
            );
            pad = Some(section);
        }

        // An undersized pad falls back to a fresh buffer
        let mut maker = Maker::new();
        maker.owned_bytes(vec![0u8; 128]);
        let (section, reallocated) = maker.manipulate_pad(pad.take());
        println!(
            "  128-byte packet into 64-byte pad: len={} reallocated={}",
            section.len(),
            reallocated
        );
    }

    // Example 4: Writing into a caller buffer
    println!("\n4. Caller-provided Buffer:");
    {
        let mut maker = Maker::new();
        maker.u16(4, Endian::Big).string("ping");

        let mut buf = [0u8; 16];
        let size = maker.write_into(&mut buf)?;
        println!("  Wrote {} bytes: {}", size, hex(&buf[..size]));

        let mut tiny = [0u8; 2];
        match maker.write_into(&mut tiny) {
            Ok(_) => println!("  Unexpected success"),
            Err(e) => println!("  2-byte buffer: {}", e),
        }
    }

    // Example 5: Batching several packets into one vector
    println!("\n5. Batch Append:");
    {
        let mut out = Vec::new();
        for seq in 0..4u16 {
            let mut maker = Maker::new();
            maker.u16(seq, Endian::Little).byte(b';');
            maker.append_to(&mut out);
        }
        println!("  {} bytes: {}", out.len(), hex(&out));
    }

    Ok(())
}
