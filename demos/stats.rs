//! Demonstration harness: exercises put, get, occupancy, and overflow
//! handling, printing buffer state for manual inspection.
//!
//! Run with: `cargo run --example stats --features std`

use byte_fifo::ByteFifo;

const MSG: [u8; 15] = [0xD, 0xE, 0xA, 0xD, 0xB, 0xE, 0xE, 0xF, 0, 1, 2, 3, 4, 5, 6];

fn print_contents<const N: usize>(fifo: &ByteFifo<N>) {
    print!("IN WAITING({}): ", fifo.len());
    for i in 0..fifo.len() {
        print!("{:X}", fifo.peek_at(i).unwrap());
        if (i + 1) % 4 == 0 {
            print!(" ");
        }
    }
    println!();
}

fn main() {
    // Simple put and get smaller than the buffer.
    println!("--- put/get within capacity ---");
    let mut fifo: ByteFifo<16> = ByteFifo::new();
    println!("{fifo:?}");
    fifo.put(&MSG[..10]).unwrap();
    println!("{fifo:?}");
    print_contents(&fifo);
    let got = fifo.get_vec(fifo.len()).unwrap();
    println!("got {got:X?}");
    println!("{fifo:?}");
    println!();

    // Put and get that wrap around the end of the storage.
    println!("--- wraparound ---");
    fifo.clear();
    fifo.put(&MSG[..10]).unwrap();
    fifo.get_vec(fifo.len()).unwrap();
    fifo.put(&MSG[..10]).unwrap();
    println!("{fifo:?}");
    print_contents(&fifo);
    let got = fifo.get_vec(fifo.len()).unwrap();
    println!("got {got:X?}");
    println!("{fifo:?}");
    println!();

    // Overflow: the second put fits only 6 of its 10 bytes.
    println!("--- overflow ---");
    fifo.clear();
    fifo.put(&MSG[..10]).unwrap();
    let rejected = fifo.put(&MSG[..10]);
    println!("second put: {rejected:?}");
    println!("{fifo:?}");
    print_contents(&fifo);
    let got = fifo.get_vec(fifo.len()).unwrap();
    println!("got {got:X?}");

    // The buffer keeps working after an overflow.
    fifo.put(&[0, 1, 2, 3, 4]).unwrap();
    let got = fifo.get_vec(fifo.len()).unwrap();
    println!("after recovery got {got:X?}");

    println!("clearing overflow flag");
    fifo.clear_overflow();
    println!("{fifo:?}");
}
